//! # Treasury
//!
//! `cw_os_std::treasury` holds the funds of an OS. Only whitelisted dapps
//! may act on it; the manager whitelists them when they are enabled.

pub mod state {
    use cosmwasm_std::Addr;
    use cw_controllers::Admin;
    use cw_storage_plus::Item;

    pub const ADMIN: Admin = Admin::new("admin");
    /// Dapps allowed to act on the treasury
    pub const DAPPS: Item<Vec<Addr>> = Item::new("dapps");
}

use cosmwasm_schema::QueryResponses;

/// Msg used on instantiation
#[cosmwasm_schema::cw_serde]
pub struct InstantiateMsg {}

/// Treasury execute messages
#[cosmwasm_schema::cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum ExecuteMsg {
    /// Whitelist a dapp address
    AddDapp { dapp: String },
    /// Remove a dapp from the whitelist
    RemoveDapp { dapp: String },
}

/// Treasury query messages
#[cosmwasm_schema::cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum QueryMsg {
    /// Returns [`ConfigResponse`]
    #[returns(ConfigResponse)]
    Config {},
}

#[cosmwasm_schema::cw_serde]
pub struct ConfigResponse {
    pub dapps: Vec<String>,
}

/// Treasury migrate messages
#[cosmwasm_schema::cw_serde]
pub struct MigrateMsg {}
