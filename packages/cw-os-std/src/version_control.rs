//! # Version Control
//!
//! `cw_os_std::version_control` is the on-chain registry of the suite. It
//! maps OS ids to their manager addresses and (module, version) pairs to
//! uploaded code ids. Only the factory may register new OS instances.

pub mod state {
    use cosmwasm_std::Addr;
    use cw_controllers::Admin;
    use cw_storage_plus::Map;

    pub const ADMIN: Admin = Admin::new("admin");
    /// The factory is the only non-admin sender allowed to register an OS.
    pub const FACTORY: Admin = Admin::new("factory");

    /// OS id -> manager address of that OS
    pub const OS_ADDRESSES: Map<u64, Addr> = Map::new("os_addresses");
    /// (module name, version) -> code id
    pub const MODULE_CODE_IDS: Map<(&str, &str), u64> = Map::new("module_code_ids");
}

use cosmwasm_schema::QueryResponses;
use cosmwasm_std::Addr;

use crate::manager::EnabledModulesResponse;

/// Msg used on instantiation
#[cosmwasm_schema::cw_serde]
pub struct InstantiateMsg {}

/// Version Control execute messages
#[cosmwasm_schema::cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum ExecuteMsg {
    /// Register a new OS. Only the factory or the admin may call this.
    AddOs { os_id: u64, os_address: String },
    /// Register a code id for a module version
    AddCodeId {
        module: String,
        version: String,
        code_id: u64,
    },
    /// Sets a new admin
    SetAdmin { new_admin: String },
    /// Sets the factory allowed to register OS instances
    SetFactory { new_factory: String },
}

/// Version Control query messages
#[cosmwasm_schema::cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum QueryMsg {
    /// Returns the manager address registered for an OS id
    #[returns(OsAddressResponse)]
    OsAddress { os_id: u64 },
    /// Returns the code id registered for a module version
    #[returns(CodeIdResponse)]
    CodeId { module: String, version: String },
    /// Returns the modules enabled on an OS, resolved through its manager
    #[returns(EnabledModulesResponse)]
    EnabledModules { os_id: u64 },
}

#[cosmwasm_schema::cw_serde]
pub struct OsAddressResponse {
    pub os_address: Addr,
}

#[cosmwasm_schema::cw_serde]
pub struct CodeIdResponse {
    pub code_id: u64,
}

/// Version Control migrate messages
#[cosmwasm_schema::cw_serde]
pub struct MigrateMsg {}
