//! # Manager
//!
//! `cw_os_std::manager` is the entry point of a single OS instance. It keeps
//! the addresses of the modules enabled on the OS and lets the root user
//! enable additional internal dapps.

pub mod state {
    use cosmwasm_std::Addr;
    use cw_controllers::Admin;
    use cw_storage_plus::{Item, Map};

    #[cosmwasm_schema::cw_serde]
    pub struct Config {
        pub version_control_address: Addr,
        pub os_id: u64,
    }

    /// Root user of the OS
    pub const ROOT: Admin = Admin::new("root");
    pub const CONFIG: Item<Config> = Item::new("cfg");
    /// Module name -> module address
    pub const OS_MODULES: Map<&str, Addr> = Map::new("os_modules");
}

use cosmwasm_schema::QueryResponses;
use cosmwasm_std::{Addr, Binary};

/// Msg used on instantiation
#[cosmwasm_schema::cw_serde]
pub struct InstantiateMsg {
    pub os_id: u64,
    pub root_user: String,
    pub version_control_address: String,
}

/// Manager execute messages
#[cosmwasm_schema::cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum ExecuteMsg {
    /// Updates the enabled modules
    UpdateModuleAddresses {
        to_add: Vec<(String, String)>,
        to_remove: Vec<String>,
    },
    /// Instantiate an internal dapp module and enable it on this OS
    AddInternalDapp {
        module: String,
        version: Option<String>,
        init_msg: Binary,
    },
    /// Sets a new root user
    SetRoot { root_user: String },
    /// Update config
    UpdateConfig {
        version_control_address: Option<String>,
    },
}

/// Manager query messages
#[cosmwasm_schema::cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum QueryMsg {
    /// Returns the addresses of the requested modules.
    /// Names without an enabled module are left out of the response.
    #[returns(ModulesResponse)]
    Modules { names: Vec<String> },
    /// Returns the names of all modules enabled on this OS
    #[returns(EnabledModulesResponse)]
    EnabledModules {},
    /// Returns [`OsConfigResponse`]
    #[returns(OsConfigResponse)]
    OsConfig {},
}

#[cosmwasm_schema::cw_serde]
pub struct ModulesResponse {
    pub modules: Vec<(String, Addr)>,
}

#[cosmwasm_schema::cw_serde]
pub struct EnabledModulesResponse {
    pub modules: Vec<String>,
}

#[cosmwasm_schema::cw_serde]
pub struct OsConfigResponse {
    pub root_user: Addr,
    pub version_control_address: Addr,
    pub os_id: u64,
}

/// Manager migrate messages
#[cosmwasm_schema::cw_serde]
pub struct MigrateMsg {}
