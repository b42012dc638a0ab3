//! # OS Factory
//!
//! `cw_os_std::os_factory` handles OS creation and registration. The factory
//! instantiates the core contracts of a new OS and registers them with the
//! [`crate::version_control`] contract under the next id of its sequence.

pub mod state {
    use cosmwasm_std::Addr;
    use cw_storage_plus::Item;

    /// OS Factory configuration
    #[cosmwasm_schema::cw_serde]
    pub struct Config {
        pub admin: Addr,
        pub version_control_contract: Addr,
    }

    pub const CONFIG: Item<Config> = Item::new("cfg");
    /// Id that the next created OS will claim.
    pub const OS_ID_SEQUENCE: Item<u64> = Item::new("os_id_seq");
}

use cosmwasm_schema::QueryResponses;
use cosmwasm_std::{Addr, Uint64};

/// Msg used on instantiation
#[cosmwasm_schema::cw_serde]
pub struct InstantiateMsg {
    /// Admin of the contract
    pub admin: String,
    /// Version control contract the factory registers new OS instances with
    pub version_control_address: String,
}

/// OS Factory execute messages
#[cosmwasm_schema::cw_serde]
#[derive(cw_orch::ExecuteFns)]
pub enum ExecuteMsg {
    /// Creates the core contracts of a new OS and registers them
    /// with version control under the next sequence id.
    CreateOs {},
    /// Update config
    UpdateConfig {
        // New version control contract
        version_control_contract: Option<String>,
    },
}

/// OS Factory query messages
#[cosmwasm_schema::cw_serde]
#[derive(QueryResponses, cw_orch::QueryFns)]
pub enum QueryMsg {
    /// Returns [`ConfigResponse`]
    #[returns(ConfigResponse)]
    Config {},
}

/// OS Factory config response
#[cosmwasm_schema::cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub version_control_contract: Addr,
    /// Id the next created OS will claim. The most recently created OS
    /// therefore has id `os_id_sequence - 1`.
    pub os_id_sequence: Uint64,
}

/// OS Factory migrate messages
#[cosmwasm_schema::cw_serde]
pub struct MigrateMsg {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_id_sequence_serializes_as_string() {
        let resp = ConfigResponse {
            admin: Addr::unchecked("admin"),
            version_control_contract: Addr::unchecked("vc"),
            os_id_sequence: Uint64::new(5),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["os_id_sequence"], "5");

        let back: ConfigResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back.os_id_sequence.u64(), 5);
    }

    #[test]
    fn config_without_a_sequence_fails_to_deserialize() {
        let json = serde_json::json!({
            "admin": "admin",
            "version_control_contract": "vc",
        });
        assert!(serde_json::from_value::<ConfigResponse>(json).is_err());
    }
}
