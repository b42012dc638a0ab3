//! # Terraswap dapp
//!
//! Init payload of the Terraswap dapp module. The manager passes it on when
//! the dapp is enabled through
//! [`crate::manager::ExecuteMsg::AddInternalDapp`].

/// Msg used on instantiation.
///
/// `trader` and `memory_addr` both carry the address of the wallet that
/// registers the dapp. Deployed instances were initialized that way, so the
/// duplication is kept as-is.
#[cosmwasm_schema::cw_serde]
pub struct InstantiateMsg {
    pub treasury_address: String,
    pub trader: String,
    pub memory_addr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_payload_has_exactly_the_expected_keys() {
        let sender = "terra1sender".to_string();
        let msg = InstantiateMsg {
            treasury_address: "terra1treasury".to_string(),
            trader: sender.clone(),
            memory_addr: sender.clone(),
        };

        let json = serde_json::to_value(&msg).unwrap();
        let map = json.as_object().unwrap();
        let mut keys: Vec<_> = map.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["memory_addr", "trader", "treasury_address"]);

        assert_eq!(json["treasury_address"], "terra1treasury");
        assert_eq!(json["trader"], sender);
        assert_eq!(json["memory_addr"], sender);
    }
}
