pub use cw_os_std::os_factory::{
    ExecuteMsgFns as OsFactoryExecFns, QueryMsgFns as OsFactoryQueryFns,
};
use cw_os_std::{os_factory::*, OS_FACTORY};
use cw_orch::{interface, prelude::*};

use cosmwasm_std::Uint64;

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg)]
pub struct OsFactory<Chain>;

#[cfg(feature = "testing")]
impl<Chain: CwEnv> Uploadable for OsFactory<Chain> {
    fn wrapper() -> Box<dyn MockContract<Empty, Empty>> {
        Box::new(ContractWrapper::new_with_empty(
            crate::mocks::os_factory::execute,
            crate::mocks::os_factory::instantiate,
            crate::mocks::os_factory::query,
        ))
    }
}

impl<Chain: CwEnv> OsFactory<Chain> {
    pub fn load(chain: Chain, address: &Addr) -> Self {
        let contract = cw_orch::contract::Contract::new(OS_FACTORY, chain);
        contract.set_address(address);
        Self(contract)
    }

    /// Id of the most recently created OS.
    pub fn latest_os_id(&self) -> Result<u64, crate::CwOsInterfaceError> {
        let config: ConfigResponse = self.query(&QueryMsg::Config {})?;
        let latest = latest_os_id(config.os_id_sequence)?;

        log::debug!("Latest OS id: {}", latest);
        Ok(latest)
    }
}

/// The sequence holds the id the *next* OS will claim, so the latest
/// existing OS sits one below it. A sequence of zero means the factory has
/// not created any OS yet.
pub(crate) fn latest_os_id(sequence: Uint64) -> Result<u64, crate::CwOsInterfaceError> {
    sequence
        .u64()
        .checked_sub(1)
        .ok_or(crate::CwOsInterfaceError::NoOsCreated {})
}
