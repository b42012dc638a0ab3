pub use cw_os_std::treasury::{
    ExecuteMsgFns as TreasuryExecFns, QueryMsgFns as TreasuryQueryFns,
};
use cw_os_std::{treasury::*, TREASURY};
use cw_orch::{interface, prelude::*};

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg)]
pub struct Treasury<Chain>;

#[cfg(feature = "testing")]
impl<Chain: CwEnv> Uploadable for Treasury<Chain> {
    fn wrapper() -> Box<dyn MockContract<Empty, Empty>> {
        Box::new(ContractWrapper::new_with_empty(
            crate::mocks::treasury::execute,
            crate::mocks::treasury::instantiate,
            crate::mocks::treasury::query,
        ))
    }
}

impl<Chain: CwEnv> Treasury<Chain> {
    pub fn load(chain: Chain, address: &Addr) -> Self {
        let contract = cw_orch::contract::Contract::new(TREASURY, chain);
        contract.set_address(address);
        Self(contract)
    }

    pub fn config(&self) -> Result<ConfigResponse, crate::CwOsInterfaceError> {
        let resp: ConfigResponse = self.query(&QueryMsg::Config {})?;
        Ok(resp)
    }
}
