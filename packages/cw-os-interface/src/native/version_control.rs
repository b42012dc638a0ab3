pub use cw_os_std::version_control::{
    ExecuteMsgFns as VersionControlExecFns, QueryMsgFns as VersionControlQueryFns,
};
use cw_os_std::{version_control::*, VERSION_CONTROL};
use cw_orch::{interface, prelude::*};

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg)]
pub struct VersionControl<Chain>;

#[cfg(feature = "testing")]
impl<Chain: CwEnv> Uploadable for VersionControl<Chain> {
    fn wrapper() -> Box<dyn MockContract<Empty, Empty>> {
        Box::new(ContractWrapper::new_with_empty(
            crate::mocks::version_control::execute,
            crate::mocks::version_control::instantiate,
            crate::mocks::version_control::query,
        ))
    }
}

impl<Chain: CwEnv> VersionControl<Chain> {
    pub fn load(chain: Chain, address: &Addr) -> Self {
        let contract = cw_orch::contract::Contract::new(VERSION_CONTROL, chain);
        contract.set_address(address);
        Self(contract)
    }

    /// Manager address registered for the given OS id.
    pub fn os_address(&self, os_id: u64) -> Result<Addr, crate::CwOsInterfaceError> {
        let resp: OsAddressResponse = self.query(&QueryMsg::OsAddress { os_id })?;
        Ok(resp.os_address)
    }

    /// Code id registered for a module version.
    pub fn code_id(&self, module: &str, version: &str) -> Result<u64, crate::CwOsInterfaceError> {
        let resp: CodeIdResponse = self.query(&QueryMsg::CodeId {
            module: module.to_string(),
            version: version.to_string(),
        })?;
        Ok(resp.code_id)
    }

    /// Names of the modules enabled on an OS, resolved through its manager.
    pub fn enabled_modules(&self, os_id: u64) -> Result<Vec<String>, crate::CwOsInterfaceError> {
        let resp: cw_os_std::manager::EnabledModulesResponse =
            self.query(&QueryMsg::EnabledModules { os_id })?;
        Ok(resp.modules)
    }
}
