pub use cw_os_std::manager::{ExecuteMsgFns as ManagerExecFns, QueryMsgFns as ManagerQueryFns};
use cw_os_std::{manager::*, MANAGER};
use cw_orch::{interface, prelude::*};

use cosmwasm_std::to_json_binary;
use serde::Serialize;

#[interface(InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg)]
pub struct Manager<Chain>;

#[cfg(feature = "testing")]
impl<Chain: CwEnv> Uploadable for Manager<Chain> {
    fn wrapper() -> Box<dyn MockContract<Empty, Empty>> {
        Box::new(ContractWrapper::new_with_empty(
            crate::mocks::manager::execute,
            crate::mocks::manager::instantiate,
            crate::mocks::manager::query,
        ))
    }
}

impl<Chain: CwEnv> Manager<Chain> {
    pub fn load(chain: Chain, address: &Addr) -> Self {
        let contract = cw_orch::contract::Contract::new(MANAGER, chain);
        contract.set_address(address);
        Self(contract)
    }

    /// Query the addresses of the given modules. Names without an enabled
    /// module are left out of the response.
    pub fn module_addresses(
        &self,
        names: &[&str],
    ) -> Result<ModulesResponse, crate::CwOsInterfaceError> {
        let resp: ModulesResponse = self.query(&QueryMsg::Modules {
            names: names.iter().map(ToString::to_string).collect(),
        })?;
        Ok(resp)
    }

    /// Query the address of a single module and check it is the one asked
    /// for, rather than trusting the position of the response entries.
    pub fn module_address(&self, name: &str) -> Result<Addr, crate::CwOsInterfaceError> {
        let resp = self.module_addresses(&[name])?;
        extract_module_address(&resp, name)
    }

    pub fn enabled_modules(&self) -> Result<Vec<String>, crate::CwOsInterfaceError> {
        let resp: EnabledModulesResponse = self.query(&QueryMsg::EnabledModules {})?;
        Ok(resp.modules)
    }

    pub fn os_config(&self) -> Result<OsConfigResponse, crate::CwOsInterfaceError> {
        let resp: OsConfigResponse = self.query(&QueryMsg::OsConfig {})?;
        Ok(resp)
    }

    /// Enable an internal dapp module on this OS with the given init payload.
    pub fn register_internal_dapp<M: Serialize>(
        &self,
        module: &str,
        version: Option<String>,
        init_msg: &M,
    ) -> Result<Chain::Response, crate::CwOsInterfaceError> {
        let resp = self.execute(
            &ExecuteMsg::AddInternalDapp {
                module: module.to_string(),
                version,
                init_msg: to_json_binary(init_msg)?,
            },
            &[],
        )?;

        log::info!("Module {} registered", module);
        Ok(resp)
    }
}

pub(crate) fn extract_module_address(
    resp: &ModulesResponse,
    name: &str,
) -> Result<Addr, crate::CwOsInterfaceError> {
    resp.modules
        .iter()
        .find(|(module, _)| module == name)
        .map(|(_, address)| address.clone())
        .ok_or_else(|| crate::CwOsInterfaceError::ModuleNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_address_comes_from_the_matching_pair() {
        let resp = ModulesResponse {
            modules: vec![
                ("Terraswap".to_string(), Addr::unchecked("terra1swap")),
                ("Treasury".to_string(), Addr::unchecked("terra1treasury")),
            ],
        };
        let addr = extract_module_address(&resp, "Treasury").unwrap();
        assert_eq!(addr, Addr::unchecked("terra1treasury"));
    }

    #[test]
    fn missing_module_is_an_error() {
        let resp = ModulesResponse { modules: vec![] };
        assert!(matches!(
            extract_module_address(&resp, "Treasury"),
            Err(crate::CwOsInterfaceError::ModuleNotFound(name)) if name == "Treasury"
        ));
    }
}
