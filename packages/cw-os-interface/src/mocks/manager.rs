use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdError,
    StdResult,
};

use cw_os_std::manager::{
    state::{Config, CONFIG, OS_MODULES, ROOT},
    EnabledModulesResponse, ExecuteMsg, InstantiateMsg, ModulesResponse, OsConfigResponse,
    QueryMsg,
};

pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let root = deps.api.addr_validate(&msg.root_user)?;
    let config = Config {
        version_control_address: deps.api.addr_validate(&msg.version_control_address)?,
        os_id: msg.os_id,
    };
    CONFIG.save(deps.storage, &config)?;
    ROOT.set(deps.branch(), Some(root))?;

    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::UpdateModuleAddresses { to_add, to_remove } => {
            assert_root(deps.as_ref(), &info.sender)?;
            for (module, address) in to_add {
                let address = deps.api.addr_validate(&address)?;
                OS_MODULES.save(deps.storage, &module, &address)?;
            }
            for module in to_remove {
                OS_MODULES.remove(deps.storage, &module);
            }

            Ok(Response::new().add_attribute("action", "update_module_addresses"))
        }
        ExecuteMsg::AddInternalDapp {
            module,
            version,
            init_msg,
        } => {
            assert_root(deps.as_ref(), &info.sender)?;
            // No module factory in the mock suite; enable the dapp under a
            // placeholder address derived from the manager's own.
            let address = Addr::unchecked(format!(
                "{}-module-{}",
                env.contract.address,
                module.to_lowercase()
            ));
            OS_MODULES.save(deps.storage, &module, &address)?;

            Ok(Response::new()
                .add_attribute("action", "add_internal_dapp")
                .add_attribute("module", module)
                .add_attribute("version", version.unwrap_or_else(|| "latest".to_string()))
                .add_attribute("init_msg", init_msg.to_string()))
        }
        ExecuteMsg::SetRoot { root_user } => {
            assert_root(deps.as_ref(), &info.sender)?;
            let root = deps.api.addr_validate(&root_user)?;
            ROOT.set(deps, Some(root))?;

            Ok(Response::new().add_attribute("action", "set_root"))
        }
        ExecuteMsg::UpdateConfig {
            version_control_address,
        } => {
            assert_root(deps.as_ref(), &info.sender)?;
            let mut config = CONFIG.load(deps.storage)?;
            if let Some(vc) = version_control_address {
                config.version_control_address = deps.api.addr_validate(&vc)?;
            }
            CONFIG.save(deps.storage, &config)?;

            Ok(Response::new().add_attribute("action", "update_config"))
        }
    }
}

fn assert_root(deps: Deps, sender: &Addr) -> StdResult<()> {
    if !ROOT.is_admin(deps, sender)? {
        return Err(StdError::generic_err("sender is not the root user"));
    }
    Ok(())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Modules { names } => {
            let mut modules = vec![];
            for name in names {
                if let Some(address) = OS_MODULES.may_load(deps.storage, &name)? {
                    modules.push((name, address));
                }
            }
            to_json_binary(&ModulesResponse { modules })
        }
        QueryMsg::EnabledModules {} => {
            let modules = OS_MODULES
                .keys(deps.storage, None, None, Order::Ascending)
                .collect::<StdResult<Vec<String>>>()?;
            to_json_binary(&EnabledModulesResponse { modules })
        }
        QueryMsg::OsConfig {} => {
            let config = CONFIG.load(deps.storage)?;
            let root_user = ROOT
                .get(deps)?
                .ok_or_else(|| StdError::generic_err("root user not set"))?;
            to_json_binary(&OsConfigResponse {
                root_user,
                version_control_address: config.version_control_address,
                os_id: config.os_id,
            })
        }
    }
}
