use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
};

use cw_os_std::manager;
use cw_os_std::version_control::{
    state::{ADMIN, FACTORY, MODULE_CODE_IDS, OS_ADDRESSES},
    CodeIdResponse, ExecuteMsg, InstantiateMsg, OsAddressResponse, QueryMsg,
};

pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    ADMIN.set(deps.branch(), Some(info.sender))?;
    FACTORY.set(deps, None)?;

    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::AddOs { os_id, os_address } => {
            let allowed = ADMIN.is_admin(deps.as_ref(), &info.sender)?
                || FACTORY.is_admin(deps.as_ref(), &info.sender)?;
            if !allowed {
                return Err(StdError::generic_err("sender is not the admin or the factory"));
            }
            OS_ADDRESSES.save(deps.storage, os_id, &Addr::unchecked(&os_address))?;

            Ok(Response::new()
                .add_attribute("action", "add_os")
                .add_attribute("os_id", os_id.to_string())
                .add_attribute("os_address", os_address))
        }
        ExecuteMsg::AddCodeId {
            module,
            version,
            code_id,
        } => {
            assert_admin(deps.as_ref(), &info.sender)?;
            MODULE_CODE_IDS.save(deps.storage, (&module, &version), &code_id)?;

            Ok(Response::new()
                .add_attribute("action", "add_code_id")
                .add_attribute("module", module)
                .add_attribute("version", version))
        }
        ExecuteMsg::SetAdmin { new_admin } => {
            assert_admin(deps.as_ref(), &info.sender)?;
            let new_admin = deps.api.addr_validate(&new_admin)?;
            ADMIN.set(deps, Some(new_admin))?;

            Ok(Response::new().add_attribute("action", "set_admin"))
        }
        ExecuteMsg::SetFactory { new_factory } => {
            assert_admin(deps.as_ref(), &info.sender)?;
            let new_factory = deps.api.addr_validate(&new_factory)?;
            FACTORY.set(deps, Some(new_factory))?;

            Ok(Response::new().add_attribute("action", "set_factory"))
        }
    }
}

fn assert_admin(deps: Deps, sender: &Addr) -> StdResult<()> {
    if !ADMIN.is_admin(deps, sender)? {
        return Err(StdError::generic_err("sender is not the admin"));
    }
    Ok(())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::OsAddress { os_id } => {
            let os_address = OS_ADDRESSES
                .may_load(deps.storage, os_id)?
                .ok_or_else(|| StdError::generic_err(format!("No OS registered with id {os_id}")))?;
            to_json_binary(&OsAddressResponse { os_address })
        }
        QueryMsg::CodeId { module, version } => {
            let code_id = MODULE_CODE_IDS
                .may_load(deps.storage, (&module, &version))?
                .ok_or_else(|| {
                    StdError::generic_err(format!("No code id for module {module} {version}"))
                })?;
            to_json_binary(&CodeIdResponse { code_id })
        }
        QueryMsg::EnabledModules { os_id } => {
            let os_address = OS_ADDRESSES
                .may_load(deps.storage, os_id)?
                .ok_or_else(|| StdError::generic_err(format!("No OS registered with id {os_id}")))?;
            let resp: manager::EnabledModulesResponse = deps
                .querier
                .query_wasm_smart(os_address, &manager::QueryMsg::EnabledModules {})?;
            to_json_binary(&resp)
        }
    }
}
