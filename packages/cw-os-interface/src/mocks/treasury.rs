use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
};

use cw_os_std::treasury::{
    state::{ADMIN, DAPPS},
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
};

pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    ADMIN.set(deps.branch(), Some(info.sender))?;
    DAPPS.save(deps.storage, &vec![])?;

    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::AddDapp { dapp } => {
            assert_admin(deps.as_ref(), &info.sender)?;
            let dapp = deps.api.addr_validate(&dapp)?;
            let mut dapps = DAPPS.load(deps.storage)?;
            if !dapps.contains(&dapp) {
                dapps.push(dapp);
            }
            DAPPS.save(deps.storage, &dapps)?;

            Ok(Response::new().add_attribute("action", "add_dapp"))
        }
        ExecuteMsg::RemoveDapp { dapp } => {
            assert_admin(deps.as_ref(), &info.sender)?;
            let mut dapps = DAPPS.load(deps.storage)?;
            dapps.retain(|d| d.as_str() != dapp);
            DAPPS.save(deps.storage, &dapps)?;

            Ok(Response::new().add_attribute("action", "remove_dapp"))
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
        QueryMsg::Config {} => {
            let dapps = DAPPS
                .load(deps.storage)?
                .into_iter()
                .map(|d| d.to_string())
                .collect();
            to_json_binary(&ConfigResponse { dapps })
        }
    }
}
