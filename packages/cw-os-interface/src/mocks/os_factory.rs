use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    Uint64, WasmMsg,
};

use cw_os_std::os_factory::{
    state::{Config, CONFIG, OS_ID_SEQUENCE},
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
};
use cw_os_std::version_control;

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        version_control_contract: deps.api.addr_validate(&msg.version_control_address)?,
    };
    CONFIG.save(deps.storage, &config)?;
    OS_ID_SEQUENCE.save(deps.storage, &0)?;

    Ok(Response::new())
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::CreateOs {} => {
            let config = CONFIG.load(deps.storage)?;
            let os_id = OS_ID_SEQUENCE.load(deps.storage)?;
            OS_ID_SEQUENCE.save(deps.storage, &(os_id + 1))?;

            // No module factory in the mock suite, so the OS core is a
            // placeholder address unless the test re-registers a real one.
            let os_address = format!("{}-os-{}", env.contract.address, os_id);
            let register = WasmMsg::Execute {
                contract_addr: config.version_control_contract.to_string(),
                msg: to_json_binary(&version_control::ExecuteMsg::AddOs {
                    os_id,
                    os_address: os_address.clone(),
                })?,
                funds: vec![],
            };

            Ok(Response::new()
                .add_attribute("action", "create_os")
                .add_attribute("os_id", os_id.to_string())
                .add_message(register))
        }
        ExecuteMsg::UpdateConfig {
            version_control_contract,
        } => {
            let mut config = CONFIG.load(deps.storage)?;
            if config.admin != info.sender {
                return Err(StdError::generic_err("sender is not the factory admin"));
            }
            if let Some(vc) = version_control_contract {
                config.version_control_contract = deps.api.addr_validate(&vc)?;
            }
            CONFIG.save(deps.storage, &config)?;

            Ok(Response::new().add_attribute("action", "update_config"))
        }
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            let sequence = OS_ID_SEQUENCE.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                admin: config.admin,
                version_control_contract: config.version_control_contract,
                os_id_sequence: Uint64::new(sequence),
            })
        }
    }
}
