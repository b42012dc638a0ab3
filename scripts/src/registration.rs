use cw_orch::prelude::*;

use cw_os_interface::{CwOs, CwOsInterfaceError, OsFactoryExecFns};
use cw_os_std::{terraswap, TERRASWAP, TERRASWAP_VERSION, TREASURY_MODULE};

/// Settings for one registration run.
#[derive(Clone, Debug, Default)]
pub struct RegistrationSettings {
    /// Create a fresh OS before resolving the latest one
    pub create_os: bool,
}

/// Resolve the latest OS of the factory and register the Terraswap dapp on
/// it. Queries along the way are diagnostic and logged, not branched on.
pub fn register_terraswap_dapp<Chain: CwEnv>(
    os: &CwOs<Chain>,
    settings: &RegistrationSettings,
) -> Result<(), CwOsInterfaceError> {
    if settings.create_os {
        os.os_factory.create_os()?;
        log::info!("Created a new OS");
    }

    let latest_os = os.os_factory.latest_os_id()?;
    let os_address = os.version_control.os_address(latest_os)?;
    os.store_os_address(&os_address);

    let code_id = os.version_control.code_id(TERRASWAP, TERRASWAP_VERSION)?;
    log::info!("{} {} has code id {}", TERRASWAP, TERRASWAP_VERSION, code_id);

    let enabled = os.version_control.enabled_modules(latest_os)?;
    log::info!("OS {} has modules {:?} enabled", latest_os, enabled);

    let treasury_address = os.manager.module_address(TREASURY_MODULE)?;
    let known = os.manager.module_addresses(&[TREASURY_MODULE, TERRASWAP])?;
    log::debug!("Module addresses: {:?}", known.modules);

    let os_config = os.manager.os_config()?;
    log::debug!(
        "OS config: root {}, os id {}",
        os_config.root_user,
        os_config.os_id
    );

    let sender = os.sender();
    let init_msg = terraswap::InstantiateMsg {
        treasury_address: treasury_address.into_string(),
        // Both fields carry the sender address; deployed instances are
        // initialized this way.
        trader: sender.to_string(),
        memory_addr: sender.to_string(),
    };

    os.manager.register_internal_dapp(TERRASWAP, None, &init_msg)?;
    Ok(())
}
