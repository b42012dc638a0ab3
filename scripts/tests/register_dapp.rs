use cw_orch::prelude::*;

use cw_os_interface::{CwOs, CwOsInterfaceError, OsFactoryExecFns};
use cw_os_scripts::{register_terraswap_dapp, RegistrationSettings};
use cw_os_std::{manager, os_factory, treasury, version_control};

type AResult = anyhow::Result<()>;

/// Upload and wire the full mock suite: registry contracts, five created
/// OS instances, and a real manager + treasury standing in for OS 4.
fn setup_os(chain: &MockBech32) -> anyhow::Result<CwOs<MockBech32>> {
    let sender = chain.sender_addr();
    let os = CwOs::new(chain.clone());

    os.os_factory.upload()?;
    os.version_control.upload()?;
    os.manager.upload()?;
    os.treasury.upload()?;

    os.version_control
        .instantiate(&version_control::InstantiateMsg {}, None, &[])?;
    os.os_factory.instantiate(
        &os_factory::InstantiateMsg {
            admin: sender.to_string(),
            version_control_address: os.version_control.addr_str()?,
        },
        None,
        &[],
    )?;
    os.version_control.execute(
        &version_control::ExecuteMsg::SetFactory {
            new_factory: os.os_factory.addr_str()?,
        },
        &[],
    )?;

    for _ in 0..5 {
        os.os_factory.create_os()?;
    }

    // The factory mock registers placeholder OS cores; put a real manager
    // and treasury behind the latest id.
    os.treasury
        .instantiate(&treasury::InstantiateMsg {}, None, &[])?;
    os.manager.instantiate(
        &manager::InstantiateMsg {
            os_id: 4,
            root_user: sender.to_string(),
            version_control_address: os.version_control.addr_str()?,
        },
        None,
        &[],
    )?;
    os.version_control.execute(
        &version_control::ExecuteMsg::AddOs {
            os_id: 4,
            os_address: os.manager.addr_str()?,
        },
        &[],
    )?;
    os.manager.execute(
        &manager::ExecuteMsg::UpdateModuleAddresses {
            to_add: vec![("Treasury".to_string(), os.treasury.addr_str()?)],
            to_remove: vec![],
        },
        &[],
    )?;
    os.version_control.execute(
        &version_control::ExecuteMsg::AddCodeId {
            module: "Terraswap".to_string(),
            version: "v0.1.0".to_string(),
            code_id: 1,
        },
        &[],
    )?;

    Ok(os)
}

#[test]
fn registers_terraswap_on_the_latest_os() -> AResult {
    let chain = MockBech32::new("mock");
    let os = setup_os(&chain)?;
    let manager_address = os.manager.address()?;

    register_terraswap_dapp(&os, &RegistrationSettings { create_os: false })?;

    // The resolved OS address ended up under the fixed "manager" id.
    assert_eq!(os.manager.address()?, manager_address);

    let enabled = os.manager.enabled_modules()?;
    assert!(enabled.contains(&"Terraswap".to_string()));
    assert!(enabled.contains(&"Treasury".to_string()));

    // The treasury address the payload referenced is the one the manager
    // lists for the Treasury module.
    let treasury_address = os.manager.module_address("Treasury")?;
    assert_eq!(treasury_address, os.treasury.address()?);

    // Registration does not whitelist the dapp on the treasury on its own.
    assert!(os.treasury.config()?.dapps.is_empty());

    Ok(())
}

#[test]
fn create_os_flag_bumps_the_sequence() -> AResult {
    let chain = MockBech32::new("mock");
    let os = setup_os(&chain)?;

    os.os_factory.create_os()?;
    assert_eq!(os.os_factory.latest_os_id()?, 5);
    assert!(os.version_control.os_address(5).is_ok());

    Ok(())
}

#[test]
fn no_os_yet_is_an_explicit_error() -> AResult {
    let chain = MockBech32::new("mock");
    let os = CwOs::new(chain.clone());

    os.os_factory.upload()?;
    os.version_control.upload()?;
    os.version_control
        .instantiate(&version_control::InstantiateMsg {}, None, &[])?;
    os.os_factory.instantiate(
        &os_factory::InstantiateMsg {
            admin: chain.sender_addr().to_string(),
            version_control_address: os.version_control.addr_str()?,
        },
        None,
        &[],
    )?;

    let err = register_terraswap_dapp(&os, &RegistrationSettings { create_os: false }).unwrap_err();
    assert!(matches!(err, CwOsInterfaceError::NoOsCreated {}));

    Ok(())
}
