use cw_os_interface::{CwOs, CwOsInterfaceError, Manager, OsFactoryExecFns};
use cw_os_std::{os_factory, version_control, MANAGER, TERRASWAP, TERRASWAP_VERSION};
use cw_orch::prelude::*;

type AResult = anyhow::Result<()>;

/// Upload and wire the factory and version control mocks.
fn setup_registry(chain: &MockBech32) -> anyhow::Result<CwOs<MockBech32>> {
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
    os.version_control.execute(
        &version_control::ExecuteMsg::SetFactory {
            new_factory: os.os_factory.addr_str()?,
        },
        &[],
    )?;

    Ok(os)
}

#[test]
fn latest_os_resolves_through_version_control() -> AResult {
    let chain = MockBech32::new("mock");
    let os = setup_registry(&chain)?;

    // Five created OS instances leave the sequence at 5.
    for _ in 0..5 {
        os.os_factory.create_os()?;
    }

    let latest = os.os_factory.latest_os_id()?;
    assert_eq!(latest, 4);

    let os_address = os.version_control.os_address(latest)?;
    os.store_os_address(&os_address);

    // The cache is keyed by the fixed "manager" id; a fresh handle under
    // the same id sees the stored address.
    let manager = Manager::<MockBech32>::new(MANAGER, chain.clone());
    assert_eq!(manager.address()?, os_address);

    Ok(())
}

#[test]
fn zero_os_sequence_is_an_explicit_error() -> AResult {
    let chain = MockBech32::new("mock");
    let os = setup_registry(&chain)?;

    let err = os.os_factory.latest_os_id().unwrap_err();
    assert!(matches!(err, CwOsInterfaceError::NoOsCreated {}));

    Ok(())
}

#[test]
fn os_address_cache_overwrites_previous_value() -> AResult {
    let chain = MockBech32::new("mock");
    let os = CwOs::new(chain.clone());

    let first = chain.addr_make("os-one");
    let second = chain.addr_make("os-two");

    os.store_os_address(&first);
    os.store_os_address(&second);

    let manager = Manager::<MockBech32>::new(MANAGER, chain.clone());
    assert_eq!(manager.address()?, second);

    Ok(())
}

#[test]
fn unknown_os_id_errors() -> AResult {
    let chain = MockBech32::new("mock");
    let os = setup_registry(&chain)?;

    os.os_factory.create_os()?;

    assert!(os.version_control.os_address(0).is_ok());
    assert!(os.version_control.os_address(1).is_err());

    Ok(())
}

#[test]
fn module_code_ids_are_queryable() -> AResult {
    let chain = MockBech32::new("mock");
    let os = setup_registry(&chain)?;

    os.version_control.execute(
        &version_control::ExecuteMsg::AddCodeId {
            module: TERRASWAP.to_string(),
            version: TERRASWAP_VERSION.to_string(),
            code_id: 7,
        },
        &[],
    )?;

    assert_eq!(os.version_control.code_id(TERRASWAP, TERRASWAP_VERSION)?, 7);
    assert!(os.version_control.code_id(TERRASWAP, "v0.2.0").is_err());

    Ok(())
}
