use cw_os_std::{MANAGER, OS_FACTORY, TREASURY, VERSION_CONTROL};
use cw_orch::{environment::Environment, prelude::*};

use crate::{Manager, OsFactory, Treasury, VersionControl};

/// The cw-os suite bound to one chain. Constructed once and passed to every
/// operation; contract addresses come from the chain's state store (the
/// daemon state file on a network, the in-memory state on a mock).
pub struct CwOs<Chain: CwEnv> {
    pub os_factory: OsFactory<Chain>,
    pub version_control: VersionControl<Chain>,
    pub manager: Manager<Chain>,
    pub treasury: Treasury<Chain>,
}

impl<Chain: CwEnv> CwOs<Chain> {
    pub fn new(chain: Chain) -> Self {
        let os_factory = OsFactory::new(OS_FACTORY, chain.clone());
        let version_control = VersionControl::new(VERSION_CONTROL, chain.clone());
        let manager = Manager::new(MANAGER, chain.clone());
        let treasury = Treasury::new(TREASURY, chain);

        Self {
            os_factory,
            version_control,
            manager,
            treasury,
        }
    }

    /// Address of the wallet the suite acts as.
    pub fn sender(&self) -> Addr {
        self.manager.environment().sender_addr()
    }

    /// Cache the resolved OS manager address under the fixed `"manager"`
    /// id, overwriting whatever was stored there before.
    pub fn store_os_address(&self, os_address: &Addr) {
        self.manager.set_address(os_address);
        log::info!("OS address {} cached under '{}'", os_address, MANAGER);
    }
}
