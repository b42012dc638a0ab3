//! # Registry
//!
//! Fixed contract and module names used by the cw-os suite. The contract
//! names double as the ids under which the deployment tooling stores
//! contract addresses, so they must stay stable across versions.

pub const MANAGER: &str = "manager";
pub const TREASURY: &str = "treasury";
pub const VERSION_CONTROL: &str = "version_control";
pub const OS_FACTORY: &str = "os_factory";

/// Module name of the Terraswap dapp as registered in version control.
pub const TERRASWAP: &str = "Terraswap";
pub const TERRASWAP_VERSION: &str = "v0.1.0";

/// Module name under which every OS lists its treasury.
pub const TREASURY_MODULE: &str = "Treasury";
