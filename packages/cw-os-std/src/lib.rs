//! # cw-os-std
//!
//! `cw_os_std` contains the message and state definitions shared by the
//! cw-os contract suite and its deployment tooling: the OS factory, the
//! version control registry, the per-OS manager and treasury, and the
//! init payload of the Terraswap dapp module.

pub mod manager;
pub mod os_factory;
pub mod terraswap;
pub mod treasury;
pub mod version_control;

mod registry;

pub use registry::*;
