#![cfg(not(target_arch = "wasm32"))]

//! cw-orch interfaces for the cw-os contract suite, plus the [`CwOs`]
//! deployment aggregate that binds them together.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod account;
mod native;

pub use crate::{account::*, native::*};

mod deployment;
mod error;

pub use deployment::CwOs;
pub use error::CwOsInterfaceError;

#[cfg(feature = "testing")]
pub mod mocks;
