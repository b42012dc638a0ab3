//! Operational scripts for the cw-os suite.
//!
//! The flows are generic over the cw-orch environment so the same code runs
//! against a network daemon and against cw-multi-test in the integration
//! tests.

mod networks;
mod registration;

pub use networks::Network;
pub use registration::{register_terraswap_dapp, RegistrationSettings};
