//! Mock implementations of the cw-os contracts for cw-multi-test runs.
//!
//! The deployed contracts live outside this repository; these mocks back the
//! `Uploadable` impls of the interfaces and implement only the behavior the
//! deployment flows exercise.

pub mod manager;
pub mod os_factory;
pub mod treasury;
pub mod version_control;
