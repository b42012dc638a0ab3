use cosmwasm_std::StdError;
use cw_orch::prelude::CwOrchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CwOsInterfaceError {
    #[error(transparent)]
    Orch(#[from] CwOrchError),

    #[error("{0}")]
    Std(#[from] StdError),

    #[error("No OS has been created by this factory yet")]
    NoOsCreated {},

    #[error("Module {0} is not enabled on this OS")]
    ModuleNotFound(String),
}
