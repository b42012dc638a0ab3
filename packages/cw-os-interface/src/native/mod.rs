mod os_factory;
mod version_control;

pub use self::{os_factory::*, version_control::*};
