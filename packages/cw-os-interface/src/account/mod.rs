mod manager;
mod treasury;

pub use self::{manager::*, treasury::*};
