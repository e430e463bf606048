pub mod common;
pub mod press;
pub mod set;
pub mod show;
