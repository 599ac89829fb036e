mod command_result;
pub mod compile;
pub mod optimize;

pub use command_result::*;
