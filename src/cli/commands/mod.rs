pub mod check;
mod command_result;
pub mod helper;

pub use command_result::{CommandResult, CommandSummary, InitSummary};
