//! CLI command modules

pub mod list;
pub mod serve;

pub use list::execute_list_command;
pub use serve::{execute_serve_command, ServeArgs};
