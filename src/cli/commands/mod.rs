//! Subcommand implementations, one module per command.

pub mod completions;
pub mod find;
pub mod import_cmd;
pub mod list;
pub mod verify;
