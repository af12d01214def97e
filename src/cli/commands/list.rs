//! `ff-pwd list` — display the stored logins in a table.

use crate::cli::output;
use crate::cli::{open_store, Cli, TerminalPrompt};
use crate::errors::Result;
use crate::vault::open_logins;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, _, store) = open_store(cli)?;
    let logins = open_logins(&store, &mut TerminalPrompt)?;

    output::info(&format!("{} login(s)", logins.len()));
    output::print_logins_table(&logins);

    Ok(())
}
