//! `ff-pwd verify` — check a passphrase against the stored hash.

use crate::cli::output;
use crate::cli::{open_store, Cli, TerminalPrompt};
use crate::errors::Result;
use crate::vault::verify_store;

/// Execute the `verify` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_, _, store) = open_store(cli)?;
    verify_store(&store, &mut TerminalPrompt)?;

    output::success("Passphrase matches the store.");
    Ok(())
}
