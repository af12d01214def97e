//! `ff-pwd import` — import a Firefox `logins.csv`, replacing the store.
//!
//! The CSV is parsed in full before any passphrase is asked for, so a
//! malformed row never leads to a write.

use std::path::Path;

use tracing::info;

use crate::cli::csv_import::read_logins_csv;
use crate::cli::output;
use crate::cli::{open_store, Cli, TerminalPrompt};
use crate::config::ensure_config_dir;
use crate::errors::Result;
use crate::vault::{PassphrasePrompt, SaveSession};

/// Execute the `import` command.
pub fn execute(cli: &Cli, file: Option<&Path>) -> Result<()> {
    execute_with_prompt(cli, file, &mut TerminalPrompt)
}

/// `import` with an explicit passphrase source.
pub fn execute_with_prompt(
    cli: &Cli,
    file: Option<&Path>,
    prompt: &mut dyn PassphrasePrompt,
) -> Result<()> {
    let (dir, settings, store) = open_store(cli)?;

    let source = match file {
        Some(path) => path.to_path_buf(),
        None => settings.import_path()?,
    };
    let logins = read_logins_csv(&source)?;
    info!(source = %source.display(), logins = logins.len(), "CSV parsed");
    if logins.is_empty() {
        output::warning("No logins found in the import file; the store will be empty.");
    }

    ensure_config_dir(&dir)?;

    let replacing = store.exists();
    SaveSession::begin(&store)?.run(&logins, prompt)?;

    if replacing {
        output::info("Replaced the previous store.");
    }
    output::success(&format!(
        "Imported {} logins from {} into {}",
        logins.len(),
        source.display(),
        store.path().display()
    ));

    Ok(())
}
