//! CLI module — Clap argument parser, passphrase prompt, CSV import, output
//! helpers, and command implementations.

pub mod commands;
pub mod csv_import;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;
use zeroize::Zeroizing;

use crate::config::{default_config_dir, Settings};
use crate::errors::{FfPwdError, Result};
use crate::vault::{LoginStore, PassphrasePrompt};

/// Environment variable that supplies the passphrase non-interactively.
pub const PASSPHRASE_ENV_VAR: &str = "FF_PWD_PASSPHRASE";

/// ff-pwd: find passwords from a Firefox logins export.
#[derive(Parser)]
#[command(
    name = "ff-pwd",
    about = "Find passwords from an encrypted copy of your Firefox logins",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory holding the encrypted store (default: ~/.config/ff-pwd)
    #[arg(long, env = "FF_PWD_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Import logins.csv as exported from Firefox, replacing the store
    Import {
        /// The CSV file containing passwords (default: ~/Downloads/logins.csv)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Find a password and print it to stdout
    Find {
        /// Initial search text for the URL picker
        query: Option<String>,
    },

    /// List stored logins (URL, username, last used) without passwords
    List,

    /// Check a passphrase against the store without decrypting it
    Verify,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Reads passphrases from `FF_PWD_PASSPHRASE` or a hidden terminal prompt.
///
/// The environment variable, when set, answers every prompt, including
/// the repeat on first import.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl PassphrasePrompt for TerminalPrompt {
    fn read_passphrase(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        if let Ok(pw) = std::env::var(PASSPHRASE_ENV_VAR) {
            if !pw.is_empty() {
                return Ok(Zeroizing::new(pw));
            }
        }

        let pw = dialoguer::Password::new()
            .with_prompt(prompt)
            .interact()
            .map_err(|e| FfPwdError::CommandFailed(format!("passphrase prompt: {e}")))?;
        Ok(Zeroizing::new(pw))
    }
}

/// Resolve the config directory from `--config-dir` or the default.
pub fn config_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.config_dir {
        Some(dir) => Ok(dir.clone()),
        None => default_config_dir(),
    }
}

/// Load settings and build the store handle for the resolved config dir.
///
/// Returns the config dir and settings too, since `import` needs both.
pub fn open_store(cli: &Cli) -> Result<(PathBuf, Settings, LoginStore)> {
    let dir = config_dir(cli)?;
    let settings = Settings::load(&dir)?;
    let store = LoginStore::new(settings.storage_path(&dir));
    Ok((dir, settings, store))
}
