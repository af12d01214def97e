//! `ff-pwd find` — pick a login by URL and print its password.
//!
//! The password is the only thing written to stdout, so the command can
//! be used in pipelines.  Blank lines around it go to stderr to make it
//! easy to select in a terminal.

use dialoguer::FuzzySelect;
use zeroize::Zeroizing;

use crate::cli::{open_store, Cli, TerminalPrompt};
use crate::errors::{FfPwdError, Result};
use crate::vault::{open_logins, Login};

/// Execute the `find` command.
pub fn execute(cli: &Cli, query: Option<&str>) -> Result<()> {
    let (_, _, store) = open_store(cli)?;
    let logins = open_logins(&store, &mut TerminalPrompt)?;

    let password = select_password(&logins, query)?;

    eprintln!();
    println!("{}", password.as_str());
    eprintln!();

    Ok(())
}

/// Let the user fuzzy-pick a login by URL and return its password.
fn select_password(logins: &[Login], query: Option<&str>) -> Result<Zeroizing<String>> {
    if logins.is_empty() {
        return Err(FfPwdError::CommandFailed(
            "the store holds no logins".into(),
        ));
    }

    let urls: Vec<&str> = logins.iter().map(|l| l.url.as_str()).collect();

    let mut picker = FuzzySelect::new()
        .with_prompt("Login")
        .items(&urls)
        .default(0);
    if let Some(q) = query {
        picker = picker.with_initial_text(q);
    }

    let index = picker
        .interact_opt()
        .map_err(|e| FfPwdError::CommandFailed(format!("login picker: {e}")))?
        .ok_or(FfPwdError::UserCancelled)?;

    let login = logins
        .get(index)
        .ok_or_else(|| FfPwdError::CommandFailed(format!("no login at index {index}")))?;

    eprint!("\n{}", login.summary());
    Ok(Zeroizing::new(login.password.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_nothing_to_find() {
        let result = select_password(&[], None);
        assert!(matches!(result, Err(FfPwdError::CommandFailed(_))));
    }
}
