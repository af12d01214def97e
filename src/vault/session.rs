//! Passphrase sessions around the store.
//!
//! Saving walks one of two paths:
//!
//! ```text
//! NoStoreYet  -> PassphraseChosen  -> PassphraseConfirmed -> Saved
//! StoreExists -> PassphraseEntered -> Verified            -> Saved
//! ```
//!
//! A mismatched repeat (`ConfirmationMismatch`) or a failed check against
//! the existing store (`VerificationFailed`) ends the session before
//! anything is written.  Both are terminal; retrying is up to the caller.

use tracing::debug;
use zeroize::Zeroizing;

use super::codec::LoginCodec;
use super::format::StoreFile;
use super::login::Login;
use super::store::LoginStore;
use crate::errors::{FfPwdError, Result};

/// Prompt shown when choosing or entering the passphrase for a save.
pub const ENCRYPTION_PROMPT: &str = "Encryption passphrase";

/// Prompt shown for the repeat when a store is first created.
pub const REPEAT_PROMPT: &str = "Encryption passphrase repeat";

/// Prompt shown when opening the store for reading.
pub const DECRYPTION_PROMPT: &str = "Decryption passphrase";

/// Source of passphrases: the terminal in the CLI, a script in tests.
pub trait PassphrasePrompt {
    fn read_passphrase(&mut self, prompt: &str) -> Result<Zeroizing<String>>;
}

/// Observable position of a [`SaveSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoStoreYet,
    PassphraseChosen,
    PassphraseConfirmed,
    StoreExists,
    PassphraseEntered,
    Verified,
    Saved,
    /// The repeat passphrase differed from the first entry.
    ConfirmationMismatch,
    /// The passphrase did not match the existing store.
    VerificationFailed,
    /// A prompt, I/O or crypto error ended the session.
    Aborted,
}

enum Step {
    NoStoreYet,
    PassphraseChosen(Zeroizing<String>),
    PassphraseConfirmed(Zeroizing<String>),
    StoreExists(StoreFile),
    PassphraseEntered(StoreFile, Zeroizing<String>),
    Verified(Zeroizing<String>),
    Saved,
    Ended(SessionState),
}

impl Step {
    fn state(&self) -> SessionState {
        match self {
            Step::NoStoreYet => SessionState::NoStoreYet,
            Step::PassphraseChosen(_) => SessionState::PassphraseChosen,
            Step::PassphraseConfirmed(_) => SessionState::PassphraseConfirmed,
            Step::StoreExists(_) => SessionState::StoreExists,
            Step::PassphraseEntered(..) => SessionState::PassphraseEntered,
            Step::Verified(_) => SessionState::Verified,
            Step::Saved => SessionState::Saved,
            Step::Ended(state) => *state,
        }
    }
}

/// One save of a full login list, from passphrase entry to the write.
pub struct SaveSession<'s, C> {
    store: &'s LoginStore<C>,
    step: Step,
}

impl<'s, C: LoginCodec> SaveSession<'s, C> {
    /// Start a session, loading the existing store if there is one.
    pub fn begin(store: &'s LoginStore<C>) -> Result<Self> {
        let step = if store.exists() {
            Step::StoreExists(store.load()?)
        } else {
            Step::NoStoreYet
        };
        Ok(Self { store, step })
    }

    /// Where the session currently stands.
    pub fn state(&self) -> SessionState {
        self.step.state()
    }

    /// Perform exactly one transition.
    ///
    /// `logins` is only written on the final transition into `Saved`.
    pub fn advance<P>(&mut self, logins: &[Login], prompt: &mut P) -> Result<SessionState>
    where
        P: PassphrasePrompt + ?Sized,
    {
        let step = std::mem::replace(&mut self.step, Step::Ended(SessionState::Aborted));

        self.step = match step {
            Step::NoStoreYet => {
                Step::PassphraseChosen(prompt.read_passphrase(ENCRYPTION_PROMPT)?)
            }
            Step::PassphraseChosen(passphrase) => {
                let repeat = prompt.read_passphrase(REPEAT_PROMPT)?;
                if *repeat != *passphrase {
                    self.step = Step::Ended(SessionState::ConfirmationMismatch);
                    return Err(FfPwdError::ConfirmationMismatch);
                }
                Step::PassphraseConfirmed(passphrase)
            }
            Step::StoreExists(existing) => {
                let passphrase = prompt.read_passphrase(ENCRYPTION_PROMPT)?;
                Step::PassphraseEntered(existing, passphrase)
            }
            Step::PassphraseEntered(existing, passphrase) => {
                if !existing.validate_passphrase(&passphrase)? {
                    self.step = Step::Ended(SessionState::VerificationFailed);
                    return Err(FfPwdError::PassphraseMismatch);
                }
                Step::Verified(passphrase)
            }
            Step::PassphraseConfirmed(passphrase) | Step::Verified(passphrase) => {
                self.store.save_logins(logins, &passphrase)?;
                Step::Saved
            }
            Step::Saved => Step::Saved,
            Step::Ended(state) => {
                self.step = Step::Ended(state);
                return Err(FfPwdError::CommandFailed(format!(
                    "save session already ended in {state:?}"
                )));
            }
        };

        let state = self.step.state();
        debug!(?state, "save session advanced");
        Ok(state)
    }

    /// Drive the session until the logins are saved.
    pub fn run<P>(mut self, logins: &[Login], prompt: &mut P) -> Result<()>
    where
        P: PassphrasePrompt + ?Sized,
    {
        while self.advance(logins, prompt)? != SessionState::Saved {}
        Ok(())
    }
}

/// Prompt for the passphrase, verify it, and decrypt the stored logins.
pub fn open_logins<C, P>(store: &LoginStore<C>, prompt: &mut P) -> Result<Vec<Login>>
where
    C: LoginCodec,
    P: PassphrasePrompt + ?Sized,
{
    let (file, passphrase) = unlock(store, prompt)?;
    store.get_logins(&file, &passphrase)
}

/// Prompt for the passphrase and check it against the store without
/// decrypting anything.
pub fn verify_store<C, P>(store: &LoginStore<C>, prompt: &mut P) -> Result<()>
where
    C: LoginCodec,
    P: PassphrasePrompt + ?Sized,
{
    unlock(store, prompt).map(|_| ())
}

fn unlock<C, P>(store: &LoginStore<C>, prompt: &mut P) -> Result<(StoreFile, Zeroizing<String>)>
where
    C: LoginCodec,
    P: PassphrasePrompt + ?Sized,
{
    if !store.exists() {
        return Err(FfPwdError::StoreNotFound(store.path().to_path_buf()));
    }

    let file = store.load()?;
    let passphrase = prompt.read_passphrase(DECRYPTION_PROMPT)?;
    if !file.validate_passphrase(&passphrase)? {
        return Err(FfPwdError::PassphraseMismatch);
    }

    Ok((file, passphrase))
}
