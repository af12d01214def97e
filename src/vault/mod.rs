//! Vault module — the encrypted login store.
//!
//! This module provides:
//! - The `Login` record (`login`)
//! - The plaintext payload codec (`codec`)
//! - The on-disk JSON store format with atomic writes (`format`)
//! - High-level `LoginStore` operations (`store`)
//! - Passphrase-driven save and open sessions (`session`)

pub mod codec;
pub mod format;
pub mod login;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use codec::{JsonCodec, LoginCodec};
pub use format::StoreFile;
pub use login::Login;
pub use session::{open_logins, verify_store, PassphrasePrompt, SaveSession, SessionState};
pub use store::LoginStore;
