use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in ff-pwd.
#[derive(Debug, Error)]
pub enum FfPwdError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// The AEAD tag did not verify: wrong passphrase or a modified payload.
    #[error("Decryption failed — wrong passphrase or corrupted data")]
    AuthenticationFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Store errors ---
    #[error("No stored passwords found at {0}")]
    StoreNotFound(PathBuf),

    #[error("Invalid store format: {0}")]
    InvalidStoreFormat(String),

    #[error("Passphrase did not match existing passphrase")]
    PassphraseMismatch,

    #[error("Repeat passphrase did not match")]
    ConfirmationMismatch,

    // --- Import errors ---
    #[error("Login row on line {line} has {found} columns, expected 9")]
    InvalidLoginRow { line: u64, found: usize },

    #[error("CSV error: {0}")]
    CsvError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl From<csv::Error> for FfPwdError {
    fn from(e: csv::Error) -> Self {
        match e.into_kind() {
            csv::ErrorKind::Io(io) => FfPwdError::Io(io),
            other => FfPwdError::CsvError(format!("{other:?}")),
        }
    }
}

/// Convenience type alias for ff-pwd results.
pub type Result<T> = std::result::Result<T, FfPwdError>;
