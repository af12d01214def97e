//! High-level store operations used by CLI commands.
//!
//! `LoginStore` ties the crypto layer, the login codec and the file
//! format together so the rest of the application only deals with
//! `save_logins`, `load`, `validate_passphrase` and `get_logins`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::crypto::{decrypt, derive_verification_hash, encrypt, verify_passphrase};
use crate::errors::Result;

use super::codec::{JsonCodec, LoginCodec};
use super::format::{self, StoreFile};
use super::login::Login;

/// Handle on the store file at a given path.
///
/// Holds no secrets: every operation that needs the passphrase takes it
/// as an argument and drops derived material before returning.
#[derive(Debug, Clone)]
pub struct LoginStore<C = JsonCodec> {
    /// Path to `data.json` (or whatever the config names it).
    path: PathBuf,

    /// Encodes the login list into the plaintext that gets encrypted.
    codec: C,
}

impl LoginStore<JsonCodec> {
    /// A store at `path` using the JSON payload format.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_codec(path, JsonCodec)
    }
}

impl<C: LoginCodec> LoginStore<C> {
    /// A store at `path` with a custom payload codec.
    pub fn with_codec(path: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            path: path.into(),
            codec,
        }
    }

    /// Whether a store file is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the store file in full.
    pub fn load(&self) -> Result<StoreFile> {
        format::read_store(&self.path)
    }

    /// Decrypt and decode the logins held in `store`.
    pub fn get_logins(&self, store: &StoreFile, passphrase: &str) -> Result<Vec<Login>> {
        store.get_logins_with(&self.codec, passphrase)
    }

    /// Encrypt `logins` under `passphrase` and replace the store file.
    ///
    /// Every save draws a fresh nonce and a fresh verification salt, so
    /// the file changes even when the logins and passphrase do not.
    pub fn save_logins(&self, logins: &[Login], passphrase: &str) -> Result<StoreFile> {
        let plaintext = self.codec.encode(logins)?;
        let (nonce_size, data) = encrypt(passphrase.as_bytes(), &plaintext)?;
        drop(plaintext);

        let (hash, salt) = derive_verification_hash(passphrase.as_bytes(), None)?;
        let mut passphrase_hash = salt;
        passphrase_hash.extend_from_slice(&hash);

        let store = StoreFile {
            passphrase_hash,
            data,
            nonce_size,
        };
        format::write_store(&self.path, &store)?;

        info!(path = %self.path.display(), logins = logins.len(), "logins saved");
        Ok(store)
    }

    /// Returns the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreFile {
    /// Check `passphrase` against the stored verification hash.
    ///
    /// Does not touch the encrypted payload.
    pub fn validate_passphrase(&self, passphrase: &str) -> Result<bool> {
        let valid = verify_passphrase(passphrase.as_bytes(), &self.passphrase_hash)?;
        debug!(valid, "passphrase checked");
        Ok(valid)
    }

    /// Decrypt the payload and decode it as JSON logins.
    pub fn get_logins(&self, passphrase: &str) -> Result<Vec<Login>> {
        self.get_logins_with(&JsonCodec, passphrase)
    }

    /// Decrypt the payload and decode it with `codec`.
    pub fn get_logins_with<C: LoginCodec>(
        &self,
        codec: &C,
        passphrase: &str,
    ) -> Result<Vec<Login>> {
        let plaintext = zeroize::Zeroizing::new(decrypt(
            passphrase.as_bytes(),
            self.nonce_size,
            &self.data,
        )?);
        let logins = codec.decode(&plaintext)?;
        debug!(logins = logins.len(), "logins decrypted");
        Ok(logins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FfPwdError;
    use tempfile::TempDir;

    #[test]
    fn exists_tracks_the_file() {
        let dir = TempDir::new().unwrap();
        let store = LoginStore::new(dir.path().join("data.json"));
        assert!(!store.exists());

        store.save_logins(&[], "pw").unwrap();
        assert!(store.exists());
    }

    #[test]
    fn load_missing_store_fails() {
        let dir = TempDir::new().unwrap();
        let store = LoginStore::new(dir.path().join("data.json"));
        assert!(matches!(store.load(), Err(FfPwdError::StoreNotFound(_))));
    }

    #[test]
    fn saved_hash_is_salt_plus_hash() {
        let dir = TempDir::new().unwrap();
        let store = LoginStore::new(dir.path().join("data.json"));
        let file = store.save_logins(&[], "pw").unwrap();

        assert_eq!(file.passphrase_hash.len(), 8 + 32);
        assert_eq!(file.nonce_size, 12);
    }

    #[test]
    fn non_login_plaintext_is_a_serialization_error() {
        let (nonce_size, data) = encrypt(b"pw", b"\"just a string\"").unwrap();
        let file = StoreFile {
            passphrase_hash: vec![0u8; 40],
            data,
            nonce_size,
        };

        let result = file.get_logins("pw");
        assert!(matches!(result, Err(FfPwdError::SerializationError(_))));
    }
}
