//! AES-256-GCM authenticated encryption of the serialized login list.
//!
//! Every call to `encrypt` derives the key from the passphrase, draws a
//! fresh random 12-byte nonce and prepends it to the cipher output.  The
//! nonce length is returned alongside so it can be recorded in the store.
//!
//! Layout of the sealed blob:
//!   [ nonce (nonce_len bytes) | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use super::kdf::derive_encryption_key;
use crate::errors::{FfPwdError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` under the key derived from `passphrase`.
///
/// Returns `(nonce_len, nonce || ciphertext)`.  No associated data is
/// bound into the tag.
pub fn encrypt(passphrase: &[u8], plaintext: &[u8]) -> Result<(usize, Vec<u8>)> {
    let key = derive_encryption_key(passphrase);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| FfPwdError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| FfPwdError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok((NONCE_LEN, sealed))
}

/// Decrypt a blob produced by `encrypt`.
///
/// The first `nonce_len` bytes are the nonce.  Anything that is not a
/// verified AES-GCM open fails the call; no plaintext is returned unless
/// the tag checks out.
pub fn decrypt(passphrase: &[u8], nonce_len: usize, sealed: &[u8]) -> Result<Vec<u8>> {
    if nonce_len != NONCE_LEN {
        return Err(FfPwdError::InvalidStoreFormat(format!(
            "unsupported nonce size {nonce_len}, expected {NONCE_LEN}"
        )));
    }
    if sealed.len() < nonce_len {
        return Err(FfPwdError::InvalidStoreFormat(format!(
            "payload is {} bytes, shorter than its {nonce_len}-byte nonce",
            sealed.len()
        )));
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(nonce_len);
    let nonce = Nonce::from_slice(nonce_bytes);

    let key = derive_encryption_key(passphrase);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| FfPwdError::EncryptionFailed(format!("invalid key length: {e}")))?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| FfPwdError::AuthenticationFailed)
}
