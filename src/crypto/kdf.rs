//! Passphrase-derived key material.
//!
//! Two independent derivations come out of one passphrase:
//!
//! - The **encryption key**: SHA-256 of the passphrase bytes, unsalted.
//!   Every store ever written with a given passphrase uses the same key,
//!   so this cannot change without breaking existing `data.json` files.
//! - The **verification hash**: Argon2i over (passphrase, 8-byte salt),
//!   stored as `salt || hash` so a passphrase can be checked without
//!   touching the ciphertext.

use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::keys::EncryptionKey;
use crate::errors::{FfPwdError, Result};

/// Length of the verification salt in bytes.
pub const SALT_LEN: usize = 8;

/// Length of the Argon2 output in bytes.
pub const HASH_LEN: usize = 32;

/// Memory cost in KiB (64 MiB).
const MEMORY_KIB: u32 = 64 * 1024;

/// Argon2 time cost.
const ITERATIONS: u32 = 1;

/// Argon2 lanes.
const PARALLELISM: u32 = 1;

/// Derive the 32-byte AES key from a passphrase.
///
/// Deterministic: the same passphrase always yields the same key.
pub fn derive_encryption_key(passphrase: &[u8]) -> EncryptionKey {
    let digest = Sha256::digest(passphrase);
    EncryptionKey::new(digest.into())
}

/// Hash a passphrase for later verification.
///
/// With `salt: None` a fresh random salt is generated; pass the stored
/// salt to re-derive an existing hash.  Returns `(hash, salt)`.
pub fn derive_verification_hash(
    passphrase: &[u8],
    salt: Option<&[u8]>,
) -> Result<([u8; HASH_LEN], Vec<u8>)> {
    let salt = match salt {
        Some(s) => s.to_vec(),
        None => generate_salt().to_vec(),
    };

    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(HASH_LEN))
        .map_err(|e| FfPwdError::KeyDerivationFailed(format!("invalid Argon2 params: {e}")))?;

    // Argon2i, matching the hash already persisted in existing stores.
    let argon2 = Argon2::new(Algorithm::Argon2i, Version::V0x13, params);

    let mut hash = [0u8; HASH_LEN];
    argon2
        .hash_password_into(passphrase, &salt, &mut hash)
        .map_err(|e| FfPwdError::KeyDerivationFailed(format!("Argon2 hashing failed: {e}")))?;

    Ok((hash, salt))
}

/// Check `passphrase` against a stored `salt || hash` blob.
pub fn verify_passphrase(passphrase: &[u8], salted_hash: &[u8]) -> Result<bool> {
    if salted_hash.len() < SALT_LEN {
        return Err(FfPwdError::InvalidStoreFormat(format!(
            "passphrase hash is {} bytes, shorter than its {SALT_LEN}-byte salt",
            salted_hash.len()
        )));
    }

    let (salt, expected) = salted_hash.split_at(SALT_LEN);
    let (actual, _) = derive_verification_hash(passphrase, Some(salt))?;

    // Length mismatch compares unequal.
    Ok(actual[..].ct_eq(expected).into())
}

/// Generate a cryptographically random 8-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
