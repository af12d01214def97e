//! Cryptographic primitives for ff-pwd.
//!
//! This module provides:
//! - Passphrase key derivation and verification hashing (`kdf`)
//! - A zeroize-on-drop wrapper for the derived key (`keys`)
//! - AES-256-GCM encryption and decryption (`encryption`)

pub mod encryption;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, verify_passphrase, ...};
pub use encryption::{decrypt, encrypt, NONCE_LEN};
pub use kdf::{
    derive_encryption_key, derive_verification_hash, generate_salt, verify_passphrase, SALT_LEN,
};
pub use keys::EncryptionKey;
