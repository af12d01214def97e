//! On-disk store format.
//!
//! The store is a single JSON document:
//!
//! ```text
//! {
//!   "PassphraseHash": "<base64(salt[8] || argon2 hash[32])>",
//!   "Data":           "<base64(nonce[N] || ciphertext || tag)>",
//!   "NonceSize":      N
//! }
//! ```
//!
//! - **PassphraseHash**: verification material, checked before decrypting.
//! - **Data**: the AES-256-GCM sealed login list.
//! - **NonceSize**: how many leading bytes of `Data` are the nonce.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{FfPwdError, Result};

// ---------------------------------------------------------------------------
// StoreFile
// ---------------------------------------------------------------------------

/// The persisted store.  Owns every piece of cryptographic material that
/// is ever written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFile {
    /// `salt || hash` (base64 in JSON).
    #[serde(
        rename = "PassphraseHash",
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    pub passphrase_hash: Vec<u8>,

    /// `nonce || ciphertext || tag` (base64 in JSON).
    #[serde(
        rename = "Data",
        serialize_with = "base64_encode",
        deserialize_with = "base64_decode"
    )]
    pub data: Vec<u8>,

    /// Length of the nonce prefix of `data`, in bytes.
    #[serde(rename = "NonceSize")]
    pub nonce_size: usize,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Read and parse the store at `path`.
pub fn read_store(path: &Path) -> Result<StoreFile> {
    if !path.exists() {
        return Err(FfPwdError::StoreNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let store: StoreFile = serde_json::from_slice(&bytes)
        .map_err(|e| FfPwdError::InvalidStoreFormat(format!("store JSON: {e}")))?;

    debug!(path = %path.display(), payload_len = store.data.len(), "store read");
    Ok(store)
}

/// Write the store to disk **atomically**.
///
/// 1. Serialize to JSON.
/// 2. Write and fsync a temp file in the same directory (mode 0600).
/// 3. Rename the temp file over the target path.
///
/// The previous store stays intact until the rename, so a failed save
/// never leaves a truncated file behind.
pub fn write_store(path: &Path, store: &StoreFile) -> Result<()> {
    let mut buf = serde_json::to_vec(store)
        .map_err(|e| FfPwdError::SerializationError(format!("store: {e}")))?;
    buf.push(b'\n');

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    if let Err(e) = write_synced(&tmp_path, &buf) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    debug!(path = %path.display(), bytes = buf.len(), "store written");
    Ok(())
}

fn write_synced(path: &Path, buf: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(buf)?;
    file.sync_all()
}

// ---------------------------------------------------------------------------
// Serde helpers for base64-encoded Vec<u8> fields
// ---------------------------------------------------------------------------

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

fn base64_encode<S>(data: &[u8], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let encoded = BASE64.encode(data);
    serializer.serialize_str(&encoded)
}

fn base64_decode<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BASE64.decode(&s).map_err(serde::de::Error::custom)
}
