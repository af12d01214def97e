//! Conversion between the login list and the plaintext bytes that get
//! encrypted.  The store only needs "logins in, bytes out" and back, so
//! the format sits behind a trait.

use zeroize::Zeroizing;

use super::login::Login;
use crate::errors::{FfPwdError, Result};

/// Serializes the full, ordered login list to and from plaintext bytes.
pub trait LoginCodec {
    /// Encode `logins` into plaintext.  The buffer is wiped on drop.
    fn encode(&self, logins: &[Login]) -> Result<Zeroizing<Vec<u8>>>;

    /// Decode plaintext produced by `encode`, preserving order.
    fn decode(&self, plaintext: &[u8]) -> Result<Vec<Login>>;
}

/// JSON array of logins, the format every existing store uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl LoginCodec for JsonCodec {
    fn encode(&self, logins: &[Login]) -> Result<Zeroizing<Vec<u8>>> {
        serde_json::to_vec(logins)
            .map(Zeroizing::new)
            .map_err(|e| FfPwdError::SerializationError(format!("logins: {e}")))
    }

    fn decode(&self, plaintext: &[u8]) -> Result<Vec<Login>> {
        // Older stores may hold `null` for an empty list.
        let logins: Option<Vec<Login>> = serde_json::from_slice(plaintext)
            .map_err(|e| FfPwdError::SerializationError(format!("logins: {e}")))?;
        Ok(logins.unwrap_or_default())
    }
}
