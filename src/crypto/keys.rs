//! In-memory holder for the derived encryption key.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of the AES-256 key in bytes.
pub const KEY_LEN: usize = 32;

/// A 32-byte encryption key that zeroes its memory when dropped.
///
/// Lives only for the duration of one encrypt or decrypt call and is
/// never written to disk.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey {
    bytes: [u8; KEY_LEN],
}

impl EncryptionKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_key_bytes() {
        let key = EncryptionKey::new([0x42u8; KEY_LEN]);
        let rendered = format!("{key:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("66"));
    }
}
