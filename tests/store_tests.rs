//! Integration tests for the ff-pwd store: save, load, validate, decrypt.

use std::fs;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ff_pwd::vault::{Login, LoginStore, StoreFile};
use ff_pwd::FfPwdError;
use tempfile::TempDir;

/// Helper: a store in a fresh temp dir.
fn temp_store() -> (TempDir, LoginStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = LoginStore::new(dir.path().join("data.json"));
    (dir, store)
}

fn login(url: &str, username: &str, password: &str) -> Login {
    Login::from_row(
        [
            url,
            username,
            password,
            "",
            url,
            "{0d7a7b5e-1c4f-4f0e-9d2b-7d2a1a0e6c11}",
            "1600000000000",
            "1600000001000",
            "1600000002000",
        ],
        1,
    )
    .expect("nine columns")
}

// ---------------------------------------------------------------------------
// Round-trip
// ---------------------------------------------------------------------------

#[test]
fn save_and_reload_single_login() {
    let (_dir, store) = temp_store();
    let logins = vec![login("https://a.com", "u", "p")];

    store.save_logins(&logins, "correct-horse").unwrap();

    let file = store.load().unwrap();
    assert!(file.validate_passphrase("correct-horse").unwrap());
    assert_eq!(file.get_logins("correct-horse").unwrap(), logins);
}

#[test]
fn order_is_preserved() {
    let (_dir, store) = temp_store();
    let logins = vec![
        login("https://z.example", "zed", "1"),
        login("https://a.example", "amy", "2"),
        login("https://m.example", "", ""),
    ];

    store.save_logins(&logins, "pw").unwrap();
    let reloaded = store.get_logins(&store.load().unwrap(), "pw").unwrap();
    assert_eq!(reloaded, logins);
}

#[test]
fn empty_list_roundtrips() {
    let (_dir, store) = temp_store();
    store.save_logins(&[], "pw").unwrap();

    let file = store.load().unwrap();
    assert!(file.get_logins("pw").unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Wrong passphrase
// ---------------------------------------------------------------------------

#[test]
fn wrong_passphrase_is_rejected() {
    let (_dir, store) = temp_store();
    store
        .save_logins(&[login("https://a.com", "u", "p")], "correct-horse")
        .unwrap();

    let file = store.load().unwrap();
    assert!(!file.validate_passphrase("wrong-horse").unwrap());
    assert!(matches!(
        file.get_logins("wrong-horse"),
        Err(FfPwdError::AuthenticationFailed)
    ));
}

// ---------------------------------------------------------------------------
// Tamper detection
// ---------------------------------------------------------------------------

#[test]
fn tampered_payload_is_detected() {
    let (_dir, store) = temp_store();
    store
        .save_logins(&[login("https://a.com", "u", "p")], "pw")
        .unwrap();
    let original = store.load().unwrap();

    for i in [0, original.nonce_size, original.data.len() - 1] {
        let mut tampered = original.clone();
        tampered.data[i] ^= 0x80;

        assert!(
            matches!(
                tampered.get_logins("pw"),
                Err(FfPwdError::AuthenticationFailed)
            ),
            "flip at byte {i} must fail authentication"
        );
    }
}

#[test]
fn tampered_file_on_disk_is_detected() {
    let (_dir, store) = temp_store();
    store
        .save_logins(&[login("https://a.com", "u", "p")], "pw")
        .unwrap();

    // Rewrite the Data field with one payload byte flipped.
    let raw = fs::read_to_string(store.path()).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let mut data = BASE64.decode(json["Data"].as_str().unwrap()).unwrap();
    let mid = data.len() / 2;
    data[mid] ^= 0xFF;
    json["Data"] = serde_json::Value::String(BASE64.encode(&data));
    fs::write(store.path(), serde_json::to_vec(&json).unwrap()).unwrap();

    let file = store.load().unwrap();
    assert!(file.validate_passphrase("pw").unwrap());
    assert!(matches!(
        file.get_logins("pw"),
        Err(FfPwdError::AuthenticationFailed)
    ));
}

#[test]
fn payload_shorter_than_nonce_is_a_format_error() {
    let file = StoreFile {
        passphrase_hash: vec![0u8; 40],
        data: vec![0u8; 4],
        nonce_size: 12,
    };
    assert!(matches!(
        file.get_logins("pw"),
        Err(FfPwdError::InvalidStoreFormat(_))
    ));
}

// ---------------------------------------------------------------------------
// Full-rewrite semantics
// ---------------------------------------------------------------------------

#[test]
fn every_save_regenerates_salt_and_nonce() {
    let (_dir, store) = temp_store();
    let logins = vec![login("https://a.com", "u", "p")];

    let first = store.save_logins(&logins, "pw").unwrap();
    let second = store.save_logins(&logins, "pw").unwrap();

    assert_ne!(first.passphrase_hash[..8], second.passphrase_hash[..8]);
    assert_ne!(first.data, second.data);
    assert!(second.validate_passphrase("pw").unwrap());
}

#[test]
fn save_replaces_previous_contents() {
    let (_dir, store) = temp_store();
    store
        .save_logins(&[login("https://old.com", "u", "p")], "pw")
        .unwrap();
    store
        .save_logins(&[login("https://new.com", "u", "p")], "pw")
        .unwrap();

    let logins = store.load().unwrap().get_logins("pw").unwrap();
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].url, "https://new.com");
}

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

#[test]
fn store_file_has_exactly_three_fields() {
    let (_dir, store) = temp_store();
    store.save_logins(&[], "pw").unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 3);
    assert_eq!(obj["NonceSize"], 12);
    assert_eq!(
        BASE64.decode(obj["PassphraseHash"].as_str().unwrap()).unwrap().len(),
        40
    );
}

#[test]
fn malformed_store_file_is_a_format_error() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "not json").unwrap();

    assert!(matches!(
        store.load(),
        Err(FfPwdError::InvalidStoreFormat(_))
    ));
}
