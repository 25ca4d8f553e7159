// tests/core/key.rs
use cloud_encryption_layer::core::key::key_representations;
use cloud_encryption_layer::{CoreError, CryptoEngine, FileKey, KeySize};

#[test]
fn test_generate_key_is_random_and_sized() {
    let engine = CryptoEngine::default();
    let key1 = engine.generate_key().unwrap();
    let key2 = engine.generate_key().unwrap();
    assert_eq!(key1.len(), 32);
    assert_ne!(key1.expose_secret(), key2.expose_secret());
}

#[test]
fn test_generate_key_follows_configured_size() {
    for (size, bytes) in [
        (KeySize::Aes128, 16),
        (KeySize::Aes192, 24),
        (KeySize::Aes256, 32),
    ] {
        let key = CryptoEngine::new(size).generate_key().unwrap();
        assert_eq!(key.len(), bytes);
        assert_eq!(key.bits(), size.bits() as usize);
    }
}

#[test]
fn test_key_representations_are_correct_and_consistent() {
    let key = FileKey::new(vec![0x42; 32]);
    let repr = key_representations(&key);

    assert_eq!(
        repr.hex,
        "4242424242424242424242424242424242424242424242424242424242424242"
    );
    assert_eq!(repr.base64, "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI=");
    assert_eq!(
        repr.base64url_no_pad,
        "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI"
    );
    assert_eq!(key.to_base64(), repr.base64);
}

#[test]
fn test_key_base64_roundtrip_tolerates_trailing_newline() {
    let key = FileKey::new((0u8..32).collect());
    let restored = FileKey::from_base64(&format!("{}\n", key.to_base64())).unwrap();
    assert_eq!(key, restored);
}

#[test]
fn test_key_from_bad_base64_is_encoding_error() {
    assert!(matches!(
        FileKey::from_base64("not base64!!"),
        Err(CoreError::Encoding(_))
    ));
}

#[test]
fn test_debug_output_never_shows_key_bytes() {
    let key = FileKey::new(vec![0xAB; 32]);
    let shown = format!("{key:?}");
    assert!(shown.contains("REDACTED"));
    assert!(!shown.to_lowercase().contains("ab, ab"));
    assert!(!shown.contains("171"));
}

#[test]
fn test_key_size_conversions() {
    assert_eq!(KeySize::try_from(192u32).unwrap(), KeySize::Aes192);
    assert!(matches!(
        KeySize::try_from(512u32),
        Err(CoreError::UnsupportedKeySize(512))
    ));
    assert_eq!(KeySize::default().bits(), 256);
    assert_eq!(KeySize::Aes128.to_string(), "AES-128-CBC");
}
