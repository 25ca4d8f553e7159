// tests/core/file.rs
use std::fs;

use cloud_encryption_layer::{CoreError, CryptoEngine};
use serde_json::Value;
use tempfile::tempdir;

use crate::support::tamper;

#[test]
fn test_encrypt_file_and_decrypt_file_roundtrip() {
    crate::common::setup();
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain.txt");
    let dec = dir.path().join("out.txt");
    let content = b"This is a test file with sensitive data!\nLine 2\nLine 3";
    fs::write(&plain, content).unwrap();

    let engine = CryptoEngine::default();
    let key = engine.generate_key().unwrap();

    let envelope = engine.encrypt_file(&plain, &key).unwrap();
    assert_eq!(envelope.original_filename(), Some("plain.txt"));
    assert_eq!(envelope.original_size(), Some(content.len() as u64));

    let outcome = engine.decrypt_file(&envelope, &key, &dec).unwrap();
    assert!(outcome.integrity_verified);
    assert_eq!(outcome.bytes_written, content.len() as u64);
    assert_eq!(fs::read(&dec).unwrap(), content);
}

#[test]
fn test_encrypt_empty_file() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("empty");
    fs::write(&plain, b"").unwrap();

    let engine = CryptoEngine::default();
    let key = engine.generate_key().unwrap();
    let envelope = engine.encrypt_file(&plain, &key).unwrap();
    assert_eq!(envelope.original_size(), Some(0));

    let out = dir.path().join("empty.out");
    let outcome = engine.decrypt_file(&envelope, &key, &out).unwrap();
    assert!(outcome.integrity_verified);
    assert_eq!(fs::read(&out).unwrap(), b"");
}

#[test]
fn test_encrypt_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let engine = CryptoEngine::default();
    let key = engine.generate_key().unwrap();

    let err = engine
        .encrypt_file(dir.path().join("does-not-exist"), &key)
        .unwrap_err();
    assert!(err.is_not_found());
    match err {
        CoreError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io error, got {other}"),
    }
}

#[test]
fn test_decrypt_file_writes_output_even_when_integrity_fails() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("report.csv");
    fs::write(&plain, b"a,b,c\n1,2,3\n").unwrap();

    let engine = CryptoEngine::default();
    let key = engine.generate_key().unwrap();
    let envelope = engine.encrypt_file(&plain, &key).unwrap();
    let forged = tamper(&envelope, |v| {
        v["original_hash"] = Value::from(CryptoEngine::hash(b"other"))
    });

    let out = dir.path().join("report.out");
    let outcome = engine.decrypt_file(&forged, &key, &out).unwrap();
    assert!(!outcome.integrity_verified);
    assert_eq!(fs::read(&out).unwrap(), b"a,b,c\n1,2,3\n");
}

#[test]
fn test_decrypt_file_with_wrong_key_never_reports_verified() {
    let dir = tempdir().unwrap();
    let plain = dir.path().join("plain.bin");
    fs::write(&plain, [9u8; 100]).unwrap();

    let engine = CryptoEngine::default();
    let key = engine.generate_key().unwrap();
    let wrong = engine.generate_key().unwrap();
    let envelope = engine.encrypt_file(&plain, &key).unwrap();

    match engine.decrypt_file(&envelope, &wrong, dir.path().join("out.bin")) {
        Err(CoreError::Padding) => {}
        Ok(outcome) => assert!(!outcome.integrity_verified),
        Err(other) => panic!("unexpected error: {other}"),
    }
}
