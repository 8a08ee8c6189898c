//! Config file round-trips

use bip39_tools::checksum::ChecksumMode;
use bip39_tools::logging::LogFormat;
use bip39_tools::{Config, Error, Language};

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("bip39tools.json");

    let mut config = Config::new()
        .with_language(Language::Italian)
        .with_range_check(false)
        .with_checksum_mode(ChecksumMode::Cleared)
        .with_debug(true);
    config.logging.format = LogFormat::Json;

    config.save(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_saved_file_is_pretty_json() {
    let file = tempfile::NamedTempFile::new().unwrap();
    Config::new().save(file.path()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(text.contains("\n  \"language\": \"english\""));
    assert!(text.contains("\"check_secp256k1_range\": true"));
}

#[test]
fn test_partial_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), r#"{ "language": "korean", "logging": { "debug": true } }"#)
        .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.language, Language::Korean);
    assert!(config.check_secp256k1_range);
    assert_eq!(config.checksum_mode, ChecksumMode::Standard);
    assert!(config.logging.debug);
    assert_eq!(config.logging.format, LogFormat::Text);
}

#[test]
fn test_invalid_file_errors() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), r#"{ "language": "klingon" }"#).unwrap();
    assert!(matches!(
        Config::from_file(file.path()),
        Err(Error::Serialization(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Config::from_file(dir.path().join("missing.json")),
        Err(Error::Io(_))
    ));
}
