//! Configuration for the BIP-39 toolkit
//!
//! Settings come from defaults, an optional JSON file and `BIP39_*`
//! environment variables, in that order of precedence (last wins).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checksum::ChecksumMode;
use crate::dictionary::Language;
use crate::error::{Error, Result};
use crate::logging::LoggingConfig;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word list used for encoding, decoding and prefix resolution
    pub language: Language,
    /// Reject entropy that is not below the secp256k1 group order
    pub check_secp256k1_range: bool,
    /// Checksum used when encoding entropy
    pub checksum_mode: ChecksumMode,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::English,
            check_secp256k1_range: true,
            checksum_mode: ChecksumMode::Standard,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_range_check(mut self, enabled: bool) -> Self {
        self.check_secp256k1_range = enabled;
        self
    }

    pub fn with_checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.logging.debug = debug;
        self
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Apply `BIP39_*` environment overrides on top of `self`.
    ///
    /// - `BIP39_LANGUAGE`: language name or index
    /// - `BIP39_RANGE_CHECK`: boolean
    /// - `BIP39_CLEAR_CHECKSUM`: boolean
    /// - logging variables, see [`LoggingConfig::apply_env`]
    pub fn apply_env(mut self) -> Result<Self> {
        if let Ok(language) = std::env::var("BIP39_LANGUAGE") {
            self.language = language.parse()?;
        }
        if let Ok(value) = std::env::var("BIP39_RANGE_CHECK") {
            self.check_secp256k1_range = parse_bool("BIP39_RANGE_CHECK", &value)?;
        }
        if let Ok(value) = std::env::var("BIP39_CLEAR_CHECKSUM") {
            self.checksum_mode = if parse_bool("BIP39_CLEAR_CHECKSUM", &value)? {
                ChecksumMode::Cleared
            } else {
                ChecksumMode::Standard
            };
        }
        self.logging = self.logging.apply_env();
        Ok(self)
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Write the config as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "Saved config file");
        Ok(())
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::config(format!(
            "{} must be a boolean, got '{}'",
            name, value
        ))),
    }
}
