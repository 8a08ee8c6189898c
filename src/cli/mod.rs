//! Command-line front end for the BIP-39 toolkit
//!
//! # Commands
//!
//! - `encode` / `decode` - Convert between entropy hex and words
//! - `validate` - Classify a mnemonic
//! - `final-words` - List (and pick from) the valid last words
//! - `comply` - Rewrite the checksum word
//! - `complete` / `languages` - Word list lookups
//! - `from-dice` - Build a mnemonic from dice rolls
//! - `self-test` - Run the built-in known-answer tests

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::dictionary::Language;
use crate::logging::{init_logging, LogFormat};

pub mod commands;
pub mod utils;

/// BIP-39 mnemonic toolkit
#[derive(Parser)]
#[command(name = "bip39tools")]
#[command(author = "Cortex Foundation")]
#[command(version)]
#[command(about = "BIP-39 entropy/mnemonic codec, validator and final-word solver", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Word list language (name or index 0-9)
    #[arg(short, long, global = true)]
    pub language: Option<Language>,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log output format (text, json, compact)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Encode entropy hex as a mnemonic
    #[command(alias = "e")]
    Encode(commands::codec::EncodeArgs),

    /// Decode a mnemonic to entropy hex and checksum bits
    #[command(alias = "d")]
    Decode(commands::codec::DecodeArgs),

    /// Check word count, words, secp256k1 range and checksum
    #[command(alias = "v")]
    Validate(commands::inspect::ValidateArgs),

    /// List every valid last word for 11, 14, 17, 20 or 23 known words
    #[command(alias = "fw")]
    FinalWords(commands::final_words::FinalWordsArgs),

    /// Re-emit a mnemonic with a corrected (or cleared) checksum
    Comply(commands::codec::ComplyArgs),

    /// Show the words matching a prefix
    Complete(commands::inspect::CompleteArgs),

    /// List the supported languages
    Languages,

    /// Generate a mnemonic from dice rolls
    FromDice(commands::dice::FromDiceArgs),

    /// Run the built-in known-answer tests
    SelfTest,
}

impl Cli {
    /// Defaults, then the config file, then `BIP39_*` variables, then flags.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let base = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => Config::default(),
        };
        let mut config = base.apply_env()?;

        if let Some(language) = self.language {
            config.language = language;
        }
        if self.debug {
            config.logging.debug = true;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
        Ok(config)
    }
}

/// Run the CLI application
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(&config.logging);
    debug!(language = %config.language, "Configuration loaded");

    match cli.command {
        Commands::Encode(args) => commands::codec::encode(args, &config),
        Commands::Decode(args) => commands::codec::decode(args, &config),
        Commands::Validate(args) => commands::inspect::validate(args, &config),
        Commands::FinalWords(args) => commands::final_words::execute(args, &config),
        Commands::Comply(args) => commands::codec::comply(args, &config),
        Commands::Complete(args) => commands::inspect::complete(args, &config),
        Commands::Languages => commands::inspect::languages(),
        Commands::FromDice(args) => commands::dice::execute(args, &config),
        Commands::SelfTest => commands::self_test::execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_override_config() {
        let cli = Cli::try_parse_from([
            "bip39tools",
            "validate",
            "--language",
            "spanish",
            "--log-format",
            "compact",
            "abandon",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.language, Language::Spanish);
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(Cli::try_parse_from(["bip39tools", "-l", "klingon", "languages"]).is_err());
    }
}
