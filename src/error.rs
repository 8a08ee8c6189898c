//! Error types for the BIP-39 toolkit

use thiserror::Error;

use crate::validate::ValidateResult;

/// Result type alias using the toolkit's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the BIP-39 toolkit
///
/// Checksum and secp256k1 range mismatches are not represented here; they are
/// ordinary [`ValidateResult`] outcomes.
#[derive(Error, Debug)]
pub enum Error {
    /// Mnemonic length is not one the operation accepts
    #[error("Invalid word count: {count}. Expected one of {expected}")]
    InvalidWordCount { count: usize, expected: &'static str },

    /// A word is not present in the selected dictionary
    #[error("Word {position} ('{word}') is not in the {language} word list")]
    UnknownWord {
        position: usize,
        word: String,
        language: &'static str,
    },

    /// Entropy width is not 128, 160, 192, 224 or 256 bits
    #[error("Unsupported entropy size: {0} bits. Must be 128, 160, 192, 224, or 256")]
    UnsupportedEntropyBits(usize),

    /// Full-bit count does not correspond to a supported mnemonic length
    #[error("Invalid full bit count: {0}. Must be 132, 165, 198, 231, or 264")]
    InvalidFullBitCount(usize),

    /// A phrase that did not classify as a valid mnemonic
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(ValidateResult),

    /// Hex entropy could not be parsed
    #[error("Invalid entropy hex: {0}")]
    InvalidHex(String),

    /// Language name or index not recognised
    #[error("Unknown language '{0}'")]
    UnknownLanguage(String),

    /// A dice roll outside of 1..=6
    #[error("Invalid dice roll {0}. Must be between 1 and 6")]
    InvalidDiceRoll(u8),

    /// More entropy bits were pushed than the accumulator holds
    #[error("Entropy overflow: {requested} bits requested but only {remaining} remaining")]
    EntropyOverflow { requested: usize, remaining: usize },

    /// The accumulator was finished before every bit was supplied
    #[error("Entropy incomplete: {generated} of {total} bits generated")]
    EntropyIncomplete { generated: usize, total: usize },

    /// A coin flip that is neither heads nor tails
    #[error("Invalid coin flip '{0}'. Use H (heads) or T (tails)")]
    InvalidCoinFlip(String),

    /// Final-word enumeration produced an unexpected number of candidates
    #[error("Expected {expected} candidate last words but found {found}")]
    CandidateCountMismatch { expected: usize, found: usize },

    /// Coin-flip reduction requires a power-of-two candidate list
    #[error("Candidate count {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// The coin-flip source ran out before a single word remained
    #[error("Coin flips exhausted: {required} flips required but only {supplied} supplied")]
    CoinFlipsExhausted { required: usize, supplied: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_word_count(count: usize) -> Self {
        Error::InvalidWordCount {
            count,
            expected: "12, 15, 18, 21, or 24",
        }
    }

    pub fn invalid_partial_word_count(count: usize) -> Self {
        Error::InvalidWordCount {
            count,
            expected: "11, 14, 17, 20, or 23",
        }
    }

    pub fn invalid_hex(msg: impl Into<String>) -> Self {
        Error::InvalidHex(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Whether the error was caused by untrusted input rather than a caller bug
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidWordCount { .. }
                | Error::UnknownWord { .. }
                | Error::InvalidMnemonic(_)
                | Error::UnsupportedEntropyBits(_)
                | Error::InvalidHex(_)
                | Error::UnknownLanguage(_)
                | Error::InvalidDiceRoll(_)
                | Error::InvalidCoinFlip(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHex(e.to_string())
    }
}
