pub mod bits;
pub mod checksum;
pub mod cli;
pub mod comply;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod logging;
pub mod mnemonic;
pub mod selftest;
pub mod solver;
pub mod validate;

pub use config::Config;
pub use error::{Error, Result};

// Re-export logging module
pub use logging::{
    init_default_logging, init_logging, is_initialized, CompactFormatter, LogFormat,
    LoggingConfig, TextFormatter,
};

pub use bits::{Bits256, Bits512, FixedBits};
pub use checksum::{ChecksumMode, FullBits, SplitBits};
pub use comply::make_compliant;
pub use dictionary::{index_of, matching_words, resolve_prefix, word_at, Language};
pub use entropy::{entropy_from_hex, DiceMethod, EntropyAccumulator};
pub use mnemonic::{entropy_from_words, entropy_to_words, words_to_full_bits, Mnemonic};
pub use selftest::{run_self_test, SelfTestReport};
pub use solver::{
    final_word_candidates, final_word_candidates_brute_force, reduce_with_coin_flips, CoinFlip,
};
pub use validate::{detect_language, is_valid_secp256k1_range, validate_mnemonic, ValidateResult};
