//! Entropy/word conversion commands: encode, decode and comply.

use std::process::ExitCode;

use clap::Args;

use crate::checksum::{compute_checksum, split_full_bits, ChecksumMode};
use crate::cli::utils::{
    note_console_encoding, print_info, print_numbered, print_success,
    print_warning, resolve_words,
};
use crate::comply::make_compliant;
use crate::config::Config;
use crate::entropy::{entropy_from_hex, entropy_to_hex};
use crate::mnemonic::{entropy_to_words_with_mode, words_to_full_bits};
use crate::validate::{is_valid_secp256k1_range, validate_mnemonic};

#[derive(Args, Clone)]
pub struct EncodeArgs {
    /// Entropy as 32, 40, 48, 56 or 64 hex digits
    pub entropy: String,
    /// Force every checksum bit to zero (not BIP-39 compliant)
    #[arg(long)]
    pub clear_checksum: bool,
}

#[derive(Args, Clone)]
pub struct DecodeArgs {
    /// Mnemonic words (unique prefixes are accepted)
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

#[derive(Args, Clone)]
pub struct ComplyArgs {
    /// Mnemonic words (unique prefixes are accepted)
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
    /// Clear the checksum instead of recomputing it
    #[arg(long)]
    pub zero_checksum: bool,
}

pub fn encode(args: EncodeArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let language = config.language;
    let mode = if args.clear_checksum {
        ChecksumMode::Cleared
    } else {
        config.checksum_mode
    };

    let (entropy, entropy_bits) = entropy_from_hex(&args.entropy)?;
    if config.check_secp256k1_range && !is_valid_secp256k1_range(&entropy) {
        print_warning("Entropy is not below the secp256k1 group order");
    }
    if mode == ChecksumMode::Cleared {
        print_warning("Checksum cleared: the mnemonic is not BIP-39 compliant");
    }

    let words = entropy_to_words_with_mode(&entropy, entropy_bits, language, mode)?;
    note_console_encoding(language);
    print_numbered("Word", &words);
    println!("{}", words.join(" "));
    Ok(ExitCode::SUCCESS)
}

pub fn decode(args: DecodeArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let language = config.language;
    let words = resolve_words(&args.words, language)?;
    let full = words_to_full_bits(&words, language)?;
    let split = split_full_bits(&full)?;
    let expected = compute_checksum(split.entropy(), split.entropy_bits())?;
    let width = split.checksum_bits();

    let hex = entropy_to_hex(split.entropy(), split.entropy_bits());
    println!("Entropy ({} bits): {}", split.entropy_bits(), *hex);
    println!("Checksum ({} bits): {:0width$b}", width, split.checksum(), width = width);
    if split.checksum() == expected {
        print_success("Checksum matches");
    } else {
        print_warning(&format!(
            "Checksum mismatch: expected {:0width$b}",
            expected,
            width = width
        ));
    }

    let result = validate_mnemonic(&words, language, config.check_secp256k1_range);
    print_info(&format!("Validation: {}", result));
    Ok(ExitCode::SUCCESS)
}

pub fn comply(args: ComplyArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let language = config.language;
    let mode = if args.zero_checksum {
        ChecksumMode::Cleared
    } else {
        ChecksumMode::Standard
    };

    let words = resolve_words(&args.words, language)?;
    let fixed = make_compliant(&words, language, mode)?;

    match fixed.last() {
        Some(last) if words.last() != Some(last) => {
            print_info(&format!("Last word is now '{}'", last))
        }
        _ => print_info("Last word unchanged"),
    }

    note_console_encoding(language);
    println!("{}", fixed.join(" "));
    Ok(ExitCode::SUCCESS)
}
