//! Read-only commands: validate, complete and languages.

use std::process::ExitCode;

use clap::Args;
use console::style;

use crate::cli::utils::{collect_words, print_error, print_success, print_warning, resolve_words};
use crate::config::Config;
use crate::dictionary::{matching_words, resolve_prefix, Language};
use crate::validate::{detect_language, validate_mnemonic};

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Mnemonic words (unique prefixes are accepted)
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
    /// Skip the secp256k1 range check
    #[arg(long)]
    pub no_range_check: bool,
}

#[derive(Args, Clone)]
pub struct CompleteArgs {
    /// Word prefix
    pub prefix: String,
}

pub fn validate(args: ValidateArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let language = config.language;
    let check_range = config.check_secp256k1_range && !args.no_range_check;

    // Unresolvable entries are classified as-is
    let raw = collect_words(&args.words);
    let result = match resolve_words(&args.words, language) {
        Ok(words) => validate_mnemonic(&words, language, check_range),
        Err(_) => validate_mnemonic(&raw, language, check_range),
    };

    if result.is_valid() {
        print_success(&format!("Valid {}-word {} mnemonic", raw.len(), language));
    } else {
        print_error(&format!("Invalid mnemonic: {}", result));
        if let Some(other) = detect_language(&raw).filter(|l| *l != language) {
            print_warning(&format!("The words are all in the {} word list", other));
        }
    }
    println!("{}", result);

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub fn complete(args: CompleteArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let language = config.language;
    let resolved = resolve_prefix(&args.prefix, language);
    let mut matches = matching_words(&args.prefix, language);

    if matches.is_empty() {
        // Trailing typo: show the word the shortened prefix resolves to
        match resolved {
            Some(word) => {
                print_warning(&format!("No word starts with '{}'", args.prefix));
                matches.push(word);
            }
            None => print_error(&format!("No {} word starts with '{}'", language, args.prefix)),
        }
    }

    for word in &matches {
        if Some(*word) == resolved {
            println!("{}", style(word).green().bold());
        } else {
            println!("{}", word);
        }
    }

    match resolved {
        Some(word) => {
            print_success(&format!("'{}' resolves to '{}'", args.prefix, word));
            Ok(ExitCode::SUCCESS)
        }
        None if matches.is_empty() => Ok(ExitCode::FAILURE),
        None => Ok(ExitCode::SUCCESS),
    }
}

pub fn languages() -> anyhow::Result<ExitCode> {
    for language in Language::ALL {
        let note = if language.needs_unicode_console() {
            " (needs a UTF-8 terminal)"
        } else {
            ""
        };
        println!(
            "{} {}{}",
            style(language.index()).dim(),
            language,
            style(note).yellow()
        );
    }
    Ok(ExitCode::SUCCESS)
}
