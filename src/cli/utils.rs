//! CLI utility functions for terminal interaction and formatting.
//!
//! Status messages go to stderr; command results are printed to stdout.

use console::{style, Term};
use dialoguer::{Input, Select};

use crate::dictionary::{resolve_all, Language};
use crate::error::Error;
use crate::solver::CoinFlip;

/// Print success message in green.
pub fn print_success(message: &str) {
    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {}", style("✓").green().bold(), message));
}

/// Print error message in red.
pub fn print_error(message: &str) {
    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {}", style("✗").red().bold(), message));
}

/// Print info message in blue.
pub fn print_info(message: &str) {
    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {}", style("ℹ").blue().bold(), message));
}

/// Print warning message in yellow.
pub fn print_warning(message: &str) {
    let term = Term::stderr();
    let _ = term.write_line(&format!("{} {}", style("⚠").yellow().bold(), message));
}

/// Warn once when the language's words may not render in a plain console.
pub fn note_console_encoding(language: Language) {
    if language.needs_unicode_console() {
        print_warning(&format!(
            "{} words contain accented or non-Latin characters; use a UTF-8 terminal",
            language
        ));
    }
}

/// Split word arguments into individual lower-case words.
///
/// Accepts both `a b c` and a single quoted `"a b c"` argument.
pub fn collect_words(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split_whitespace())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Resolve every entry (full word or unique prefix) against the word list.
pub fn resolve_words(args: &[String], language: Language) -> anyhow::Result<Vec<&'static str>> {
    let words = collect_words(args);
    resolve_all(&words, language).map_err(|(position, word)| {
        Error::UnknownWord {
            position,
            word,
            language: language.name(),
        }
        .into()
    })
}

/// Parse dice values from arguments such as `"3 4 1"`, `"341"` or `"3,4,1"`.
pub fn parse_dice(args: &[String]) -> anyhow::Result<Vec<u8>> {
    args.iter()
        .flat_map(|arg| arg.chars())
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c.to_digit(10) {
            Some(d @ 1..=6) => Ok(d as u8),
            Some(d) => Err(Error::InvalidDiceRoll(d as u8).into()),
            None => Err(anyhow::anyhow!("Invalid dice roll '{}'", c)),
        })
        .collect()
}

/// Print words as a numbered two-column list to stdout.
pub fn print_numbered(label: &str, words: &[&str]) {
    for (i, word) in words.iter().enumerate() {
        println!("{} {:02}: {}", label, i + 1, style(word).bold());
    }
}

/// Prompt for text input.
pub fn prompt_input(message: &str) -> anyhow::Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()?)
}

/// Ask for one coin flip.
pub fn prompt_coin_flip(index: usize, total: usize) -> anyhow::Result<CoinFlip> {
    let choice = Select::new()
        .with_prompt(format!("Coin flip {} of {}", index, total))
        .items(&["Heads", "Tails"])
        .default(0)
        .interact()?;
    Ok(if choice == 0 {
        CoinFlip::Heads
    } else {
        CoinFlip::Tails
    })
}
