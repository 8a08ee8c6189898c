//! Dice-roll mnemonic generation.

use std::process::ExitCode;

use anyhow::Context;
use clap::Args;

use crate::cli::utils::{
    note_console_encoding, parse_dice, print_info, print_numbered, print_success,
    print_warning, prompt_input,
};
use crate::config::Config;
use crate::core::constants::entropy_bits_for_words;
use crate::entropy::{DiceMethod, EntropyAccumulator};
use crate::mnemonic::entropy_to_words_with_mode;
use crate::validate::is_valid_secp256k1_range;

#[derive(Args, Clone)]
pub struct FromDiceArgs {
    /// Number of words (12, 15, 18, 21, 24)
    #[arg(short, long, default_value = "24")]
    pub words: usize,
    /// How rolls are turned into bits (simple, parallel, extractor)
    #[arg(short, long, default_value = "simple")]
    pub method: DiceMethod,
    /// Dice values 1-6; prompted for when omitted or too few
    pub rolls: Vec<String>,
}

pub fn execute(args: FromDiceArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let language = config.language;
    let entropy_bits = entropy_bits_for_words(args.words)
        .with_context(|| format!("Word count must be 12, 15, 18, 21 or 24, got {}", args.words))?;
    let mut acc = EntropyAccumulator::new(entropy_bits)?;

    let dice = parse_dice(&args.rolls)?;
    let used = acc.push_rolls(args.method, &dice)?;
    if used < dice.len() && acc.is_complete() {
        print_info(&format!("Ignored {} extra dice values", dice.len() - used));
    }

    while !acc.is_complete() {
        let answer = prompt_input(&format!(
            "{} roll(s), {} of {} bits remaining",
            args.method,
            acc.remaining(),
            acc.total_bits()
        ))?;
        let dice = match parse_dice(&[answer]) {
            Ok(dice) => dice,
            Err(e) => {
                print_warning(&e.to_string());
                continue;
            }
        };
        if dice.len() % args.method.dice_per_event() != 0 {
            print_warning(&format!(
                "The {} method reads dice in groups of {}",
                args.method,
                args.method.dice_per_event()
            ));
        }
        acc.push_rolls(args.method, &dice)?;
    }

    let entropy = acc.finish()?;
    print_success(&format!(
        "Collected {} bits from {} dice",
        acc.total_bits(),
        acc.rolls()
    ));
    if config.check_secp256k1_range && !is_valid_secp256k1_range(&entropy) {
        print_warning("Entropy is not below the secp256k1 group order; roll again");
        return Ok(ExitCode::FAILURE);
    }

    let words = entropy_to_words_with_mode(&entropy, entropy_bits, language, config.checksum_mode)?;
    note_console_encoding(language);
    print_numbered("Word", &words);
    println!("{}", words.join(" "));
    Ok(ExitCode::SUCCESS)
}
