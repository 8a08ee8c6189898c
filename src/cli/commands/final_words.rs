//! Final-word solver command.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use console::style;

use crate::cli::utils::{
    note_console_encoding, print_info, print_success, prompt_coin_flip, resolve_words,
};
use crate::config::Config;
use crate::solver::{
    final_word_candidates, final_word_candidates_brute_force, reduce_with_coin_flips,
    required_coin_flips, write_report, CoinFlip,
};

#[derive(Args, Clone)]
pub struct FinalWordsArgs {
    /// The first 11, 14, 17, 20 or 23 words (unique prefixes are accepted)
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
    /// Coin flips used to pick one candidate, e.g. HTTHTHH
    #[arg(short, long, conflicts_with = "interactive")]
    pub flips: Option<String>,
    /// Prompt for each coin flip
    #[arg(short, long)]
    pub interactive: bool,
    /// Try all 2048 words instead of the free entropy bits
    #[arg(long)]
    pub brute_force: bool,
    /// Also write the candidate report to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

pub fn execute(args: FinalWordsArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let language = config.language;
    let known = resolve_words(&args.words, language)?;

    let candidates = if args.brute_force {
        final_word_candidates_brute_force(&known, language)?
    } else {
        final_word_candidates(&known, language)?
    };

    note_console_encoding(language);
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&mut out, &known, &candidates)?;
        out.flush()?;
    }

    if let Some(path) = &args.save {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        write_report(&mut out, &known, &candidates)?;
        out.flush()?;
        print_success(&format!("Report saved to {}", path.display()));
    }

    let flips = match (&args.flips, args.interactive) {
        (Some(sequence), _) => CoinFlip::parse_sequence(sequence)?,
        (None, true) => prompt_flips(candidates.len())?,
        (None, false) => {
            print_info(&format!(
                "{} candidates; pick one at random or pass {} coin flips with --flips",
                candidates.len(),
                required_coin_flips(candidates.len())?
            ));
            return Ok(ExitCode::SUCCESS);
        }
    };

    let chosen = reduce_with_coin_flips(&candidates, flips)?;
    println!();
    println!("Selected last word: {}", style(chosen).green().bold());
    println!("{} {}", known.join(" "), chosen);
    Ok(ExitCode::SUCCESS)
}

fn prompt_flips(candidate_count: usize) -> anyhow::Result<Vec<CoinFlip>> {
    let required = required_coin_flips(candidate_count)?;
    (1..=required)
        .map(|i| prompt_coin_flip(i, required))
        .collect()
}
