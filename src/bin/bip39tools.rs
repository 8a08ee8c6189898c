//! BIP-39 toolkit binary entrypoint.
//!
//! Encodes, decodes and validates mnemonics and solves for the final word.

use std::process::ExitCode;

use bip39_tools::cli;

fn main() -> anyhow::Result<ExitCode> {
    cli::run()
}
