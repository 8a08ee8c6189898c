//! CLI command implementations
//!
//! Each module contains the argument definitions and execution logic
//! for a group of related commands.

pub mod codec;
pub mod dice;
pub mod final_words;
pub mod inspect;
