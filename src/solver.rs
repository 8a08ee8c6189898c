//! Final-word solver.
//!
//! Given the first `N - 1` words of an `N`-word mnemonic, the last word holds
//! `11 - CS` bits of free entropy followed by `CS` checksum bits. Every choice
//! of the free bits yields exactly one valid last word, so there are always
//! `2^(11 - CS)` candidates: 128 for 12 words down to 8 for 24 words.
//!
//! The candidate list can be narrowed to one word with fair coin flips
//! supplied by the caller. Each flip halves the list; the solver never draws
//! randomness itself.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::bits::{Bits256, Bits512};
use crate::core::constants::{checksum_bits_for_entropy, entropy_bits_for_words, BITS_PER_WORD};
use crate::dictionary::Language;
use crate::error::{Error, Result};
use crate::mnemonic::{entropy_to_words, raw_bits_from_words};
use crate::validate::validate_mnemonic;

/// One fair coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinFlip {
    /// Discard the first half of the remaining candidates.
    Heads,
    /// Discard the second half of the remaining candidates.
    Tails,
}

impl CoinFlip {
    /// Parse a run of flips such as `"HTTH"`. Whitespace and commas are
    /// ignored.
    pub fn parse_sequence(s: &str) -> Result<Vec<CoinFlip>> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.to_string().parse())
            .collect()
    }
}

impl fmt::Display for CoinFlip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFlip::Heads => write!(f, "heads"),
            CoinFlip::Tails => write!(f, "tails"),
        }
    }
}

impl FromStr for CoinFlip {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "h" | "heads" | "1" => Ok(CoinFlip::Heads),
            "t" | "tails" | "2" => Ok(CoinFlip::Tails),
            other => Err(Error::InvalidCoinFlip(other.to_string())),
        }
    }
}

/// Number of valid last words for a mnemonic missing only its last word.
pub fn expected_candidate_count(known_words: usize) -> Result<usize> {
    let entropy_bits = entropy_bits_for_words(known_words + 1)
        .ok_or_else(|| Error::invalid_partial_word_count(known_words))?;
    Ok(1 << (BITS_PER_WORD - checksum_bits_for_entropy(entropy_bits)))
}

/// Every word that completes `known` into a checksum-valid mnemonic, in
/// ascending order of the free entropy bits.
///
/// `known` must hold 11, 14, 17, 20 or 23 exact dictionary words. Only the
/// `2^(11 - CS)` possible entropy completions are tried, and each rebuilt
/// mnemonic is validated again as a self-check.
pub fn final_word_candidates<S: AsRef<str>>(
    known: &[S],
    language: Language,
) -> Result<Vec<&'static str>> {
    let entropy_bits = entropy_bits_for_words(known.len() + 1)
        .ok_or_else(|| Error::invalid_partial_word_count(known.len()))?;
    let free_bits = BITS_PER_WORD - checksum_bits_for_entropy(entropy_bits);
    let expected = 1usize << free_bits;
    let raw = raw_bits_from_words(known, language)?;

    let mut candidates = Vec::with_capacity(expected);
    for v in 0..expected as u64 {
        let mut bits = Zeroizing::new(raw.bits().clone());
        *bits <<= free_bits;
        *bits |= Bits512::from_u64(v);
        let entropy: Zeroizing<Bits256> = Zeroizing::new(bits.masked(entropy_bits).resize());

        let words = entropy_to_words(&entropy, entropy_bits, language)?;
        if !validate_mnemonic(&words, language, false).is_valid() {
            warn!(candidate = v, "Rebuilt mnemonic failed validation, skipping");
            continue;
        }
        if let Some(last) = words.last() {
            candidates.push(*last);
        }
    }

    check_count(expected, candidates.len())?;
    info!(
        known = known.len(),
        candidates = candidates.len(),
        %language,
        "Enumerated final words"
    );
    Ok(candidates)
}

/// Same result as [`final_word_candidates`], found by appending each of the
/// 2048 dictionary words and validating the full mnemonic.
///
/// Slower; kept as an independent cross-check.
pub fn final_word_candidates_brute_force<S: AsRef<str>>(
    known: &[S],
    language: Language,
) -> Result<Vec<&'static str>> {
    let expected = expected_candidate_count(known.len())?;
    // Surface unknown words as errors rather than an empty result
    raw_bits_from_words(known, language)?;

    let mut words: Vec<&str> = known.iter().map(|w| w.as_ref()).collect();
    let mut candidates = Vec::with_capacity(expected);
    for &last in language.word_list().iter() {
        words.push(last);
        if validate_mnemonic(&words, language, false).is_valid() {
            candidates.push(last);
        }
        words.pop();
    }

    check_count(expected, candidates.len())?;
    debug!(candidates = candidates.len(), "Brute-force enumeration complete");
    Ok(candidates)
}

fn check_count(expected: usize, found: usize) -> Result<()> {
    if found != expected {
        warn!(expected, found, "Final word count mismatch");
        return Err(Error::CandidateCountMismatch { expected, found });
    }
    Ok(())
}

/// Coin flips needed to reduce `candidate_count` candidates to one.
pub fn required_coin_flips(candidate_count: usize) -> Result<usize> {
    if !candidate_count.is_power_of_two() {
        return Err(Error::NotPowerOfTwo(candidate_count));
    }
    Ok(candidate_count.trailing_zeros() as usize)
}

/// Narrow `candidates` to a single entry.
///
/// Each flip halves the list: heads keeps the second half, tails keeps the
/// first half. Exactly [`required_coin_flips`] flips are consumed; extra flips
/// are left in the iterator.
///
/// # Example
/// ```
/// use bip39_tools::solver::{reduce_with_coin_flips, CoinFlip};
///
/// let words = ["a", "b", "c", "d"];
/// let picked = reduce_with_coin_flips(&words, [CoinFlip::Heads, CoinFlip::Tails]).unwrap();
/// assert_eq!(*picked, "c");
/// ```
pub fn reduce_with_coin_flips<T, I>(candidates: &[T], flips: I) -> Result<&T>
where
    I: IntoIterator<Item = CoinFlip>,
{
    let required = required_coin_flips(candidates.len())?;
    let mut flips = flips.into_iter();
    let mut remaining = candidates;

    for supplied in 0..required {
        let flip = flips
            .next()
            .ok_or(Error::CoinFlipsExhausted { required, supplied })?;
        let half = remaining.len() / 2;
        remaining = match flip {
            CoinFlip::Heads => &remaining[half..],
            CoinFlip::Tails => &remaining[..half],
        };
        debug!(flip = supplied + 1, remaining = remaining.len(), "Applied coin flip");
    }

    remaining
        .first()
        .ok_or(Error::NotPowerOfTwo(candidates.len()))
}

/// Write the known words and the candidate last words as a numbered list.
pub fn write_report<W: Write, S: AsRef<str>>(
    out: &mut W,
    known: &[S],
    candidates: &[&str],
) -> Result<()> {
    writeln!(out, "First {} Words", known.len())?;
    for (i, word) in known.iter().enumerate() {
        writeln!(out, "Word {:02}: {}", i + 1, word.as_ref())?;
    }
    writeln!(out)?;
    writeln!(out, "Valid Last Words")?;
    for (i, word) in candidates.iter().enumerate() {
        writeln!(out, "Last Word {:02}: {}", i + 1, word)?;
    }
    Ok(())
}
