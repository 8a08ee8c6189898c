//! Mnemonic validation.
//!
//! Validation is a classification, not an error path: every word list maps to
//! exactly one [`ValidateResult`]. Rules run in priority order and the first
//! failing rule decides the outcome.

use std::fmt;

use tracing::debug;

use crate::bits::Bits256;
use crate::checksum::{compute_checksum, split_full_bits};
use crate::core::constants::{is_valid_word_count, SECP256K1_ORDER_LIMBS};
use crate::dictionary::{index_of, Language};
use crate::mnemonic::words_to_full_bits;

/// Order `n` of the secp256k1 group.
pub const SECP256K1_ORDER: Bits256 = Bits256::from_limbs(SECP256K1_ORDER_LIMBS);

/// Outcome of [`validate_mnemonic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidateResult {
    Valid,
    /// Not 12, 15, 18, 21 or 24 words.
    InvalidWordCount,
    /// At least one word is not in the dictionary.
    InvalidWords,
    /// Entropy is not below the secp256k1 group order.
    InvalidSecp256k1Range,
    /// Embedded checksum does not match the entropy.
    InvalidBip39Checksum,
}

impl ValidateResult {
    pub fn is_valid(self) -> bool {
        self == ValidateResult::Valid
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValidateResult::Valid => "valid",
            ValidateResult::InvalidWordCount => "invalid word count",
            ValidateResult::InvalidWords => "invalid words",
            ValidateResult::InvalidSecp256k1Range => "entropy outside secp256k1 range",
            ValidateResult::InvalidBip39Checksum => "invalid BIP-39 checksum",
        }
    }
}

impl fmt::Display for ValidateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `entropy` is a usable secp256k1 scalar bound, i.e. below the
/// group order.
pub fn is_valid_secp256k1_range(entropy: &Bits256) -> bool {
    *entropy < SECP256K1_ORDER
}

/// Classify a word list.
///
/// Words are matched exactly (ignoring case); resolve prefixes first with
/// [`crate::dictionary::resolve_all`] if needed. With `check_range` set the
/// entropy must also be below the secp256k1 group order.
///
/// # Example
/// ```
/// use bip39_tools::dictionary::Language;
/// use bip39_tools::validate::{validate_mnemonic, ValidateResult};
///
/// let words = ["abandon"; 11];
/// assert_eq!(
///     validate_mnemonic(&words, Language::English, true),
///     ValidateResult::InvalidWordCount
/// );
/// ```
pub fn validate_mnemonic<S: AsRef<str>>(
    words: &[S],
    language: Language,
    check_range: bool,
) -> ValidateResult {
    let result = classify(words, language, check_range);
    debug!(words = words.len(), %language, check_range, %result, "Validated mnemonic");
    result
}

fn classify<S: AsRef<str>>(words: &[S], language: Language, check_range: bool) -> ValidateResult {
    if !is_valid_word_count(words.len()) {
        return ValidateResult::InvalidWordCount;
    }

    // Count is known good, so packing can only fail on an unknown word
    let full = match words_to_full_bits(words, language) {
        Ok(full) => full,
        Err(_) => return ValidateResult::InvalidWords,
    };
    let split = match split_full_bits(&full) {
        Ok(split) => split,
        Err(_) => return ValidateResult::InvalidWordCount,
    };

    if check_range && !is_valid_secp256k1_range(split.entropy()) {
        return ValidateResult::InvalidSecp256k1Range;
    }

    match compute_checksum(split.entropy(), split.entropy_bits()) {
        Ok(checksum) if checksum == split.checksum() => ValidateResult::Valid,
        _ => ValidateResult::InvalidBip39Checksum,
    }
}

/// First language, in [`Language::ALL`] order, that contains every word.
///
/// Returns `None` for an empty list or when no single dictionary holds all
/// the words.
pub fn detect_language<S: AsRef<str>>(words: &[S]) -> Option<Language> {
    if words.is_empty() {
        return None;
    }
    Language::ALL.into_iter().find(|&language| {
        words
            .iter()
            .all(|w| index_of(w.as_ref(), language).is_some())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(phrase: &str) -> Vec<&str> {
        phrase.split_whitespace().collect()
    }

    const VALID_24: &str = "void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing screen patrol group space point ten exist slush involve unfold";

    #[test]
    fn test_valid_phrase() {
        let words = split(VALID_24);
        assert_eq!(
            validate_mnemonic(&words, Language::English, true),
            ValidateResult::Valid
        );
    }

    #[test]
    fn test_priority_order() {
        // Unknown word and bad count: count wins
        let words = split("zzzz come effort");
        assert_eq!(
            validate_mnemonic(&words, Language::English, true),
            ValidateResult::InvalidWordCount
        );

        let replaced = VALID_24.replacen("void", "zzzz", 1);
        let words = split(&replaced);
        assert_eq!(
            validate_mnemonic(&words, Language::English, true),
            ValidateResult::InvalidWords
        );
    }

    #[test]
    fn test_range_boundary() {
        let order = SECP256K1_ORDER;
        assert!(!is_valid_secp256k1_range(&order));

        let below = Bits256::from_hex(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140",
        )
        .unwrap();
        assert!(is_valid_secp256k1_range(&below));
        assert!(is_valid_secp256k1_range(&Bits256::zero()));
        assert!(!is_valid_secp256k1_range(&Bits256::from_limbs([u64::MAX; 4])));
    }

    #[test]
    fn test_range_check_is_optional() {
        let words = vec!["zoo"; 23]
            .into_iter()
            .chain(std::iter::once("vote"))
            .collect::<Vec<_>>();
        assert_eq!(
            validate_mnemonic(&words, Language::English, true),
            ValidateResult::InvalidSecp256k1Range
        );
        assert_eq!(
            validate_mnemonic(&words, Language::English, false),
            ValidateResult::Valid
        );
    }

    #[test]
    fn test_bad_checksum() {
        let words = split(
            "ozone drill grab fiber curtain grace pudding thank cruise elder eight piano",
        );
        let first = validate_mnemonic(&words, Language::English, true);
        assert_eq!(first, ValidateResult::InvalidBip39Checksum);
        assert_eq!(validate_mnemonic(&words, Language::English, true), first);
    }

    #[test]
    fn test_display() {
        assert_eq!(ValidateResult::Valid.to_string(), "valid");
        assert!(ValidateResult::Valid.is_valid());
        assert!(!ValidateResult::InvalidWords.is_valid());
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language(&split(VALID_24)), Some(Language::English));

        let spanish = Language::Spanish.word_list();
        let words = [spanish[10], spanish[1500], spanish[2047]];
        let detected = detect_language(&words).unwrap();
        assert!(detected.index() <= Language::Spanish.index());
        assert!(words.iter().all(|w| index_of(w, detected).is_some()));

        assert_eq!(detect_language(&["notaword"]), None);
        assert_eq!(detect_language::<&str>(&[]), None);
    }
}
