//! Checksum rewriting for existing mnemonics.

use tracing::debug;

use crate::checksum::ChecksumMode;
use crate::dictionary::Language;
use crate::error::Result;
use crate::mnemonic::{entropy_from_words, entropy_to_words_with_mode};

/// Re-encode a mnemonic with a recomputed (or cleared) checksum.
///
/// The existing checksum is ignored and the entropy is kept, so only the
/// last word can change. Fails for word counts other than 12, 15, 18, 21 or
/// 24 and for unknown words.
///
/// # Example
/// ```
/// use bip39_tools::checksum::ChecksumMode;
/// use bip39_tools::comply::make_compliant;
/// use bip39_tools::dictionary::Language;
///
/// let words = ["abandon"; 12];
/// let fixed = make_compliant(&words, Language::English, ChecksumMode::Standard).unwrap();
/// assert_eq!(fixed[11], "about");
/// ```
pub fn make_compliant<S: AsRef<str>>(
    words: &[S],
    language: Language,
    mode: ChecksumMode,
) -> Result<Vec<&'static str>> {
    let (entropy, entropy_bits) = entropy_from_words(words, language)?;
    let rewritten = entropy_to_words_with_mode(&entropy, entropy_bits, language, mode)?;

    let changed = words
        .last()
        .zip(rewritten.last())
        .is_some_and(|(old, new)| !old.as_ref().eq_ignore_ascii_case(new));
    debug!(words = words.len(), ?mode, changed, "Rewrote checksum");
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate_mnemonic, ValidateResult};

    #[test]
    fn test_fixes_checksum() {
        let words = "ozone drill grab fiber curtain grace pudding thank cruise elder eight piano"
            .split(' ')
            .collect::<Vec<_>>();
        let fixed = make_compliant(&words, Language::English, ChecksumMode::Standard).unwrap();
        assert_eq!(fixed[..11], words[..11]);
        assert_eq!(fixed[11], "picnic");
        assert_eq!(
            validate_mnemonic(&fixed, Language::English, true),
            ValidateResult::Valid
        );
    }

    #[test]
    fn test_already_valid_is_unchanged() {
        let mut words = ["zoo"; 12];
        words[11] = "wrong";
        let fixed = make_compliant(&words, Language::English, ChecksumMode::Standard).unwrap();
        assert_eq!(fixed, words);
    }

    #[test]
    fn test_zero_checksum() {
        let words = vec!["abandon"; 11]
            .into_iter()
            .chain(["about"])
            .collect::<Vec<_>>();
        let cleared = make_compliant(&words, Language::English, ChecksumMode::Cleared).unwrap();
        assert_eq!(cleared[11], "abandon");
    }

    #[test]
    fn test_rejects_partial_mnemonic() {
        let words = ["abandon"; 11];
        assert!(make_compliant(&words, Language::English, ChecksumMode::Standard).is_err());
    }
}
