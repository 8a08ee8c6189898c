//! Mnemonic encoding: full bits ⇄ ordered word sequences.
//!
//! Every word carries 11 bits. The first word holds the most-significant
//! 11 bits of the full-bit value and the last word holds the least-significant
//! bits, which always include the checksum.

// Allow unused_assignments - the ZeroizeOnDrop derive macro generates code that clippy
// incorrectly flags as unused assignments when it reads/writes struct fields for zeroization
#![allow(unused_assignments)]

use tracing::debug;
use zeroize::{ZeroizeOnDrop, Zeroizing};

use crate::bits::{Bits256, Bits512};
use crate::checksum::{derive_full_bits, split_full_bits, ChecksumMode, FullBits};
use crate::core::constants::{
    entropy_bits_for_words, is_valid_word_count, BITS_PER_WORD, MAX_RAW_WORDS, WORD_MASK,
};
use crate::dictionary::{index_of, Language, WordIndex};
use crate::entropy::entropy_from_hex;
use crate::error::{Error, Result};
use crate::validate::{validate_mnemonic, ValidateResult};

/// Cut full bits into dictionary words, most-significant word first.
pub fn full_bits_to_words(full: &FullBits, language: Language) -> Vec<&'static str> {
    let list = language.word_list();
    let mut remaining = Zeroizing::new(full.bits().clone());
    let mut indices: Zeroizing<Vec<WordIndex>> =
        Zeroizing::new(Vec::with_capacity(full.word_count()));

    for _ in 0..full.word_count() {
        indices.push((remaining.low_u64() & WORD_MASK) as WordIndex);
        *remaining >>= BITS_PER_WORD;
    }
    // Chunks come out least-significant first
    indices.reverse();

    indices.iter().map(|&i| list[i as usize]).collect()
}

/// Encode `entropy_bits` bits of entropy as a BIP-39 mnemonic.
///
/// # Example
/// ```
/// use bip39_tools::bits::Bits256;
/// use bip39_tools::dictionary::Language;
/// use bip39_tools::mnemonic::entropy_to_words;
///
/// let words = entropy_to_words(&Bits256::zero(), 128, Language::English).unwrap();
/// assert_eq!(words.len(), 12);
/// assert_eq!(words[11], "about");
/// ```
pub fn entropy_to_words(
    entropy: &Bits256,
    entropy_bits: usize,
    language: Language,
) -> Result<Vec<&'static str>> {
    entropy_to_words_with_mode(entropy, entropy_bits, language, ChecksumMode::Standard)
}

/// Like [`entropy_to_words`], choosing how the checksum bits are produced.
pub fn entropy_to_words_with_mode(
    entropy: &Bits256,
    entropy_bits: usize,
    language: Language,
    mode: ChecksumMode,
) -> Result<Vec<&'static str>> {
    let full = derive_full_bits(entropy, entropy_bits, mode)?;
    Ok(full_bits_to_words(&full, language))
}

/// Pack a complete mnemonic (12, 15, 18, 21 or 24 words) into full bits.
///
/// Words must match dictionary entries exactly, ignoring case.
pub fn words_to_full_bits<S: AsRef<str>>(words: &[S], language: Language) -> Result<FullBits> {
    if !is_valid_word_count(words.len()) {
        return Err(Error::invalid_word_count(words.len()));
    }
    raw_bits_from_words(words, language)
}

/// Pack up to 46 words into bits with no word-count or checksum constraint.
///
/// Used to pack the known prefix of a mnemonic whose last word is missing.
pub fn raw_bits_from_words<S: AsRef<str>>(words: &[S], language: Language) -> Result<FullBits> {
    if words.len() > MAX_RAW_WORDS {
        return Err(Error::InvalidWordCount {
            count: words.len(),
            expected: "at most 46",
        });
    }

    let mut bits = Zeroizing::new(Bits512::zero());
    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let index = index_of(word, language).ok_or_else(|| Error::UnknownWord {
            position: i + 1,
            word: word.to_string(),
            language: language.name(),
        })?;
        *bits <<= BITS_PER_WORD;
        *bits |= Bits512::from_u64(index as u64);
    }

    let len = words.len() * BITS_PER_WORD;
    debug!(words = words.len(), bits = len, "Packed word bits");
    Ok(FullBits::new((*bits).clone(), len))
}

/// Entropy carried by a complete mnemonic, ignoring its checksum.
///
/// Returns the entropy and its width in bits.
pub fn entropy_from_words<S: AsRef<str>>(
    words: &[S],
    language: Language,
) -> Result<(Zeroizing<Bits256>, usize)> {
    let full = words_to_full_bits(words, language)?;
    let split = split_full_bits(&full)?;
    Ok((Zeroizing::new(split.entropy().clone()), split.entropy_bits()))
}

/// A checksum-valid BIP-39 mnemonic in a known language.
///
/// The words are securely zeroed from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Mnemonic {
    #[zeroize(skip)]
    language: Language,
    phrase: String,
    words: Vec<String>,
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't expose the actual phrase in debug output
        f.debug_struct("Mnemonic")
            .field("word_count", &self.words.len())
            .field("language", &self.language)
            .finish()
    }
}

impl Mnemonic {
    /// Encode entropy of a supported width.
    ///
    /// # Example
    /// ```
    /// use bip39_tools::bits::Bits256;
    /// use bip39_tools::dictionary::Language;
    /// use bip39_tools::mnemonic::Mnemonic;
    ///
    /// let mnemonic = Mnemonic::from_entropy(&Bits256::zero(), 256, Language::English).unwrap();
    /// assert_eq!(mnemonic.word_count(), 24);
    /// assert_eq!(mnemonic.words()[23], "art");
    /// ```
    pub fn from_entropy(entropy: &Bits256, entropy_bits: usize, language: Language) -> Result<Self> {
        let words = entropy_to_words(entropy, entropy_bits, language)?;
        Ok(Self::from_canonical(&words, language))
    }

    /// Encode entropy given as big-endian hex (32 to 64 digits).
    pub fn from_entropy_hex(hex_str: &str, language: Language) -> Result<Self> {
        let (entropy, bits) = entropy_from_hex(hex_str)?;
        Self::from_entropy(&entropy, bits, language)
    }

    /// Parse a whitespace-separated phrase.
    ///
    /// The phrase must be a checksum-valid mnemonic. The secp256k1 range is
    /// not checked here; use [`validate_mnemonic`] for that.
    ///
    /// # Example
    /// ```
    /// use bip39_tools::dictionary::Language;
    /// use bip39_tools::mnemonic::Mnemonic;
    ///
    /// let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    /// let mnemonic = Mnemonic::from_phrase(phrase, Language::English).unwrap();
    /// assert_eq!(mnemonic.phrase(), phrase);
    /// ```
    pub fn from_phrase(phrase: &str, language: Language) -> Result<Self> {
        let normalized = Zeroizing::new(phrase.trim().to_lowercase());
        let words: Vec<&str> = normalized.split_whitespace().collect();
        Self::from_words(&words, language)
    }

    /// Build from individual words; see [`Mnemonic::from_phrase`].
    pub fn from_words<S: AsRef<str>>(words: &[S], language: Language) -> Result<Self> {
        match validate_mnemonic(words, language, false) {
            ValidateResult::Valid => {}
            other => return Err(Error::InvalidMnemonic(other)),
        }

        let words: Vec<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        let phrase = words.join(" ");
        Ok(Self {
            language,
            phrase,
            words,
        })
    }

    /// Whether `phrase` is a checksum-valid mnemonic in `language`.
    pub fn validate(phrase: &str, language: Language) -> bool {
        Self::from_phrase(phrase, language).is_ok()
    }

    fn from_canonical(words: &[&'static str], language: Language) -> Self {
        Self {
            language,
            phrase: words.join(" "),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Get the mnemonic phrase as a string.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Get the individual words of the mnemonic.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The word count (12, 15, 18, 21, or 24).
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Entropy width in bits.
    pub fn entropy_bits(&self) -> usize {
        entropy_bits_for_words(self.words.len()).unwrap_or(0)
    }

    /// Entropy followed by checksum.
    pub fn to_full_bits(&self) -> Result<FullBits> {
        words_to_full_bits(&self.words, self.language)
    }

    /// The underlying entropy.
    pub fn to_entropy(&self) -> Result<Zeroizing<Bits256>> {
        entropy_from_words(&self.words, self.language).map(|(entropy, _)| entropy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_zero_entropy_words() {
        let words = entropy_to_words(&Bits256::zero(), 128, Language::English).unwrap();
        assert_eq!(words.join(" "), ZERO_12);
    }

    #[test]
    fn test_word_order_is_msb_first() {
        let entropy = Bits256::from_hex("9e885d952ad362caeb4efe34a8e91bd2").unwrap();
        let words = entropy_to_words(&entropy, 128, Language::English).unwrap();
        assert_eq!(
            words.join(" "),
            "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic"
        );
    }

    #[test]
    fn test_unsupported_entropy_width() {
        assert!(matches!(
            entropy_to_words(&Bits256::zero(), 120, Language::English),
            Err(Error::UnsupportedEntropyBits(120))
        ));
    }

    #[test]
    fn test_cleared_checksum_changes_last_word_only() {
        let entropy = Bits256::from_hex(&"7f".repeat(16)).unwrap();
        let standard = entropy_to_words(&entropy, 128, Language::English).unwrap();
        let cleared =
            entropy_to_words_with_mode(&entropy, 128, Language::English, ChecksumMode::Cleared)
                .unwrap();
        assert_eq!(standard[..11], cleared[..11]);
        assert_eq!(standard[11], "yellow");
        assert_eq!(cleared[11], "wrap");
    }

    #[test]
    fn test_words_to_full_bits_roundtrip() {
        let entropy =
            Bits256::from_hex("6610b25967cdcca9d59875f5cb50b0ea75433311869e930b").unwrap();
        let expected = derive_full_bits(&entropy, 192, ChecksumMode::Standard).unwrap();
        let words = full_bits_to_words(&expected, Language::Spanish);
        let packed = words_to_full_bits(&words, Language::Spanish).unwrap();
        assert_eq!(packed, expected);
        assert_eq!(packed.len(), 198);
    }

    #[test]
    fn test_words_to_full_bits_rejects_bad_count() {
        let words = vec!["abandon"; 13];
        assert!(matches!(
            words_to_full_bits(&words, Language::English),
            Err(Error::InvalidWordCount { count: 13, .. })
        ));
    }

    #[test]
    fn test_unknown_word_reports_position() {
        let mut words: Vec<&str> = ZERO_12.split(' ').collect();
        words[4] = "bitcoin";
        match words_to_full_bits(&words, Language::English) {
            Err(Error::UnknownWord { position, word, .. }) => {
                assert_eq!(position, 5);
                assert_eq!(word, "bitcoin");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_raw_bits_accepts_any_count() {
        let empty: [&str; 0] = [];
        let raw = raw_bits_from_words(&empty, Language::English).unwrap();
        assert!(raw.is_empty());

        let raw = raw_bits_from_words(&["zoo", "about"], Language::English).unwrap();
        assert_eq!(raw.len(), 22);
        assert_eq!(raw.bits().low_u64(), (2047 << 11) | 3);

        let too_many = vec!["zoo"; 47];
        assert!(raw_bits_from_words(&too_many, Language::English).is_err());
    }

    #[test]
    fn test_entropy_from_words_ignores_checksum() {
        let mut words: Vec<&str> = ZERO_12.split(' ').collect();
        words[11] = "abandon";
        let (entropy, bits) = entropy_from_words(&words, Language::English).unwrap();
        assert_eq!(bits, 128);
        assert!(entropy.is_zero());
    }

    #[test]
    fn test_mnemonic_from_phrase_normalizes() {
        let padded = format!("  {}  ", ZERO_12.to_uppercase());
        let mnemonic = Mnemonic::from_phrase(&padded, Language::English).unwrap();
        assert_eq!(mnemonic.phrase(), ZERO_12);
        assert_eq!(mnemonic.word_count(), 12);
        assert_eq!(mnemonic.entropy_bits(), 128);
        assert!(mnemonic.to_entropy().unwrap().is_zero());
    }

    #[test]
    fn test_mnemonic_rejects_bad_checksum() {
        let bad = ZERO_12.replace("about", "abandon");
        assert!(matches!(
            Mnemonic::from_phrase(&bad, Language::English),
            Err(Error::InvalidMnemonic(ValidateResult::InvalidBip39Checksum))
        ));
        assert!(!Mnemonic::validate(&bad, Language::English));
        assert!(Mnemonic::validate(ZERO_12, Language::English));
    }

    #[test]
    fn test_mnemonic_from_entropy_hex() {
        let mnemonic = Mnemonic::from_entropy_hex(&"ff".repeat(16), Language::English).unwrap();
        assert_eq!(mnemonic.words()[11], "wrong");
        assert_eq!(mnemonic.language(), Language::English);
    }

    #[test]
    fn test_mnemonic_debug_redacts() {
        let mnemonic = Mnemonic::from_phrase(ZERO_12, Language::English).unwrap();
        let dbg = format!("{:?}", mnemonic);
        assert!(!dbg.contains("abandon"));
        assert!(dbg.contains("12"));
    }
}
