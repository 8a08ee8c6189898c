//! BIP-39 word dictionaries.
//!
//! Each [`Language`] selects one of ten static lists of exactly 2048 words.
//! A word's position in its list *is* its 11-bit value, so list order is
//! load-bearing and is taken verbatim from the published BIP-39 lists.
//!
//! All lookups are case-insensitive and return words in their canonical
//! (lower-case) form. The lists are small and fixed, so lookups are linear
//! scans; no index structure is kept.
//!
//! ```
//! use bip39_tools::dictionary::{index_of, resolve_prefix, word_at, Language};
//!
//! assert_eq!(word_at(0, Language::English), Some("abandon"));
//! assert_eq!(index_of("ZOO", Language::English), Some(2047));
//! assert_eq!(resolve_prefix("abou", Language::English), Some("about"));
//! assert_eq!(resolve_prefix("abo", Language::English), None);
//! ```

mod language;

pub use language::Language;

/// An 11-bit index into a dictionary, in `0..2048`.
pub type WordIndex = u16;

/// Word at `index`, or `None` if `index >= 2048`.
pub fn word_at(index: WordIndex, language: Language) -> Option<&'static str> {
    language.word_list().get(index as usize).copied()
}

/// Index of `word` (case-insensitive exact match), or `None` if it is empty or
/// not in the list.
pub fn index_of(word: &str, language: Language) -> Option<WordIndex> {
    if word.is_empty() {
        return None;
    }
    let lower = word.to_lowercase();
    language
        .word_list()
        .iter()
        .position(|w| *w == lower)
        .map(|i| i as WordIndex)
}

/// Every word that starts with `prefix` (case-insensitive), in index order.
///
/// An empty prefix matches the whole dictionary.
pub fn matching_words(prefix: &str, language: Language) -> Vec<&'static str> {
    let lower = prefix.to_lowercase();
    language
        .word_list()
        .iter()
        .copied()
        .filter(|w| w.starts_with(lower.as_str()))
        .collect()
}

/// Resolve a (possibly partial or mistyped) word to the unique dictionary
/// word it identifies.
///
/// The prefix is lower-cased and matched against the list:
///
/// - one match: that word is returned;
/// - several matches: the prefix itself is returned if it is a complete word
///   (`"act"` among `act, action, actor, …`), otherwise resolution fails;
/// - no match: the last character is dropped and the search repeats, so
///   trailing typos after a uniquely identifying prefix are tolerated
///   (`"abanzzz"` → `"abandon"`, `"golf"` → `"gold"`).
///
/// Resolution fails once the prefix is empty.
pub fn resolve_prefix(prefix: &str, language: Language) -> Option<&'static str> {
    let mut candidate = prefix.trim().to_lowercase();

    while !candidate.is_empty() {
        let hits = matching_words(&candidate, language);
        match hits.len() {
            0 => {
                candidate.pop();
            }
            1 => return Some(hits[0]),
            _ => return hits.into_iter().find(|w| *w == candidate),
        }
    }

    None
}

/// Resolve each entry of `words` with [`resolve_prefix`].
///
/// Returns the 1-based position and text of the first entry that cannot be
/// resolved.
pub fn resolve_all<S: AsRef<str>>(
    words: &[S],
    language: Language,
) -> Result<Vec<&'static str>, (usize, String)> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| resolve_prefix(w.as_ref(), language).ok_or((i + 1, w.as_ref().to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::NUM_WORDS;

    #[test]
    fn test_word_at_bounds() {
        assert_eq!(word_at(0, Language::English), Some("abandon"));
        assert_eq!(word_at(2047, Language::English), Some("zoo"));
        assert_eq!(word_at(2048, Language::English), None);
        assert_eq!(word_at(u16::MAX, Language::Japanese), None);
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of("abandon", Language::English), Some(0));
        assert_eq!(index_of("About", Language::English), Some(3));
        assert_eq!(index_of("zoo", Language::English), Some(2047));
        assert_eq!(index_of("", Language::English), None);
        assert_eq!(index_of("abou", Language::English), None);
        assert_eq!(index_of("zzzz", Language::English), None);
    }

    #[test]
    fn test_index_of_is_inverse_of_word_at() {
        for lang in Language::ALL {
            for i in [0u16, 1, 777, 1024, 2047] {
                let word = word_at(i, lang).unwrap();
                assert_eq!(index_of(word, lang), Some(i), "{} {}", lang, word);
            }
        }
    }

    #[test]
    fn test_matching_words() {
        assert_eq!(
            matching_words("act", Language::English),
            vec!["act", "action", "actor", "actress", "actual"]
        );
        assert_eq!(matching_words("ACT", Language::English).len(), 5);
        assert_eq!(matching_words("", Language::English).len(), NUM_WORDS);
        assert!(matching_words("qqq", Language::English).is_empty());
    }

    #[test]
    fn test_resolve_prefix() {
        assert_eq!(resolve_prefix("abou", Language::English), Some("about"));
        assert_eq!(resolve_prefix("abo", Language::English), None);
        assert_eq!(resolve_prefix("abouz", Language::English), Some("about"));
        assert_eq!(resolve_prefix("abanzzz", Language::English), Some("abandon"));
        assert_eq!(resolve_prefix("aba", Language::English), Some("abandon"));
        assert_eq!(resolve_prefix("act", Language::English), Some("act"));
        assert_eq!(resolve_prefix("fat", Language::English), Some("fat"));
        assert_eq!(resolve_prefix("abovTYPO", Language::English), Some("above"));
        assert_eq!(resolve_prefix("golf", Language::English), Some("gold"));
        assert_eq!(resolve_prefix("ZZZZTYPO", Language::English), None);
        assert_eq!(resolve_prefix("", Language::English), None);
    }

    #[test]
    fn test_resolve_full_word_every_language() {
        for lang in Language::ALL {
            let word = word_at(1234, lang).unwrap();
            assert_eq!(resolve_prefix(word, lang), Some(word));
        }
    }

    #[test]
    fn test_resolve_all_reports_position() {
        let ok = resolve_all(&["aban", "abil", "zoo"], Language::English).unwrap();
        assert_eq!(ok, vec!["abandon", "ability", "zoo"]);

        let err = resolve_all(&["aban", "abo", "zoo"], Language::English).unwrap_err();
        assert_eq!(err, (2, "abo".to_string()));
    }
}
