//! Final-word solver scenarios
//!
//! Validates:
//! - Candidate lists for each supported length
//! - Fast enumeration agrees with the 2048-word brute force
//! - Coin flips pick a deterministic candidate

use bip39_tools::dictionary::word_at;
use bip39_tools::solver::{
    expected_candidate_count, final_word_candidates, final_word_candidates_brute_force,
    reduce_with_coin_flips, required_coin_flips, CoinFlip,
};
use bip39_tools::validate::{validate_mnemonic, ValidateResult};
use bip39_tools::{Error, Language};

const KNOWN_23: &str = "void come effort suffer camp survey warrior heavy shoot primary clutch \
                        crush open amazing screen patrol group space point ten exist slush involve";

const KNOWN_17: &str = "legal winner thank year wave sausage worth useful legal winner thank year \
                        wave sausage worth useful legal";

const KNOWN_11: &str = "scheme spot photo card baby mountain device kick cradle pact join";

fn words(phrase: &str) -> Vec<&str> {
    phrase.split_whitespace().collect()
}

#[test]
fn test_23_known_words() {
    let known = words(KNOWN_23);
    let candidates = final_word_candidates(&known, Language::English).unwrap();
    assert_eq!(
        candidates,
        vec!["across", "cancel", "floor", "illegal", "onion", "quit", "story", "unfold"]
    );
}

#[test]
fn test_17_known_words() {
    let known = words(KNOWN_17);
    let candidates = final_word_candidates(&known, Language::English).unwrap();
    assert_eq!(candidates.len(), 32);
    assert_eq!(candidates.first(), Some(&"absurd"));
    assert_eq!(candidates.last(), Some(&"will"));
    assert!(candidates.contains(&"quantum"));
}

#[test]
fn test_every_candidate_validates() {
    let mut known = words(KNOWN_11);
    let candidates = final_word_candidates(&known, Language::English).unwrap();
    assert_eq!(candidates.len(), 128);
    for last in candidates {
        known.push(last);
        assert_eq!(
            validate_mnemonic(&known, Language::English, false),
            ValidateResult::Valid
        );
        known.pop();
    }
}

#[test]
fn test_fast_path_matches_brute_force() {
    for phrase in [KNOWN_23, KNOWN_17, KNOWN_11] {
        let known = words(phrase);
        assert_eq!(
            final_word_candidates(&known, Language::English).unwrap(),
            final_word_candidates_brute_force(&known, Language::English).unwrap()
        );
    }
}

#[test]
fn test_fast_path_matches_brute_force_other_languages() {
    for language in [Language::Japanese, Language::Czech, Language::ChineseTraditional] {
        let known: Vec<&str> = (0..14u16)
            .map(|i| word_at(i * 97 + 5, language).unwrap())
            .collect();
        let fast = final_word_candidates(&known, language).unwrap();
        assert_eq!(fast.len(), expected_candidate_count(14).unwrap());
        assert_eq!(fast, final_word_candidates_brute_force(&known, language).unwrap());
    }
}

#[test]
fn test_rejects_complete_mnemonic() {
    let mut known = words(KNOWN_23);
    known.push("unfold");
    assert!(matches!(
        final_word_candidates(&known, Language::English),
        Err(Error::InvalidWordCount { count: 24, .. })
    ));
}

#[test]
fn test_coin_flips_recover_published_word() {
    let known = words(KNOWN_11);
    let candidates = final_word_candidates(&known, Language::English).unwrap();
    assert_eq!(required_coin_flips(candidates.len()).unwrap(), 7);

    // "borrow" is candidate 13 = 0b0001101, heads selecting the upper half
    let flips = CoinFlip::parse_sequence("TTTHHTH").unwrap();
    assert_eq!(*reduce_with_coin_flips(&candidates, flips).unwrap(), "borrow");
}

#[test]
fn test_coin_flips_extremes() {
    let known = words(KNOWN_23);
    let candidates = final_word_candidates(&known, Language::English).unwrap();
    use CoinFlip::*;
    assert_eq!(*reduce_with_coin_flips(&candidates, [Heads; 3]).unwrap(), "unfold");
    assert_eq!(*reduce_with_coin_flips(&candidates, [Tails; 3]).unwrap(), "across");
    assert_eq!(*reduce_with_coin_flips(&candidates, [Heads, Tails, Heads]).unwrap(), "quit");
}
