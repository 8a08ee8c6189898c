//! Property-based tests for the codec round-trip laws

use bip39_tools::bits::Bits256;
use bip39_tools::checksum::{derive_full_bits, split_full_bits, ChecksumMode};
use bip39_tools::comply::make_compliant;
use bip39_tools::entropy::{entropy_from_hex, entropy_to_hex};
use bip39_tools::mnemonic::{entropy_from_words, entropy_to_words, words_to_full_bits};
use bip39_tools::solver::final_word_candidates;
use bip39_tools::validate::{validate_mnemonic, ValidateResult};
use bip39_tools::Language;
use proptest::prelude::*;

fn entropy_strategy() -> impl Strategy<Value = (Vec<u8>, usize)> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32]).prop_flat_map(|bytes| {
        (prop::collection::vec(any::<u8>(), bytes), Just(bytes * 8))
    })
}

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn to_bits((bytes, bits): &(Vec<u8>, usize)) -> Bits256 {
    let (entropy, parsed) = entropy_from_hex(&hex::encode(bytes)).unwrap();
    assert_eq!(parsed, *bits);
    (*entropy).clone()
}

proptest! {
    #[test]
    fn prop_words_roundtrip(input in entropy_strategy(), language in language_strategy()) {
        let entropy = to_bits(&input);
        let words = entropy_to_words(&entropy, input.1, language).unwrap();
        prop_assert_eq!(words.len(), input.1 * 33 / 32 / 11);

        let (decoded, bits) = entropy_from_words(&words, language).unwrap();
        prop_assert_eq!(bits, input.1);
        prop_assert_eq!(&*decoded, &entropy);
        prop_assert_eq!(
            validate_mnemonic(&words, language, false),
            ValidateResult::Valid
        );
    }

    #[test]
    fn prop_full_bits_split_roundtrip(input in entropy_strategy()) {
        let entropy = to_bits(&input);
        let full = derive_full_bits(&entropy, input.1, ChecksumMode::Standard).unwrap();
        let split = split_full_bits(&full).unwrap();
        prop_assert_eq!(split.entropy(), &entropy);
        prop_assert_eq!(split.entropy_bits(), input.1);

        let words = entropy_to_words(&entropy, input.1, Language::English).unwrap();
        prop_assert_eq!(words_to_full_bits(&words, Language::English).unwrap(), full);
    }

    #[test]
    fn prop_hex_roundtrip(input in entropy_strategy()) {
        let entropy = to_bits(&input);
        prop_assert_eq!(&*entropy_to_hex(&entropy, input.1), &hex::encode(&input.0));
    }

    #[test]
    fn prop_true_last_word_is_a_candidate(input in entropy_strategy()) {
        let entropy = to_bits(&input);
        let mut words = entropy_to_words(&entropy, input.1, Language::English).unwrap();
        let last = words.pop().unwrap();
        let candidates = final_word_candidates(&words, Language::English).unwrap();
        prop_assert!(candidates.contains(&last));
    }

    #[test]
    fn prop_comply_keeps_entropy(input in entropy_strategy(), last in 0usize..2048) {
        let entropy = to_bits(&input);
        let mut words = entropy_to_words(&entropy, input.1, Language::English).unwrap();
        let n = words.len();
        words[n - 1] = Language::English.word_list()[last];

        let fixed = make_compliant(&words, Language::English, ChecksumMode::Standard).unwrap();
        prop_assert_eq!(&fixed[..n - 1], &words[..n - 1]);
        prop_assert_eq!(
            validate_mnemonic(&fixed, Language::English, false),
            ValidateResult::Valid
        );
    }

    #[test]
    fn prop_single_word_change_is_detected_or_valid(
        input in entropy_strategy(),
        position in 0usize..24,
        replacement in 0usize..2048,
    ) {
        let entropy = to_bits(&input);
        let mut words = entropy_to_words(&entropy, input.1, Language::English).unwrap();
        let position = position % words.len();
        words[position] = Language::English.word_list()[replacement];

        let result = validate_mnemonic(&words, Language::English, false);
        prop_assert!(matches!(
            result,
            ValidateResult::Valid | ValidateResult::InvalidBip39Checksum
        ));
    }
}
