//! Core constants from the BIP-39 standard
//! These match the values published in BIP-0039 and SEC 2

/// Number of words in every BIP-39 dictionary
pub const NUM_WORDS: usize = 2048;

/// Bits encoded by a single mnemonic word (2^11 = 2048)
pub const BITS_PER_WORD: usize = 11;

/// Mask selecting the low `BITS_PER_WORD` bits of a value
pub const WORD_MASK: u64 = (1 << BITS_PER_WORD) - 1;

/// Compile-time assertion that the dictionary size matches the word width
#[allow(dead_code)]
const _: () = assert!(
    NUM_WORDS == 1 << BITS_PER_WORD,
    "NUM_WORDS must be exactly 2^BITS_PER_WORD"
);

/// Entropy bits per checksum bit (CS = ENT / 32)
pub const ENTROPY_BITS_PER_CHECKSUM_BIT: usize = 32;

/// Supported entropy widths in bits
pub const SUPPORTED_ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Supported mnemonic lengths in words
pub const SUPPORTED_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Maximum entropy width (24 words)
pub const MAX_ENTROPY_BITS: usize = 256;

/// Maximum number of words `raw_bits_from_words` will pack into a 512-bit container
pub const MAX_RAW_WORDS: usize = 46;

#[allow(dead_code)]
const _: () = assert!(MAX_RAW_WORDS * BITS_PER_WORD <= 512);

/// Order `n` of the secp256k1 group, big-endian hex
pub const SECP256K1_ORDER_HEX: &str =
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

/// Order `n` of the secp256k1 group as little-endian 64-bit limbs
pub const SECP256K1_ORDER_LIMBS: [u64; 4] = [
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// Given the number of words, how many bits of entropy they carry (checksum excluded).
/// Returns `None` for unsupported word counts.
pub const fn entropy_bits_for_words(num_words: usize) -> Option<usize> {
    match num_words {
        12 => Some(128),
        15 => Some(160),
        18 => Some(192),
        21 => Some(224),
        24 => Some(256),
        _ => None,
    }
}

/// Given an entropy width, how many words are needed to encode it.
/// Returns `None` for unsupported widths.
pub const fn words_for_entropy_bits(entropy_bits: usize) -> Option<usize> {
    match entropy_bits {
        128 => Some(12),
        160 => Some(15),
        192 => Some(18),
        224 => Some(21),
        256 => Some(24),
        _ => None,
    }
}

/// Number of checksum bits for a supported entropy width
pub const fn checksum_bits_for_entropy(entropy_bits: usize) -> usize {
    entropy_bits / ENTROPY_BITS_PER_CHECKSUM_BIT
}

/// Number of checksum bits carried by a mnemonic of `num_words` words
pub const fn checksum_bits_for_words(num_words: usize) -> Option<usize> {
    match entropy_bits_for_words(num_words) {
        Some(bits) => Some(checksum_bits_for_entropy(bits)),
        None => None,
    }
}

/// Whether `num_words` is a valid BIP-39 mnemonic length
pub const fn is_valid_word_count(num_words: usize) -> bool {
    entropy_bits_for_words(num_words).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_table_is_symmetric() {
        for (bits, words) in SUPPORTED_ENTROPY_BITS.iter().zip(SUPPORTED_WORD_COUNTS) {
            assert_eq!(entropy_bits_for_words(words), Some(*bits));
            assert_eq!(words_for_entropy_bits(*bits), Some(words));
            assert_eq!((bits + checksum_bits_for_entropy(*bits)) / BITS_PER_WORD, words);
        }
    }

    #[test]
    fn test_unsupported_counts() {
        assert_eq!(entropy_bits_for_words(13), None);
        assert_eq!(words_for_entropy_bits(129), None);
        assert!(!is_valid_word_count(0));
        assert!(!is_valid_word_count(23));
        assert!(is_valid_word_count(24));
    }

    #[test]
    fn test_order_limbs_match_hex() {
        let mut hex = String::new();
        for limb in SECP256K1_ORDER_LIMBS.iter().rev() {
            hex.push_str(&format!("{:016X}", limb));
        }
        assert_eq!(hex, SECP256K1_ORDER_HEX);
    }
}
