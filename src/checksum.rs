//! Checksum derivation and the entropy ⇄ full-bits transform.
//!
//! BIP-39 appends `ENT / 32` checksum bits, taken from the most-significant
//! end of `SHA-256(entropy)`, to the entropy. The concatenation ("full bits")
//! is what gets cut into 11-bit word indices. All packing here is
//! most-significant-bit first: the entropy occupies the high bits of the
//! full-bit value and the checksum the low bits.

// Allow unused_assignments - the ZeroizeOnDrop derive macro generates code that clippy
// incorrectly flags as unused assignments when it reads/writes struct fields for zeroization
#![allow(unused_assignments)]

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::bits::{Bits256, Bits512};
use crate::core::constants::{
    checksum_bits_for_entropy, words_for_entropy_bits, BITS_PER_WORD, SUPPORTED_ENTROPY_BITS,
    WORD_MASK,
};
use crate::error::{Error, Result};

/// How checksum bits are produced when entropy is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumMode {
    /// BIP-39 checksum from SHA-256 of the entropy.
    #[default]
    Standard,
    /// All checksum bits forced to zero.
    ///
    /// This deliberately produces non-compliant mnemonics for wallets that
    /// expect an all-zero checksum while keeping the same entropy.
    Cleared,
}

/// Entropy followed by its checksum bits, right-aligned in a 512-bit container.
///
/// Scrubbed when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FullBits {
    bits: Bits512,
    len: usize,
}

impl FullBits {
    /// Wrap `len` bits. Bits at or above `len` are cleared.
    ///
    /// # Panics
    /// Panics if `len` exceeds the container width.
    pub fn new(mut bits: Bits512, len: usize) -> Self {
        assert!(len <= Bits512::BITS, "{} bits exceed the 512-bit container", len);
        bits.truncate(len);
        Self { bits, len }
    }

    pub fn bits(&self) -> &Bits512 {
        &self.bits
    }

    /// Number of meaningful bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of whole 11-bit words held.
    pub fn word_count(&self) -> usize {
        self.len / BITS_PER_WORD
    }

    /// Index of word `position` counting from the most-significant end.
    ///
    /// # Panics
    /// Panics if `position >= self.word_count()`.
    pub fn word_index(&self, position: usize) -> u16 {
        assert!(position < self.word_count(), "word {} out of range", position);
        let shift = self.len - BITS_PER_WORD * (position + 1);
        let chunk = Zeroizing::new(self.bits.clone() >> shift);
        (chunk.low_u64() & WORD_MASK) as u16
    }
}

impl std::fmt::Debug for FullBits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullBits").field("len", &self.len).finish_non_exhaustive()
    }
}

/// Full bits split back into entropy and checksum.
///
/// Scrubbed when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SplitBits {
    entropy: Bits256,
    entropy_bits: usize,
    checksum: u8,
    checksum_bits: usize,
}

impl SplitBits {
    pub fn entropy(&self) -> &Bits256 {
        &self.entropy
    }

    pub fn entropy_bits(&self) -> usize {
        self.entropy_bits
    }

    /// The embedded checksum, right-aligned.
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    pub fn checksum_bits(&self) -> usize {
        self.checksum_bits
    }
}

impl std::fmt::Debug for SplitBits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitBits")
            .field("entropy_bits", &self.entropy_bits)
            .field("checksum_bits", &self.checksum_bits)
            .finish_non_exhaustive()
    }
}

/// Checksum width for a supported entropy width.
pub fn checksum_bits_for(entropy_bits: usize) -> Result<usize> {
    words_for_entropy_bits(entropy_bits)
        .map(|_| checksum_bits_for_entropy(entropy_bits))
        .ok_or(Error::UnsupportedEntropyBits(entropy_bits))
}

/// The BIP-39 checksum of the low `entropy_bits` bits of `entropy`,
/// right-aligned.
pub fn compute_checksum(entropy: &Bits256, entropy_bits: usize) -> Result<u8> {
    let checksum_bits = checksum_bits_for(entropy_bits)?;
    let bytes = entropy.to_be_bytes(entropy_bits / 8);

    let mut digest: [u8; 32] = Sha256::digest(bytes.as_slice()).into();
    let checksum = digest[0] >> (8 - checksum_bits);
    digest.zeroize();

    Ok(checksum)
}

/// Append checksum bits to entropy.
///
/// Only the low `entropy_bits` bits of `entropy` are used. With
/// [`ChecksumMode::Cleared`] the checksum bits are zero instead of derived.
pub fn derive_full_bits(
    entropy: &Bits256,
    entropy_bits: usize,
    mode: ChecksumMode,
) -> Result<FullBits> {
    let checksum_bits = checksum_bits_for(entropy_bits)?;
    let entropy = Zeroizing::new(entropy.masked(entropy_bits));

    let checksum = match mode {
        ChecksumMode::Standard => compute_checksum(&entropy, entropy_bits)?,
        ChecksumMode::Cleared => 0,
    };

    let mut bits: Bits512 = entropy.resize();
    bits <<= checksum_bits;
    bits |= Bits512::from_u64(checksum as u64);

    debug!(entropy_bits, checksum_bits, ?mode, "Derived full bits");
    Ok(FullBits::new(bits, entropy_bits + checksum_bits))
}

/// Split full bits into entropy and checksum.
///
/// Fails unless the length is that of a 12, 15, 18, 21 or 24 word mnemonic.
pub fn split_full_bits(full: &FullBits) -> Result<SplitBits> {
    let entropy_bits = SUPPORTED_ENTROPY_BITS
        .iter()
        .copied()
        .find(|bits| bits + checksum_bits_for_entropy(*bits) == full.len())
        .ok_or(Error::InvalidFullBitCount(full.len()))?;
    let checksum_bits = checksum_bits_for_entropy(entropy_bits);

    let checksum = (full.bits().low_u64() & ((1u64 << checksum_bits) - 1)) as u8;
    let shifted = Zeroizing::new(full.bits().clone() >> checksum_bits);

    Ok(SplitBits {
        entropy: shifted.resize(),
        entropy_bits,
        checksum,
        checksum_bits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_entropy_checksum() {
        // SHA-256 of 16 zero bytes starts with 0x37
        let entropy = Bits256::zero();
        assert_eq!(compute_checksum(&entropy, 128).unwrap(), 0x3);
        // SHA-256 of 32 zero bytes starts with 0x66
        assert_eq!(compute_checksum(&entropy, 256).unwrap(), 0x66);
    }

    #[test]
    fn test_unsupported_width() {
        let entropy = Bits256::zero();
        assert!(matches!(
            derive_full_bits(&entropy, 100, ChecksumMode::Standard),
            Err(Error::UnsupportedEntropyBits(100))
        ));
        assert!(compute_checksum(&entropy, 64).is_err());
    }

    #[test]
    fn test_full_bits_layout() {
        let entropy = Bits256::zero();
        let full = derive_full_bits(&entropy, 128, ChecksumMode::Standard).unwrap();
        assert_eq!(full.len(), 132);
        assert_eq!(full.word_count(), 12);
        assert_eq!(full.bits().low_u64(), 0x3);
        assert_eq!(full.word_index(0), 0);
        assert_eq!(full.word_index(11), 3);
    }

    #[test]
    fn test_cleared_checksum_keeps_entropy() {
        let entropy = Bits256::from_hex("7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f").unwrap();
        let standard = derive_full_bits(&entropy, 128, ChecksumMode::Standard).unwrap();
        let cleared = derive_full_bits(&entropy, 128, ChecksumMode::Cleared).unwrap();

        assert_eq!(cleared.bits().low_u64() & 0xf, 0);
        let a = split_full_bits(&standard).unwrap();
        let b = split_full_bits(&cleared).unwrap();
        assert_eq!(a.entropy(), b.entropy());
        assert_eq!(b.checksum(), 0);
    }

    #[test]
    fn test_split_roundtrip_mixed_pattern() {
        let hex = "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c";
        let entropy = Bits256::from_hex(hex).unwrap();
        let full = derive_full_bits(&entropy, 256, ChecksumMode::Standard).unwrap();
        assert_eq!(full.len(), 264);

        let split = split_full_bits(&full).unwrap();
        assert_eq!(split.entropy(), &entropy);
        assert_eq!(split.entropy_bits(), 256);
        assert_eq!(split.checksum_bits(), 8);
        assert_eq!(split.checksum(), compute_checksum(&entropy, 256).unwrap());
    }

    #[test]
    fn test_high_bits_above_width_are_ignored() {
        let dirty = Bits256::from_hex(&format!("{}{}", "ff".repeat(16), "00".repeat(16))).unwrap();
        let full = derive_full_bits(&dirty, 128, ChecksumMode::Standard).unwrap();
        let clean = derive_full_bits(&Bits256::zero(), 128, ChecksumMode::Standard).unwrap();
        assert_eq!(full, clean);
    }

    #[test]
    fn test_split_rejects_bad_length() {
        let full = FullBits::new(Bits512::zero(), 133);
        assert!(matches!(
            split_full_bits(&full),
            Err(Error::InvalidFullBitCount(133))
        ));
    }

    #[test]
    fn test_debug_redacts() {
        let full = derive_full_bits(&Bits256::zero(), 128, ChecksumMode::Standard).unwrap();
        assert_eq!(format!("{:?}", full), "FullBits { len: 132, .. }");
    }
}
