//! Fixed-width unsigned integers used to pack entropy, checksum and word bits.
//!
//! [`FixedBits`] is an owned value type backed by little-endian 64-bit limbs
//! (limb 0 holds the least-significant bits). Bit index 0 is the
//! least-significant bit. The public conversions to and from bytes and hex are
//! big-endian, which is the order every BIP-39 test vector is written in.
//!
//! Two widths are used throughout the crate:
//!
//! - [`Bits256`] holds raw entropy (up to 256 bits).
//! - [`Bits512`] holds entropy followed by checksum ("full bits", up to 264
//!   bits) or the packed bits of a partial mnemonic (up to 46 words).
//!
//! ## Secure erasure
//!
//! [`Zeroize`] is implemented as a multi-pass scrub: the limbs are overwritten
//! with two alternating bit patterns and a random pass before the final
//! volatile zeroing. Wrap values in [`zeroize::Zeroizing`] to have this run on
//! every exit path.

use std::cmp::Ordering;
use std::fmt;
use std::hint::black_box;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Shl, ShlAssign, Shr, ShrAssign};
use std::sync::atomic::{compiler_fence, Ordering as AtomicOrdering};

use rand::Rng;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};

/// Patterns written over the limbs before they are zeroed.
const SCRUB_PATTERNS: [u64; 2] = [0xAAAA_AAAA_AAAA_AAAA, 0x5555_5555_5555_5555];

/// Fixed-width unsigned integer of `LIMBS * 64` bits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedBits<const LIMBS: usize> {
    limbs: [u64; LIMBS],
}

/// 256-bit container used for entropy.
pub type Bits256 = FixedBits<4>;

/// 512-bit container used for entropy + checksum and raw word bits.
pub type Bits512 = FixedBits<8>;

impl<const LIMBS: usize> FixedBits<LIMBS> {
    /// Width of the container in bits.
    pub const BITS: usize = LIMBS * 64;

    /// Width of the container in bytes.
    pub const BYTES: usize = LIMBS * 8;

    pub const fn zero() -> Self {
        Self { limbs: [0; LIMBS] }
    }

    /// Build from little-endian limbs (limb 0 is least significant).
    pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
        Self { limbs }
    }

    pub fn from_u64(value: u64) -> Self {
        let mut out = Self::zero();
        if LIMBS > 0 {
            out.limbs[0] = value;
        }
        out
    }

    pub fn limbs(&self) -> &[u64; LIMBS] {
        &self.limbs
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// Set every bit to `value`.
    pub fn set_all(&mut self, value: bool) {
        let fill = if value { u64::MAX } else { 0 };
        self.limbs = [fill; LIMBS];
    }

    /// Read bit `index` (0 = least significant).
    ///
    /// # Panics
    /// Panics if `index >= Self::BITS`.
    pub fn bit(&self, index: usize) -> bool {
        assert!(index < Self::BITS, "bit index {} out of range", index);
        (self.limbs[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Write bit `index` (0 = least significant).
    ///
    /// # Panics
    /// Panics if `index >= Self::BITS`.
    pub fn set_bit(&mut self, index: usize, value: bool) {
        assert!(index < Self::BITS, "bit index {} out of range", index);
        let mask = 1u64 << (index % 64);
        if value {
            self.limbs[index / 64] |= mask;
        } else {
            self.limbs[index / 64] &= !mask;
        }
    }

    /// The least-significant 64 bits.
    pub fn low_u64(&self) -> u64 {
        self.limbs.first().copied().unwrap_or(0)
    }

    /// Copy keeping only the low `bits` bits.
    pub fn masked(&self, bits: usize) -> Self {
        let mut out = self.clone();
        out.truncate(bits);
        out
    }

    /// Clear every bit at or above position `bits`.
    pub fn truncate(&mut self, bits: usize) {
        if bits >= Self::BITS {
            return;
        }
        let full = bits / 64;
        let partial = bits % 64;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            if i > full || (i == full && partial == 0) {
                *limb = 0;
            } else if i == full {
                *limb &= (1u64 << partial) - 1;
            }
        }
    }

    /// Byte `index` counted from the least-significant end.
    pub fn byte(&self, index: usize) -> u8 {
        assert!(index < Self::BYTES, "byte index {} out of range", index);
        (self.limbs[index / 8] >> ((index % 8) * 8)) as u8
    }

    /// Number of significant bits (position of the highest set bit + 1).
    pub fn bit_len(&self) -> usize {
        for i in (0..LIMBS).rev() {
            if self.limbs[i] != 0 {
                return i * 64 + (64 - self.limbs[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// The low `num_bytes` bytes, most-significant byte first.
    ///
    /// The returned buffer is scrubbed when dropped.
    pub fn to_be_bytes(&self, num_bytes: usize) -> Zeroizing<Vec<u8>> {
        assert!(
            num_bytes <= Self::BYTES,
            "{} bytes requested from a {}-byte container",
            num_bytes,
            Self::BYTES
        );
        Zeroizing::new((0..num_bytes).rev().map(|i| self.byte(i)).collect())
    }

    /// Build from big-endian bytes. Fails if the bytes do not fit.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > Self::BYTES {
            return Err(Error::invalid_hex(format!(
                "{} bytes do not fit in {} bits",
                bytes.len(),
                Self::BITS
            )));
        }
        let mut out = Self::zero();
        for (k, &b) in bytes.iter().rev().enumerate() {
            out.limbs[k / 8] |= (b as u64) << ((k % 8) * 8);
        }
        Ok(out)
    }

    /// Parse a big-endian hex string. An optional `0x` prefix is accepted and
    /// case is ignored.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let trimmed = hex_str.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let padded = if digits.len() % 2 == 1 {
            Zeroizing::new(format!("0{}", digits))
        } else {
            Zeroizing::new(digits.to_string())
        };
        let bytes = Zeroizing::new(hex::decode(padded.as_str())?);
        Self::from_be_bytes(&bytes)
    }

    /// Full-width lower-case hex, most-significant digit first.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes(Self::BYTES).as_slice())
    }

    /// Zero-extend or truncate into a container of a different width.
    pub fn resize<const M: usize>(&self) -> FixedBits<M> {
        let mut out = FixedBits::<M>::zero();
        let n = LIMBS.min(M);
        out.limbs[..n].copy_from_slice(&self.limbs[..n]);
        out
    }
}

impl<const LIMBS: usize> Default for FixedBits<LIMBS> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const LIMBS: usize> From<u64> for FixedBits<LIMBS> {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl<const LIMBS: usize> fmt::Debug for FixedBits<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Contents may be key material
        f.debug_struct("FixedBits")
            .field("width", &Self::BITS)
            .finish_non_exhaustive()
    }
}

impl<const LIMBS: usize> Ord for FixedBits<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..LIMBS).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl<const LIMBS: usize> PartialOrd for FixedBits<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LIMBS: usize> ShlAssign<usize> for FixedBits<LIMBS> {
    fn shl_assign(&mut self, shift: usize) {
        if shift >= Self::BITS {
            self.limbs = [0; LIMBS];
            return;
        }
        let limb_shift = shift / 64;
        let bit_shift = shift % 64;
        for i in (0..LIMBS).rev() {
            let mut value = 0u64;
            if i >= limb_shift {
                let src = i - limb_shift;
                value = self.limbs[src] << bit_shift;
                if bit_shift > 0 && src > 0 {
                    value |= self.limbs[src - 1] >> (64 - bit_shift);
                }
            }
            self.limbs[i] = value;
        }
    }
}

impl<const LIMBS: usize> ShrAssign<usize> for FixedBits<LIMBS> {
    fn shr_assign(&mut self, shift: usize) {
        if shift >= Self::BITS {
            self.limbs = [0; LIMBS];
            return;
        }
        let limb_shift = shift / 64;
        let bit_shift = shift % 64;
        for i in 0..LIMBS {
            let src = i + limb_shift;
            let mut value = 0u64;
            if src < LIMBS {
                value = self.limbs[src] >> bit_shift;
                if bit_shift > 0 && src + 1 < LIMBS {
                    value |= self.limbs[src + 1] << (64 - bit_shift);
                }
            }
            self.limbs[i] = value;
        }
    }
}

impl<const LIMBS: usize> Shl<usize> for FixedBits<LIMBS> {
    type Output = Self;

    fn shl(mut self, shift: usize) -> Self {
        self <<= shift;
        self
    }
}

impl<const LIMBS: usize> Shr<usize> for FixedBits<LIMBS> {
    type Output = Self;

    fn shr(mut self, shift: usize) -> Self {
        self >>= shift;
        self
    }
}

impl<const LIMBS: usize> BitOrAssign<&FixedBits<LIMBS>> for FixedBits<LIMBS> {
    fn bitor_assign(&mut self, rhs: &Self) {
        for (l, r) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *l |= r;
        }
    }
}

impl<const LIMBS: usize> BitOrAssign for FixedBits<LIMBS> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self |= &rhs;
    }
}

impl<const LIMBS: usize> BitOr for FixedBits<LIMBS> {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= &rhs;
        self
    }
}

impl<const LIMBS: usize> BitAndAssign<&FixedBits<LIMBS>> for FixedBits<LIMBS> {
    fn bitand_assign(&mut self, rhs: &Self) {
        for (l, r) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *l &= r;
        }
    }
}

impl<const LIMBS: usize> BitAndAssign for FixedBits<LIMBS> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self &= &rhs;
    }
}

impl<const LIMBS: usize> BitAnd for FixedBits<LIMBS> {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        self &= &rhs;
        self
    }
}

impl<const LIMBS: usize> Zeroize for FixedBits<LIMBS> {
    fn zeroize(&mut self) {
        for pattern in SCRUB_PATTERNS {
            self.limbs = [pattern; LIMBS];
            black_box(&mut self.limbs);
        }

        let mut rng = rand::rng();
        for limb in self.limbs.iter_mut() {
            *limb = rng.random();
        }
        black_box(&mut self.limbs);
        compiler_fence(AtomicOrdering::SeqCst);

        self.limbs.zeroize();
    }
}

/// Overwrite entropy in place with several patterns, then zero.
pub fn clear_entropy(entropy: &mut Bits256) {
    entropy.zeroize();
}

/// Overwrite a 512-bit buffer in place with several patterns, then zero.
pub fn clear_bits(bits: &mut Bits512) {
    bits.zeroize();
}
