//! Entropy sources: dice rolls and hex strings.
//!
//! [`EntropyAccumulator`] collects bits from physical dice most-significant
//! bit first. Each call consumes one roll event (one die, or a pair for the
//! two-dice methods) and reports how many bits it added, so callers can
//! re-prompt on discarded rolls without keeping any state of their own.

// Allow unused_assignments - the ZeroizeOnDrop derive macro generates code that clippy
// incorrectly flags as unused assignments when it reads/writes struct fields for zeroization
#![allow(unused_assignments)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::bits::Bits256;
use crate::core::constants::words_for_entropy_bits;
use crate::error::{Error, Result};

/// Bits yielded by one parallel (two-dice, base-6) roll.
const PARALLEL_BITS: usize = 5;

/// How dice rolls are turned into bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiceMethod {
    /// One die, 2 bits per roll of 1 to 4; 5 and 6 are re-rolled.
    #[default]
    Simple,
    /// Two dice read as a base-6 number, 5 bits when the value is below 32.
    Parallel,
    /// Von Neumann extractor over pairs of rolls, 1 bit per unequal pair.
    /// Removes bias from a loaded die.
    Extractor,
}

impl DiceMethod {
    pub const ALL: [DiceMethod; 3] = [
        DiceMethod::Simple,
        DiceMethod::Parallel,
        DiceMethod::Extractor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DiceMethod::Simple => "simple",
            DiceMethod::Parallel => "parallel",
            DiceMethod::Extractor => "extractor",
        }
    }

    /// Dice values consumed per roll event.
    pub fn dice_per_event(self) -> usize {
        match self {
            DiceMethod::Simple => 1,
            DiceMethod::Parallel | DiceMethod::Extractor => 2,
        }
    }
}

impl fmt::Display for DiceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiceMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        DiceMethod::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| Error::config(format!("unknown dice method '{}'", s)))
    }
}

/// Accumulates entropy bits from dice, filling from the most-significant end.
///
/// The buffer is scrubbed when the accumulator is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EntropyAccumulator {
    bits: Bits256,
    total: usize,
    generated: usize,
    rolls: usize,
}

impl fmt::Debug for EntropyAccumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntropyAccumulator")
            .field("total", &self.total)
            .field("generated", &self.generated)
            .field("rolls", &self.rolls)
            .finish_non_exhaustive()
    }
}

impl EntropyAccumulator {
    /// Start collecting `entropy_bits` bits (128, 160, 192, 224 or 256).
    pub fn new(entropy_bits: usize) -> Result<Self> {
        if words_for_entropy_bits(entropy_bits).is_none() {
            return Err(Error::UnsupportedEntropyBits(entropy_bits));
        }
        Ok(Self {
            bits: Bits256::zero(),
            total: entropy_bits,
            generated: 0,
            rolls: 0,
        })
    }

    pub fn total_bits(&self) -> usize {
        self.total
    }

    pub fn generated(&self) -> usize {
        self.generated
    }

    pub fn remaining(&self) -> usize {
        self.total - self.generated
    }

    pub fn is_complete(&self) -> bool {
        self.generated == self.total
    }

    /// Dice values read so far, including discarded ones.
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    /// Append one bit.
    pub fn push_bit(&mut self, bit: bool) -> Result<()> {
        self.ensure_room(1)?;
        let index = self.total - self.generated - 1;
        self.bits.set_bit(index, bit);
        self.generated += 1;
        Ok(())
    }

    /// Append the low `count` bits of `value`, most-significant first.
    pub fn push_bits(&mut self, value: u64, count: usize) -> Result<()> {
        assert!(count <= 64, "at most 64 bits per push");
        self.ensure_room(count)?;
        for i in (0..count).rev() {
            self.push_bit((value >> i) & 1 == 1)?;
        }
        Ok(())
    }

    /// One die: 1 to 4 add two bits (`roll - 1`), 5 and 6 add nothing.
    ///
    /// Returns the number of bits added.
    pub fn push_simple_roll(&mut self, roll: u8) -> Result<usize> {
        check_roll(roll)?;
        self.ensure_room(1)?;
        self.rolls += 1;
        if roll > 4 {
            debug!(rolls = self.rolls, "Discarded simple roll");
            return Ok(0);
        }
        self.push_bits((roll - 1) as u64, 2)?;
        Ok(2)
    }

    /// Two dice read as `(left - 1) * 6 + (right - 1)`.
    ///
    /// Values of 32 or more are discarded. Otherwise up to five bits are
    /// added, bit `b` of the value going to the `b`-th next position; near the
    /// end only as many bits as remain are used.
    pub fn push_parallel_roll(&mut self, left: u8, right: u8) -> Result<usize> {
        check_roll(left)?;
        check_roll(right)?;
        self.ensure_room(1)?;
        self.rolls += 2;

        let value = (left as u64 - 1) * 6 + (right as u64 - 1);
        if value >= 32 {
            debug!(rolls = self.rolls, "Discarded parallel roll");
            return Ok(0);
        }

        let count = PARALLEL_BITS.min(self.remaining());
        for b in 0..count {
            self.push_bit((value >> b) & 1 == 1)?;
        }
        Ok(count)
    }

    /// Two rolls of the same die: equal rolls are discarded, otherwise one
    /// bit, 0 when `first < second` and 1 when `first > second`.
    pub fn push_extractor_rolls(&mut self, first: u8, second: u8) -> Result<usize> {
        check_roll(first)?;
        check_roll(second)?;
        self.ensure_room(1)?;
        self.rolls += 2;

        if first == second {
            return Ok(0);
        }
        self.push_bit(first > second)?;
        Ok(1)
    }

    /// Feed a run of dice values until the entropy is complete.
    ///
    /// Values are grouped per [`DiceMethod::dice_per_event`]; a trailing
    /// incomplete group is ignored. Returns the number of dice values used.
    pub fn push_rolls(&mut self, method: DiceMethod, dice: &[u8]) -> Result<usize> {
        let mut used = 0;
        for event in dice.chunks_exact(method.dice_per_event()) {
            if self.is_complete() {
                break;
            }
            match (method, event) {
                (DiceMethod::Simple, [roll]) => self.push_simple_roll(*roll)?,
                (DiceMethod::Parallel, [left, right]) => self.push_parallel_roll(*left, *right)?,
                (DiceMethod::Extractor, [first, second]) => {
                    self.push_extractor_rolls(*first, *second)?
                }
                _ => 0,
            };
            used += event.len();
        }
        debug!(
            %method,
            used,
            generated = self.generated,
            total = self.total,
            "Consumed dice rolls"
        );
        Ok(used)
    }

    /// The collected entropy. Fails until every bit has been supplied.
    pub fn finish(&self) -> Result<Zeroizing<Bits256>> {
        if !self.is_complete() {
            return Err(Error::EntropyIncomplete {
                generated: self.generated,
                total: self.total,
            });
        }
        Ok(Zeroizing::new(self.bits.clone()))
    }

    fn ensure_room(&self, requested: usize) -> Result<()> {
        if requested > self.remaining() {
            return Err(Error::EntropyOverflow {
                requested,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }
}

fn check_roll(roll: u8) -> Result<()> {
    if !(1..=6).contains(&roll) {
        return Err(Error::InvalidDiceRoll(roll));
    }
    Ok(())
}

/// Parse big-endian entropy hex.
///
/// The width is four bits per digit and must be 128, 160, 192, 224 or 256.
/// An optional `0x` prefix is accepted.
pub fn entropy_from_hex(hex_str: &str) -> Result<(Zeroizing<Bits256>, usize)> {
    let trimmed = hex_str.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let entropy_bits = digits.len() * 4;
    if words_for_entropy_bits(entropy_bits).is_none() {
        return Err(Error::UnsupportedEntropyBits(entropy_bits));
    }
    Ok((Zeroizing::new(Bits256::from_hex(digits)?), entropy_bits))
}

/// Lower-case hex of the low `entropy_bits` bits, two digits per byte.
pub fn entropy_to_hex(entropy: &Bits256, entropy_bits: usize) -> Zeroizing<String> {
    let bytes = entropy.to_be_bytes(entropy_bits.div_ceil(8));
    Zeroizing::new(hex::encode(bytes.as_slice()))
}
