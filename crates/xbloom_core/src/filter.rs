//! Read-only Bloom filter and its membership test.
//!
//! Probe positions use double hashing over two chained [`murmur_hash32`] calls:
//! `h1 = H(data, 42)`, `h2 = H(data, h1)`, probe `i` is `|h1 + i*h2| mod m`
//! with the sum wrapping in 32 bits before it is widened.

use crate::consts::HASH_SEED;
use crate::errors::{BloomError, DegenerateReason, FormatError, Result};
use crate::header::FilterHeader;
use crate::murmur::murmur_hash32;
use crate::utils::get_bit;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct BloomFilter {
    header: FilterHeader,
    bits: Box<[u8]>,
}

impl BloomFilter {
    /// Assemble a filter from a parsed header and its payload.
    /// Payload bytes past `header.payload_len()` are dropped.
    pub fn from_parts(header: FilterHeader, mut bits: Vec<u8>) -> Result<Self> {
        let expected = header.payload_len();
        let available = bits.len() as u64;
        if available < expected {
            return Err(FormatError::TruncatedPayload { expected, available }.into());
        }
        bits.truncate(expected as usize);
        Ok(Self { header, bits: bits.into_boxed_slice() })
    }

    pub fn header(&self) -> &FilterHeader { &self.header }
    pub fn entries(&self) -> u64 { self.header.entries }
    pub fn bit_count(&self) -> u64 { self.header.bit_count }
    pub fn hash_rounds(&self) -> u32 { self.header.hash_rounds }
    pub fn as_bytes(&self) -> &[u8] { &self.bits }

    /// False when queries can only ever answer "absent".
    pub fn is_queryable(&self) -> bool {
        self.header.bit_count != 0 && self.header.hash_rounds != 0 && !self.bits.is_empty()
    }

    pub fn ensure_queryable(&self) -> Result<()> {
        if self.header.bit_count == 0 || self.bits.is_empty() {
            return Err(BloomError::Degenerate(DegenerateReason::ZeroBitCount));
        }
        if self.header.hash_rounds == 0 {
            return Err(BloomError::Degenerate(DegenerateReason::ZeroHashRounds));
        }
        Ok(())
    }

    /// State of bit `index`; out-of-range indices read as unset.
    pub fn bit(&self, index: u64) -> bool {
        index < self.header.bit_count && get_bit(&self.bits, index)
    }

    /// Probe positions for `data`, in round order. Empty for a zero-bit filter.
    pub fn bit_indices(&self, data: &[u8]) -> impl Iterator<Item = u64> {
        let m = self.header.bit_count;
        let k = if m == 0 { 0 } else { self.header.hash_rounds };
        let h1 = murmur_hash32(data, HASH_SEED);
        let h2 = murmur_hash32(data, h1);
        (0..k).map(move |i| bit_index(h1, h2, i, m))
    }

    /// Probabilistic membership: `false` is definite, `true` may be a false positive.
    pub fn contains(&self, data: &[u8]) -> bool {
        if !self.is_queryable() {
            return false;
        }
        self.bit_indices(data).all(|i| get_bit(&self.bits, i))
    }

    pub fn contains_str(&self, s: &str) -> bool { self.contains(s.as_bytes()) }
}

impl fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("entries", &self.header.entries)
            .field("hash_rounds", &self.header.hash_rounds)
            .field("bit_count", &self.header.bit_count)
            .field("bytes", &self.bits.len())
            .finish()
    }
}

/// Bit position probed in `round`.
///
/// `h1 + round*h2` wraps in `u32`, is read back as `i32`, then widened to `i64`
/// before taking the absolute value so `i32::MIN` maps to `2^31`.
///
/// # Panics
///
/// Panics if `bit_count` is zero. [`BloomFilter::bit_indices`] never calls it
/// for a zero-bit filter.
#[inline]
pub fn bit_index(h1: i32, h2: i32, round: u32, bit_count: u64) -> u64 {
    let combined = (h1 as u32).wrapping_add(round.wrapping_mul(h2 as u32)) as i32;
    (combined as i64).unsigned_abs() % bit_count
}
