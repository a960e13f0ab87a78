//! 32-bit seeded MurmurHash2 variant shared with the filter producer.
//!
//! Arithmetic is done on `u32` with explicit wrapping; the seed and the result
//! are reinterpreted as `i32` at the boundaries only.

use crate::consts::{MURMUR_M, MURMUR_R};

pub fn murmur_hash32(data: &[u8], seed: i32) -> i32 {
    let mut h = (seed as u32) ^ (data.len() as u32);

    let mut words = data.chunks_exact(4);
    for w in &mut words {
        let mut k = u32::from_le_bytes([w[0], w[1], w[2], w[3]]);
        k = k.wrapping_mul(MURMUR_M);
        k ^= k >> MURMUR_R;
        k = k.wrapping_mul(MURMUR_M);

        h = h.wrapping_mul(MURMUR_M);
        h ^= k;
    }

    // fallthrough: xor the tail high-to-low, multiply once
    let tail = words.remainder();
    if tail.len() >= 3 { h ^= (tail[2] as u32) << 16; }
    if tail.len() >= 2 { h ^= (tail[1] as u32) << 8; }
    if !tail.is_empty() {
        h ^= tail[0] as u32;
        h = h.wrapping_mul(MURMUR_M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(MURMUR_M);
    h ^= h >> 15;

    h as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HASH_SEED;

    #[test]
    fn golden_vectors_seed_42() {
        let cases: &[(&[u8], i32)] = &[
            (b"", 275_804_818),
            (b"a", 1_148_686_264),
            (b"ab", -439_107_764),
            (b"abc", -636_677_120),
            (b"abcd", 2_000_215_727),
            (b"hello", 2_013_460_684),
            (b"world", 569_630_221),
            (b"goodbye", 470_384_453),
        ];
        for (data, want) in cases {
            assert_eq!(murmur_hash32(data, HASH_SEED), *want, "input {:?}", data);
        }
    }

    #[test]
    fn empty_input_bit_pattern() {
        assert_eq!(murmur_hash32(b"", HASH_SEED) as u32, 0x1070_7292);
    }

    #[test]
    fn chained_seed_matches_reference() {
        // second hash is seeded with the first one, negative seeds included
        let h1 = murmur_hash32(b"a", HASH_SEED);
        assert_eq!(murmur_hash32(b"a", h1), -1_704_246_938);
        let h1 = murmur_hash32(b"hello", HASH_SEED);
        assert_eq!(murmur_hash32(b"hello", h1), 2_142_464_909);
        let h1 = murmur_hash32(b"goodbye", HASH_SEED);
        assert_eq!(murmur_hash32(b"goodbye", h1), -1_017_649_408);
    }

    #[test]
    fn seed_changes_output() {
        assert_ne!(murmur_hash32(b"hello", 0), murmur_hash32(b"hello", HASH_SEED));
        assert_ne!(murmur_hash32(b"hello", -1), murmur_hash32(b"hello", 1));
    }
}
