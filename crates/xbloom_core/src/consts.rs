// crates/xbloom_core/src/consts.rs

/// Header: entries[8] + hash_rounds[4] + bit_count[8], big-endian.
pub const HEADER_SIZE: usize = 8 + 4 + 8;

/// Seed of the first hash call; the second call is seeded with its result.
pub const HASH_SEED: i32 = 42;

pub const MURMUR_M: u32 = 0x5bd1_e995;
pub const MURMUR_R: u32 = 24;

const _: () = { assert!(HEADER_SIZE == 20); };
