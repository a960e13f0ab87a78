//! Reader for Bloom filter files written by the cross-platform filter builder.
//!
//! ```no_run
//! use xbloom_core::BloomFilter;
//!
//! let bf = BloomFilter::load("filter.bf")?;
//! if bf.contains(b"hello") {
//!     println!("likely present");
//! }
//! # Ok::<(), xbloom_core::BloomError>(())
//! ```

pub mod consts;
pub mod errors;
pub mod utils;
pub mod header;
pub mod murmur;
pub mod filter;
pub mod loader;
pub mod stats;

pub use errors::{BloomError, DegenerateReason, ErrorKind, FormatError, Result};
pub use filter::{bit_index, BloomFilter};
pub use header::FilterHeader;
pub use murmur::murmur_hash32;
pub use stats::FilterStats;
