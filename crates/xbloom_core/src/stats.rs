use crate::filter::BloomFilter;
use serde::Serialize;
use std::fmt;

/// Summary of a loaded filter. The false positive estimate is the textbook
/// `(1 - e^(-k*n/m))^k` for the advertised entry count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterStats {
    pub entries: u64,
    pub bit_count: u64,
    pub hash_rounds: u32,
    pub size_bytes: u64,
    pub size_mib: f64,
    pub false_positive_rate: Option<f64>,
    pub bits_set: u64,
}

impl FilterStats {
    /// Fraction of the `bit_count` bits that are set.
    pub fn fill_ratio(&self) -> f64 {
        if self.bit_count == 0 { 0.0 } else { self.bits_set as f64 / self.bit_count as f64 }
    }
}

impl BloomFilter {
    pub fn stats(&self) -> FilterStats {
        let (m, n, k) = (self.bit_count(), self.entries(), self.hash_rounds());
        let false_positive_rate = (n != 0 && k != 0 && m != 0).then(|| {
            let k = k as f64;
            (1.0 - (-k * n as f64 / m as f64).exp()).powf(k)
        });
        FilterStats {
            entries: n,
            bit_count: m,
            hash_rounds: k,
            size_bytes: self.as_bytes().len() as u64,
            size_mib: (m as f64 / 8.0) / (1024.0 * 1024.0),
            false_positive_rate,
            bits_set: count_set_bits(self.as_bytes(), m),
        }
    }
}

fn count_set_bits(bits: &[u8], bit_count: u64) -> u64 {
    let full = (bit_count / 8) as usize;
    let mut total: u64 = bits[..full].iter().map(|b| b.count_ones() as u64).sum();
    let rem = bit_count % 8;
    if rem != 0 {
        let mask = (1u8 << rem) - 1;
        total += (bits[full] & mask).count_ones() as u64;
    }
    total
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bloom Filter Stats:")?;
        writeln!(f, "  Entries: {}", self.entries)?;
        writeln!(f, "  Bits: {} ({} set, {:.2}%)", self.bit_count, self.bits_set, self.fill_ratio() * 100.0)?;
        writeln!(f, "  Hashes (k): {}", self.hash_rounds)?;
        writeln!(f, "  Size: {:.2} MB", self.size_mib)?;
        match self.false_positive_rate {
            Some(p) => write!(f, "  Theoretical False Positive Rate: {:.4}%", p * 100.0),
            None => write!(f, "  Theoretical False Positive Rate: n/a"),
        }
    }
}
