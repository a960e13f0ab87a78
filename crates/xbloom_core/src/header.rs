//! Fixed 20-byte filter header.
//!
//! Layout (BE):
//!   entries[8]     = advisory element count
//!   hash_rounds[4] = probes per query
//!   bit_count[8]   = number of valid bits in the payload
//!
//! The payload follows immediately: `ceil(bit_count / 8)` bytes, LSB-first.

use crate::consts::HEADER_SIZE;
use crate::errors::{FormatError, Result};
use crate::utils::{bytes_for_bits, read_full, read_u32, read_u64};
use std::io::Read;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterHeader {
    pub entries: u64,
    pub hash_rounds: u32,
    pub bit_count: u64,
}

impl FilterHeader {
    /// Parse the header from the front of `data`. Bytes past the header are not inspected.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(FormatError::TruncatedHeader { available: data.len() }.into());
        }
        let mut cur = &data[..HEADER_SIZE];
        let entries = read_u64(&mut cur)?;
        let hash_rounds = read_u32(&mut cur)?;
        let bit_count = read_u64(&mut cur)?;
        let hdr = Self { entries, hash_rounds, bit_count };
        tracing::debug!(?hdr, "parsed filter header");
        Ok(hdr)
    }

    /// Read exactly one header from `r`, leaving it positioned at the payload.
    pub fn read_from<R: Read>(r: &mut R) -> Result<Self> {
        let mut buf = [0u8; HEADER_SIZE];
        let n = read_full(r, &mut buf)?;
        Self::parse(&buf[..n])
    }

    /// Payload size in bytes declared by this header.
    pub fn payload_len(&self) -> u64 { bytes_for_bits(self.bit_count) }

    /// Header size plus payload size.
    pub fn total_len(&self) -> u64 { HEADER_SIZE as u64 + self.payload_len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BloomError;

    fn raw(entries: u64, rounds: u32, bits: u64) -> Vec<u8> {
        let mut v = Vec::with_capacity(HEADER_SIZE);
        v.extend_from_slice(&entries.to_be_bytes());
        v.extend_from_slice(&rounds.to_be_bytes());
        v.extend_from_slice(&bits.to_be_bytes());
        v
    }

    #[test]
    fn parses_big_endian_fields_in_order() {
        let hdr = FilterHeader::parse(&raw(100, 7, 959)).unwrap();
        assert_eq!(hdr, FilterHeader { entries: 100, hash_rounds: 7, bit_count: 959 });
        assert_eq!(hdr.payload_len(), 120);
        assert_eq!(hdr.total_len(), 140);
    }

    #[test]
    fn short_header_reports_available_bytes() {
        let data = raw(1, 2, 3);
        for cut in [0usize, 1, 8, 12, 19] {
            match FilterHeader::parse(&data[..cut]) {
                Err(BloomError::Format(FormatError::TruncatedHeader { available })) => {
                    assert_eq!(available, cut)
                }
                other => panic!("cut={cut}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn reader_stops_after_header() {
        let mut data = raw(5, 3, 16);
        data.extend_from_slice(&[0xaa, 0xbb]);
        let mut cur = &data[..];
        let hdr = FilterHeader::read_from(&mut cur).unwrap();
        assert_eq!(hdr.bit_count, 16);
        assert_eq!(cur, &[0xaa, 0xbb]);
    }
}
