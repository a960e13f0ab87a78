use byteorder::{BigEndian as BE, ReadBytesExt};
use std::io::{self, Read};

pub fn read_u64<R: Read>(r: &mut R) -> io::Result<u64> { r.read_u64::<BE>() }
pub fn read_u32<R: Read>(r: &mut R) -> io::Result<u32> { r.read_u32::<BE>() }

/// Bytes needed to hold `bit_count` bits.
#[inline]
pub fn bytes_for_bits(bit_count: u64) -> u64 {
    bit_count / 8 + u64::from(bit_count % 8 != 0)
}

/// LSB-first: bit `i` lives in byte `i >> 3` under mask `1 << (i & 7)`.
#[inline]
pub(crate) fn get_bit(bits: &[u8], index: u64) -> bool {
    (bits[(index >> 3) as usize] >> (index & 7)) & 1 != 0
}

/// Read until `buf` is full or the source is exhausted; returns the count read.
pub fn read_full<R: Read>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
