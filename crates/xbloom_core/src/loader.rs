//! Deserialization of filter images produced by the external builder.
//!
//! Every loader either returns a complete [`BloomFilter`] or an error; partial
//! buffers are dropped and files/mappings are closed on both paths.

use crate::consts::HEADER_SIZE;
use crate::errors::{BloomError, DegenerateReason, FormatError, Result};
use crate::filter::BloomFilter;
use crate::header::FilterHeader;
use crate::utils::read_full;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const MIB: f64 = 1024.0 * 1024.0;

/// Growth step when the payload size is only known from the header.
const READ_CHUNK: usize = 1 << 20;

/// Declared payload length. A zero-length payload is a malformed file.
fn checked_payload_len(header: &FilterHeader) -> Result<u64> {
    let bytes = header.payload_len();
    if bytes == 0 {
        return Err(BloomError::Degenerate(DegenerateReason::ZeroBitCount));
    }
    Ok(bytes)
}

fn ensure_available(expected: u64, available: u64) -> Result<()> {
    if available < expected {
        return Err(FormatError::TruncatedPayload { expected, available }.into());
    }
    Ok(())
}

fn reserve_payload(len: u64) -> Result<Vec<u8>> {
    let size = usize::try_from(len).map_err(|_| BloomError::Allocation { bytes: len })?;
    let mut bits = Vec::new();
    bits.try_reserve_exact(size)
        .map_err(|_| BloomError::Allocation { bytes: len })?;
    Ok(bits)
}

/// Read `len` payload bytes from a source of unknown size. Memory grows with the
/// bytes actually received, so a short stream is reported as truncated rather
/// than as an allocation failure.
fn read_payload<R: Read>(r: R, len: u64) -> Result<Vec<u8>> {
    let mut bits: Vec<u8> = Vec::new();
    let mut src = r.take(len);
    loop {
        let want = (len - bits.len() as u64).min(READ_CHUNK as u64) as usize;
        if want == 0 {
            break;
        }
        bits.try_reserve(want)
            .map_err(|_| BloomError::Allocation { bytes: len })?;
        let start = bits.len();
        bits.resize(start + want, 0);
        let n = read_full(&mut src, &mut bits[start..])?;
        bits.truncate(start + n);
        if n < want {
            break;
        }
    }
    ensure_available(len, bits.len() as u64)?;
    Ok(bits)
}

impl BloomFilter {
    /// Load a filter file from disk. The file size is checked against the
    /// header before any payload memory is reserved.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let res = File::open(path).map_err(BloomError::from).and_then(|f| {
            let file_len = f.metadata()?.len();
            let mut r = BufReader::new(f);
            let header = FilterHeader::read_from(&mut r)?;
            let len = checked_payload_len(&header)?;
            ensure_available(len, file_len.saturating_sub(HEADER_SIZE as u64))?;
            let mut bits = reserve_payload(len)?;
            let got = r.take(len).read_to_end(&mut bits)? as u64;
            // the file may have shrunk since metadata() was read
            ensure_available(len, got)?;
            Self::from_parts(header, bits)
        });
        log_outcome(path, &res);
        res
    }

    /// Stream a filter image out of `r`. Bytes after the payload are left unread.
    pub fn load_from_reader<R: Read>(mut r: R) -> Result<Self> {
        let header = FilterHeader::read_from(&mut r)?;
        let len = checked_payload_len(&header)?;
        let bits = read_payload(&mut r, len)?;
        Self::from_parts(header, bits)
    }

    /// Load from an in-memory image (header followed by payload).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let header = FilterHeader::parse(data)?;
        let len = checked_payload_len(&header)?;
        let body = &data[HEADER_SIZE..];
        ensure_available(len, body.len() as u64)?;
        let mut bits = reserve_payload(len)?;
        bits.extend_from_slice(&body[..len as usize]);
        Self::from_parts(header, bits)
    }

    /// Map the file and copy the payload out of the mapping.
    pub fn load_mapped(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let res = File::open(path).map_err(BloomError::from).and_then(|f| {
            // SAFETY: the mapping is read-only and dropped before returning; the
            // payload is copied into an owned buffer.
            let mmap = unsafe { Mmap::map(&f)? };
            Self::from_bytes(&mmap)
        });
        log_outcome(path, &res);
        res
    }
}

fn log_outcome(path: &Path, res: &Result<BloomFilter>) {
    match res {
        Ok(bf) => {
            let mib = bf.as_bytes().len() as f64 / MIB;
            tracing::info!(
                path = %path.display(),
                mib,
                hash_rounds = bf.hash_rounds(),
                bit_count = bf.bit_count(),
                "loaded bloom filter"
            )
        }
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to load bloom filter"),
    }
}
