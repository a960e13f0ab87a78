use thiserror::Error;

#[derive(Debug, Error)]
pub enum BloomError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format: {0}")]
    Format(#[from] FormatError),

    #[error("Degenerate filter: {0}")]
    Degenerate(DegenerateReason),

    #[error("Out of memory for bit array ({bytes} bytes)")]
    Allocation { bytes: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("header truncated (read {available} of 20 bytes)")]
    TruncatedHeader { available: usize },

    #[error("bit array truncated (read {available} of {expected} bytes)")]
    TruncatedPayload { expected: u64, available: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DegenerateReason {
    #[error("bit count is zero")]
    ZeroBitCount,

    #[error("hash round count is zero")]
    ZeroHashRounds,
}

/// Coarse classification of a [`BloomError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Format,
    Degenerate,
    Allocation,
}

impl BloomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BloomError::Io(_) => ErrorKind::Io,
            BloomError::Format(_) => ErrorKind::Format,
            BloomError::Degenerate(_) => ErrorKind::Degenerate,
            BloomError::Allocation { .. } => ErrorKind::Allocation,
        }
    }
}

pub type Result<T> = std::result::Result<T, BloomError>;
