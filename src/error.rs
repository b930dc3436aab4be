//! Error types for smacker.

use std::io;
use thiserror::Error;

/// Result type for smacker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for smacker operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while opening or reading the source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not start with a recognized Smacker signature.
    #[error(
        "Invalid Smacker signature: got \"{}\", want \"SMK2\" or \"SMK4\"",
        .0.escape_ascii()
    )]
    InvalidSignature([u8; 4]),

    /// The stream ended before a header field was fully read.
    #[error("Truncated header: stream ended inside `{field}` (field starts at offset {offset})")]
    Truncated { field: &'static str, offset: u64 },

    /// The declared frame count exceeds the configured ceiling.
    #[error("Frame count {frame_count} exceeds configured maximum {max}")]
    FrameCountLimit { frame_count: u32, max: u32 },
}

impl Error {
    /// Map an I/O error raised while reading `field` at `offset`.
    ///
    /// End-of-stream becomes [`Error::Truncated`]; everything else stays I/O.
    pub(crate) fn from_read(err: io::Error, field: &'static str, offset: u64) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Self::Truncated { field, offset }
        } else {
            Self::Io(err)
        }
    }

    /// Whether this error was caused by a short stream.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}
