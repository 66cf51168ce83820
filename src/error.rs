//! Error types for the blowcrypt library.

use std::fmt;

/// Errors produced by the blowcrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlowcryptError {
    /// Key material is longer than [`MAX_KEY_LENGTH`](crate::MAX_KEY_LENGTH) bytes.
    BadKeyLength,
    /// Buffer length is not a multiple of [`BLOCK_SIZE`](crate::BLOCK_SIZE).
    Unaligned,
    /// Output buffer is too small for the requested operation.
    OutOfBounds,
    /// Operation attempted after the instance was invalidated.
    InstanceInvalidated,
    /// The embedded known-answer vectors did not reproduce.
    SelfTestFailed,
    /// The injected random source failed to produce bytes.
    RandomSourceFailure,
}

impl fmt::Display for BlowcryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlowcryptError::BadKeyLength => {
                write!(f, "Key material exceeds the 56-byte maximum")
            }
            BlowcryptError::Unaligned => {
                write!(f, "Buffer length is not a multiple of the 8-byte block size")
            }
            BlowcryptError::OutOfBounds => {
                write!(f, "Output buffer is too small for the operation")
            }
            BlowcryptError::InstanceInvalidated => {
                write!(f, "Instance has been invalidated")
            }
            BlowcryptError::SelfTestFailed => {
                write!(f, "Known-answer self-test failed")
            }
            BlowcryptError::RandomSourceFailure => {
                write!(f, "Random source failed to produce bytes")
            }
        }
    }
}

impl std::error::Error for BlowcryptError {}
