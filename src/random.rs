//! Random source injection for the password envelope.
//!
//! Defines the interface for byte-level randomness consumed by
//! [`PasswordEnvelope`](crate::PasswordEnvelope) (salt and IV generation).
//! The library never reaches for a process-global generator; callers inject
//! a source, and tests inject deterministic ones.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::BlowcryptError;

/// Trait for sources of random bytes.
///
/// Implementations fill the destination completely or fail; partial fills
/// are not part of the contract.
pub trait RandomSource {
    /// Fills `dest` with random bytes.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::RandomSourceFailure`] if the underlying
    /// source cannot produce bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), BlowcryptError>;
}

/// Random source backed by the operating system generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), BlowcryptError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|_| BlowcryptError::RandomSourceFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills() {
        let mut buf = [0u8; 64];
        OsRandom.fill(&mut buf).unwrap();
        // 64 zero bytes from the OS generator would be a broken source.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_trait_object_usable() {
        let mut source: Box<dyn RandomSource> = Box::new(OsRandom);
        let mut buf = [0u8; 8];
        assert!(source.fill(&mut buf).is_ok());
    }
}
