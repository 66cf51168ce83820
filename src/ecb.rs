//! Electronic Codebook mode.
//!
//! Each 8-byte block is encrypted independently; the mode carries no state
//! beyond the expanded key. Identical plaintext blocks produce identical
//! ciphertext blocks, so ECB is only appropriate for data that is already
//! unique per block (key wrapping, test harnesses).

use crate::blowfish::{Blowfish, BLOCK_SIZE};
use crate::error::BlowcryptError;

/// Stateless block-aligned Blowfish encryption.
///
/// # Examples
///
/// ```
/// use blowcrypt::EcbMode;
///
/// let ecb = EcbMode::new(b"TestKey").unwrap();
/// let plain = [0u8; 16];
/// let mut cipher = [0u8; 16];
/// ecb.encrypt(&plain, &mut cipher).unwrap();
///
/// let mut back = [0u8; 16];
/// ecb.decrypt(&cipher, &mut back).unwrap();
/// assert_eq!(back, plain);
/// ```
#[derive(Clone)]
pub struct EcbMode {
    engine: Blowfish,
}

impl EcbMode {
    /// Creates the mode and runs the key schedule.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::BadKeyLength`] if the key is longer than
    /// [`MAX_KEY_LENGTH`](crate::MAX_KEY_LENGTH).
    pub fn new(key: &[u8]) -> Result<Self, BlowcryptError> {
        Ok(EcbMode {
            engine: Blowfish::new(key)?,
        })
    }

    /// Re-runs the key schedule with new key material.
    pub fn rekey(&mut self, key: &[u8]) -> Result<(), BlowcryptError> {
        self.engine.rekey(key)
    }

    /// Encrypts `input` into `output`, returning the number of bytes written.
    ///
    /// # Errors
    /// - [`BlowcryptError::Unaligned`] if `input.len()` is not a multiple of 8.
    /// - [`BlowcryptError::OutOfBounds`] if `output` is shorter than `input`.
    /// - [`BlowcryptError::InstanceInvalidated`] after [`invalidate`](Self::invalidate).
    pub fn encrypt(&self, input: &[u8], output: &mut [u8]) -> Result<usize, BlowcryptError> {
        check_aligned(input, output)?;
        self.engine.ensure_valid()?;
        for (src, dst) in input
            .chunks_exact(BLOCK_SIZE)
            .zip(output.chunks_exact_mut(BLOCK_SIZE))
        {
            let mut block: [u8; BLOCK_SIZE] = src.try_into().unwrap();
            self.engine.encrypt_block_raw(&mut block);
            dst.copy_from_slice(&block);
        }
        Ok(input.len())
    }

    /// Decrypts `input` into `output`, returning the number of bytes written.
    ///
    /// # Errors
    /// Same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&self, input: &[u8], output: &mut [u8]) -> Result<usize, BlowcryptError> {
        check_aligned(input, output)?;
        self.engine.ensure_valid()?;
        for (src, dst) in input
            .chunks_exact(BLOCK_SIZE)
            .zip(output.chunks_exact_mut(BLOCK_SIZE))
        {
            let mut block: [u8; BLOCK_SIZE] = src.try_into().unwrap();
            self.engine.decrypt_block_raw(&mut block);
            dst.copy_from_slice(&block);
        }
        Ok(input.len())
    }

    /// Encrypts `data` in place.
    ///
    /// # Errors
    /// [`BlowcryptError::Unaligned`] on a length that is not a multiple of 8,
    /// [`BlowcryptError::InstanceInvalidated`] after invalidation.
    pub fn encrypt_in_place(&self, data: &mut [u8]) -> Result<usize, BlowcryptError> {
        if !data.len().is_multiple_of(BLOCK_SIZE) {
            return Err(BlowcryptError::Unaligned);
        }
        self.engine.ensure_valid()?;
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            let block: &mut [u8; BLOCK_SIZE] = chunk.try_into().unwrap();
            self.engine.encrypt_block_raw(block);
        }
        Ok(data.len())
    }

    /// Decrypts `data` in place.
    ///
    /// # Errors
    /// Same conditions as [`encrypt_in_place`](Self::encrypt_in_place).
    pub fn decrypt_in_place(&self, data: &mut [u8]) -> Result<usize, BlowcryptError> {
        if !data.len().is_multiple_of(BLOCK_SIZE) {
            return Err(BlowcryptError::Unaligned);
        }
        self.engine.ensure_valid()?;
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            let block: &mut [u8; BLOCK_SIZE] = chunk.try_into().unwrap();
            self.engine.decrypt_block_raw(block);
        }
        Ok(data.len())
    }

    /// See [`Blowfish::weak_key`].
    pub fn weak_key(&self) -> bool {
        self.engine.weak_key()
    }

    /// Zeroizes the expanded key and disables the instance.
    pub fn invalidate(&mut self) {
        self.engine.invalidate();
    }
}

/// Shared precondition check for the split-buffer operations.
pub(crate) fn check_aligned(input: &[u8], output: &[u8]) -> Result<(), BlowcryptError> {
    if !input.len().is_multiple_of(BLOCK_SIZE) {
        return Err(BlowcryptError::Unaligned);
    }
    if output.len() < input.len() {
        return Err(BlowcryptError::OutOfBounds);
    }
    Ok(())
}
