//! Cipher Block Chaining mode.
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption, so equal plaintext blocks diverge after the first. The IV
//! seeds the chain; it starts at zero and tracks the most recently emitted
//! ciphertext block.

use zeroize::Zeroize;

use crate::blowfish::{Blowfish, BLOCK_SIZE};
use crate::ecb::check_aligned;
use crate::error::BlowcryptError;

/// IV-chained block-aligned Blowfish encryption.
///
/// # Examples
///
/// ```
/// use blowcrypt::CbcMode;
///
/// let mut cbc = CbcMode::new(b"TestKey").unwrap();
/// cbc.set_iv(&[1, 2, 3, 4, 5, 6, 7, 8]);
///
/// let plain = [0x42u8; 16];
/// let mut cipher = [0u8; 16];
/// cbc.encrypt(&plain, &mut cipher).unwrap();
/// assert_ne!(cipher[..8], cipher[8..]);
///
/// cbc.set_iv(&[1, 2, 3, 4, 5, 6, 7, 8]);
/// let mut back = [0u8; 16];
/// cbc.decrypt(&cipher, &mut back).unwrap();
/// assert_eq!(back, plain);
/// ```
#[derive(Clone)]
pub struct CbcMode {
    engine: Blowfish,
    iv: [u8; BLOCK_SIZE],
}

impl CbcMode {
    /// Creates the mode with a zero IV and runs the key schedule.
    ///
    /// Set a fresh IV before encrypting; a zero IV is only acceptable for
    /// harness use.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::BadKeyLength`] if the key is longer than
    /// [`MAX_KEY_LENGTH`](crate::MAX_KEY_LENGTH).
    pub fn new(key: &[u8]) -> Result<Self, BlowcryptError> {
        Ok(CbcMode {
            engine: Blowfish::new(key)?,
            iv: [0; BLOCK_SIZE],
        })
    }

    /// Re-runs the key schedule with new key material and resets the IV to zero.
    pub fn rekey(&mut self, key: &[u8]) -> Result<(), BlowcryptError> {
        self.engine.rekey(key)?;
        self.iv = [0; BLOCK_SIZE];
        Ok(())
    }

    /// Copies an 8-byte IV into the chain state.
    pub fn set_iv(&mut self, iv: &[u8; BLOCK_SIZE]) {
        self.iv = *iv;
    }

    /// Returns a copy of the current IV.
    ///
    /// After an operation this is the last ciphertext block processed,
    /// never a reference into internal state.
    pub fn iv(&self) -> [u8; BLOCK_SIZE] {
        self.iv
    }

    /// Encrypts `input` into `output`, returning the number of bytes written.
    ///
    /// # Errors
    /// - [`BlowcryptError::Unaligned`] if `input.len()` is not a multiple of 8.
    /// - [`BlowcryptError::OutOfBounds`] if `output` is shorter than `input`.
    /// - [`BlowcryptError::InstanceInvalidated`] after [`invalidate`](Self::invalidate).
    pub fn encrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, BlowcryptError> {
        check_aligned(input, output)?;
        self.engine.ensure_valid()?;
        for (src, dst) in input
            .chunks_exact(BLOCK_SIZE)
            .zip(output.chunks_exact_mut(BLOCK_SIZE))
        {
            let mut block: [u8; BLOCK_SIZE] = src.try_into().unwrap();
            for (b, v) in block.iter_mut().zip(self.iv.iter()) {
                *b ^= v;
            }
            self.engine.encrypt_block_raw(&mut block);
            dst.copy_from_slice(&block);
            self.iv = block;
        }
        Ok(input.len())
    }

    /// Decrypts `input` into `output`, returning the number of bytes written.
    ///
    /// # Errors
    /// Same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, BlowcryptError> {
        check_aligned(input, output)?;
        self.engine.ensure_valid()?;
        for (src, dst) in input
            .chunks_exact(BLOCK_SIZE)
            .zip(output.chunks_exact_mut(BLOCK_SIZE))
        {
            let saved: [u8; BLOCK_SIZE] = src.try_into().unwrap();
            let mut block = saved;
            self.engine.decrypt_block_raw(&mut block);
            for (b, v) in block.iter_mut().zip(self.iv.iter()) {
                *b ^= v;
            }
            dst.copy_from_slice(&block);
            self.iv = saved;
        }
        Ok(input.len())
    }

    /// Encrypts `data` in place.
    pub fn encrypt_in_place(&mut self, data: &mut [u8]) -> Result<usize, BlowcryptError> {
        if !data.len().is_multiple_of(BLOCK_SIZE) {
            return Err(BlowcryptError::Unaligned);
        }
        self.engine.ensure_valid()?;
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            let block: &mut [u8; BLOCK_SIZE] = chunk.try_into().unwrap();
            for (b, v) in block.iter_mut().zip(self.iv.iter()) {
                *b ^= v;
            }
            self.engine.encrypt_block_raw(block);
            self.iv = *block;
        }
        Ok(data.len())
    }

    /// Decrypts `data` in place.
    pub fn decrypt_in_place(&mut self, data: &mut [u8]) -> Result<usize, BlowcryptError> {
        if !data.len().is_multiple_of(BLOCK_SIZE) {
            return Err(BlowcryptError::Unaligned);
        }
        self.engine.ensure_valid()?;
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            let block: &mut [u8; BLOCK_SIZE] = chunk.try_into().unwrap();
            let saved = *block;
            self.engine.decrypt_block_raw(block);
            for (b, v) in block.iter_mut().zip(self.iv.iter()) {
                *b ^= v;
            }
            self.iv = saved;
        }
        Ok(data.len())
    }

    /// See [`Blowfish::weak_key`].
    pub fn weak_key(&self) -> bool {
        self.engine.weak_key()
    }

    /// Zeroizes the expanded key and the IV, and disables the instance.
    pub fn invalidate(&mut self) {
        self.engine.invalidate();
        self.iv.zeroize();
    }
}
