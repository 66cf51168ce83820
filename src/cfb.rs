//! Cipher Feedback mode.
//!
//! A self-synchronising stream mode built on the block encryptor only.
//! The IV buffer doubles as the keystream block: encrypting it yields
//! eight keystream bytes, and every consumed byte is replaced by the
//! ciphertext byte just produced, so the buffer always holds the last
//! eight ciphertext bytes. Any byte count works, and a sequence of calls
//! produces exactly the bytes a single concatenated call would.

use zeroize::Zeroize;

use crate::blowfish::{Blowfish, BLOCK_SIZE};
use crate::error::BlowcryptError;

/// Self-synchronising Blowfish stream encryption.
///
/// A fresh instance (and any instance after [`set_iv`](Self::set_iv)) has
/// an empty keystream, so the first byte processed triggers a block
/// encryption of the IV.
///
/// # Examples
///
/// ```
/// use blowcrypt::CfbMode;
///
/// let mut enc = CfbMode::new(b"TestKey").unwrap();
/// let mut dec = CfbMode::new(b"TestKey").unwrap();
///
/// let plain = b"any length works here";
/// let mut cipher = vec![0u8; plain.len()];
/// enc.encrypt(plain, &mut cipher).unwrap();
///
/// let mut back = vec![0u8; plain.len()];
/// dec.decrypt(&cipher, &mut back).unwrap();
/// assert_eq!(back, plain);
/// ```
#[derive(Clone)]
pub struct CfbMode {
    engine: Blowfish,
    iv: [u8; BLOCK_SIZE],
    /// How many trailing bytes of `iv` are still usable as keystream.
    iv_bytes_left: usize,
}

impl CfbMode {
    /// Creates the mode with a zero IV and an empty keystream.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::BadKeyLength`] if the key is longer than
    /// [`MAX_KEY_LENGTH`](crate::MAX_KEY_LENGTH).
    pub fn new(key: &[u8]) -> Result<Self, BlowcryptError> {
        Ok(CfbMode {
            engine: Blowfish::new(key)?,
            iv: [0; BLOCK_SIZE],
            iv_bytes_left: 0,
        })
    }

    /// Re-runs the key schedule with new key material, resetting IV and cursor.
    pub fn rekey(&mut self, key: &[u8]) -> Result<(), BlowcryptError> {
        self.engine.rekey(key)?;
        self.iv = [0; BLOCK_SIZE];
        self.iv_bytes_left = 0;
        Ok(())
    }

    /// Copies an 8-byte IV in and discards any leftover keystream, forcing
    /// a fresh block encryption on the next byte.
    pub fn set_iv(&mut self, iv: &[u8; BLOCK_SIZE]) {
        self.iv = *iv;
        self.iv_bytes_left = 0;
    }

    /// Returns a copy of the current IV buffer.
    pub fn iv(&self) -> [u8; BLOCK_SIZE] {
        self.iv
    }

    /// Encrypts `input` into `output`, returning the number of bytes written.
    ///
    /// Any byte count is accepted, including zero.
    ///
    /// # Errors
    /// - [`BlowcryptError::OutOfBounds`] if `output` is shorter than `input`.
    /// - [`BlowcryptError::InstanceInvalidated`] after [`invalidate`](Self::invalidate).
    pub fn encrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, BlowcryptError> {
        if output.len() < input.len() {
            return Err(BlowcryptError::OutOfBounds);
        }
        self.engine.ensure_valid()?;
        for (i, &plain) in input.iter().enumerate() {
            output[i] = self.encrypt_byte(plain);
        }
        Ok(input.len())
    }

    /// Decrypts `input` into `output`, returning the number of bytes written.
    ///
    /// # Errors
    /// Same conditions as [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, BlowcryptError> {
        if output.len() < input.len() {
            return Err(BlowcryptError::OutOfBounds);
        }
        self.engine.ensure_valid()?;
        for (i, &cipher) in input.iter().enumerate() {
            output[i] = self.decrypt_byte(cipher);
        }
        Ok(input.len())
    }

    /// Encrypts `data` in place.
    pub fn encrypt_in_place(&mut self, data: &mut [u8]) -> Result<usize, BlowcryptError> {
        self.engine.ensure_valid()?;
        for byte in data.iter_mut() {
            *byte = self.encrypt_byte(*byte);
        }
        Ok(data.len())
    }

    /// Decrypts `data` in place.
    pub fn decrypt_in_place(&mut self, data: &mut [u8]) -> Result<usize, BlowcryptError> {
        self.engine.ensure_valid()?;
        for byte in data.iter_mut() {
            *byte = self.decrypt_byte(*byte);
        }
        Ok(data.len())
    }

    /// See [`Blowfish::weak_key`].
    pub fn weak_key(&self) -> bool {
        self.engine.weak_key()
    }

    /// Zeroizes the expanded key, IV, and cursor, and disables the instance.
    pub fn invalidate(&mut self) {
        self.engine.invalidate();
        self.iv.zeroize();
        self.iv_bytes_left = 0;
    }

    // ──────── Keystream ────────

    /// Encrypts one byte, replacing the consumed keystream byte with the
    /// ciphertext byte.
    #[inline]
    fn encrypt_byte(&mut self, plain: u8) -> u8 {
        let index = self.keystream_index();
        let cipher = plain ^ self.iv[index];
        self.iv[index] = cipher;
        self.iv_bytes_left -= 1;
        cipher
    }

    /// Decrypts one byte, replacing the consumed keystream byte with the
    /// incoming ciphertext byte. The ciphertext byte is written back even
    /// when the call is served entirely from leftover keystream; skipping
    /// it would desynchronise every later call.
    #[inline]
    fn decrypt_byte(&mut self, cipher: u8) -> u8 {
        let index = self.keystream_index();
        let plain = cipher ^ self.iv[index];
        self.iv[index] = cipher;
        self.iv_bytes_left -= 1;
        plain
    }

    /// Refills the keystream when exhausted and returns the index of the
    /// next usable byte.
    #[inline]
    fn keystream_index(&mut self) -> usize {
        if self.iv_bytes_left == 0 {
            self.engine.encrypt_block_raw(&mut self.iv);
            self.iv_bytes_left = BLOCK_SIZE;
        }
        BLOCK_SIZE - self.iv_bytes_left
    }
}
