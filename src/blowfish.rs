//! Blowfish block cipher engine.
//!
//! Implements the key schedule and the 16-round Feistel network operating
//! on 64-bit blocks. The engine holds the expanded key (18-word P-array and
//! four 256-word S-boxes) and is shared by all modes of operation through
//! composition.
//!
//! Compatible byte-for-byte with the original C# implementation.

use zeroize::Zeroize;

use crate::consts::{P_INIT, S1_INIT, S2_INIT, S3_INIT, S4_INIT};
use crate::error::BlowcryptError;
use crate::vectors::TEST_VECTORS;

/// Size of one cipher block in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Maximum accepted key length in bytes (448 bits).
pub const MAX_KEY_LENGTH: usize = 56;

/// Blowfish engine: expanded key state plus the Feistel round network.
///
/// An engine is created from 0 to 56 bytes of key material. The zero-length
/// key runs the schedule against the bare pi tables and exists for the
/// known-answer harness; real callers should reject it.
///
/// The expanded state is sensitive material. [`invalidate`](Self::invalidate)
/// overwrites it with zeros and marks the engine unusable; dropping the
/// engine clears it as well.
///
/// # Examples
///
/// ```
/// use blowcrypt::Blowfish;
///
/// let bf = Blowfish::new(b"TestKey").unwrap();
/// let mut block = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
/// let original = block;
///
/// bf.encrypt_block(&mut block).unwrap();
/// assert_ne!(block, original);
///
/// bf.decrypt_block(&mut block).unwrap();
/// assert_eq!(block, original);
/// ```
#[derive(Clone)]
pub struct Blowfish {
    p: [u32; 18],
    s: [[u32; 256]; 4],
    weak: bool,
    valid: bool,
}

impl Blowfish {
    /// Creates a new engine and runs the key schedule.
    ///
    /// # Parameters
    /// - `key`: Key material, at most [`MAX_KEY_LENGTH`] bytes.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::BadKeyLength`] if the key is longer than
    /// [`MAX_KEY_LENGTH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use blowcrypt::Blowfish;
    ///
    /// assert!(Blowfish::new(b"secret key").is_ok());
    /// assert!(Blowfish::new(&[0u8; 57]).is_err());
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, BlowcryptError> {
        let mut bf = Blowfish {
            p: [0; 18],
            s: [[0; 256]; 4],
            weak: false,
            valid: false,
        };
        bf.rekey(key)?;
        Ok(bf)
    }

    /// Re-runs the key schedule with new key material, resetting all state.
    ///
    /// A previously invalidated engine becomes usable again.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::BadKeyLength`] if the key is longer than
    /// [`MAX_KEY_LENGTH`].
    pub fn rekey(&mut self, key: &[u8]) -> Result<(), BlowcryptError> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(BlowcryptError::BadKeyLength);
        }

        self.p = P_INIT;
        self.s = [S1_INIT, S2_INIT, S3_INIT, S4_INIT];

        // XOR the key into the P-array, reading 32-bit big-endian words
        // cyclically from the key bytes. The empty key performs no XOR.
        if !key.is_empty() {
            let mut j = 0;
            for entry in self.p.iter_mut() {
                let mut word = 0u32;
                for _ in 0..4 {
                    word = (word << 8) | u32::from(key[j]);
                    j = (j + 1) % key.len();
                }
                *entry ^= word;
            }
        }

        // Stream the zero block through the evolving state, replacing the
        // P-array and then every S-box two words at a time.
        let (mut hi, mut lo) = (0u32, 0u32);
        for i in (0..18).step_by(2) {
            let (h, l) = self.encrypt_words(hi, lo);
            hi = h;
            lo = l;
            self.p[i] = hi;
            self.p[i + 1] = lo;
        }
        for box_index in 0..4 {
            for i in (0..256).step_by(2) {
                let (h, l) = self.encrypt_words(hi, lo);
                hi = h;
                lo = l;
                self.s[box_index][i] = hi;
                self.s[box_index][i + 1] = lo;
            }
        }

        self.weak = sbox_has_duplicates(&self.s);
        self.valid = true;
        Ok(())
    }

    /// Returns true if any S-box holds a duplicate entry after scheduling.
    ///
    /// Duplicate S-box entries weaken the cipher against differential
    /// attacks. The flag is advisory; the engine stays usable.
    pub fn weak_key(&self) -> bool {
        self.weak
    }

    /// Returns true until [`invalidate`](Self::invalidate) is called.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Overwrites the expanded key state with zeros and disables the engine.
    ///
    /// Every subsequent operation fails with
    /// [`BlowcryptError::InstanceInvalidated`] until
    /// [`rekey`](Self::rekey) is called.
    pub fn invalidate(&mut self) {
        self.p.zeroize();
        self.s.zeroize();
        self.weak = false;
        self.valid = false;
    }

    /// Encrypts one 8-byte block in place.
    ///
    /// The first four bytes form the high half big-endian, the last four
    /// the low half.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::InstanceInvalidated`] after
    /// [`invalidate`](Self::invalidate).
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) -> Result<(), BlowcryptError> {
        self.ensure_valid()?;
        self.encrypt_block_raw(block);
        Ok(())
    }

    /// Decrypts one 8-byte block in place.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::InstanceInvalidated`] after
    /// [`invalidate`](Self::invalidate).
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) -> Result<(), BlowcryptError> {
        self.ensure_valid()?;
        self.decrypt_block_raw(block);
        Ok(())
    }

    /// Replays the embedded Eric Young known-answer vectors through both
    /// directions of the cipher.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::SelfTestFailed`] on any mismatch. Callers
    /// that run the self-test treat a failure as fatal.
    ///
    /// # Examples
    ///
    /// ```
    /// use blowcrypt::Blowfish;
    ///
    /// assert!(Blowfish::self_test().is_ok());
    /// ```
    pub fn self_test() -> Result<(), BlowcryptError> {
        for vector in TEST_VECTORS.iter() {
            let bf = Blowfish::new(&vector.key)?;
            let mut block = vector.plain;
            bf.encrypt_block_raw(&mut block);
            if block != vector.cipher {
                return Err(BlowcryptError::SelfTestFailed);
            }
            bf.decrypt_block_raw(&mut block);
            if block != vector.plain {
                return Err(BlowcryptError::SelfTestFailed);
            }
        }
        Ok(())
    }

    // ──────── Internals shared with the mode modules ────────

    /// Fails with `InstanceInvalidated` once the state has been cleared.
    pub(crate) fn ensure_valid(&self) -> Result<(), BlowcryptError> {
        if self.valid {
            Ok(())
        } else {
            Err(BlowcryptError::InstanceInvalidated)
        }
    }

    /// Encrypts one block without the validity check. The mode modules
    /// check once per call, not once per block.
    pub(crate) fn encrypt_block_raw(&self, block: &mut [u8; BLOCK_SIZE]) {
        let hi = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
        let lo = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
        let (hi, lo) = self.encrypt_words(hi, lo);
        block[..4].copy_from_slice(&hi.to_be_bytes());
        block[4..].copy_from_slice(&lo.to_be_bytes());
    }

    /// Decrypts one block without the validity check.
    pub(crate) fn decrypt_block_raw(&self, block: &mut [u8; BLOCK_SIZE]) {
        let hi = u32::from_be_bytes([block[0], block[1], block[2], block[3]]);
        let lo = u32::from_be_bytes([block[4], block[5], block[6], block[7]]);
        let (hi, lo) = self.decrypt_words(hi, lo);
        block[..4].copy_from_slice(&hi.to_be_bytes());
        block[4..].copy_from_slice(&lo.to_be_bytes());
    }

    // ──────── Round network ────────

    /// The round function: four S-box lookups mixed by add/xor/add,
    /// all additions wrapping mod 2^32.
    #[inline]
    fn f(&self, x: u32) -> u32 {
        let a = (x >> 24) as usize;
        let b = (x >> 16) as usize & 0xFF;
        let c = (x >> 8) as usize & 0xFF;
        let d = x as usize & 0xFF;
        (self.s[0][a].wrapping_add(self.s[1][b]) ^ self.s[2][c]).wrapping_add(self.s[3][d])
    }

    /// Runs the 16 encryption rounds on a pair of 32-bit halves.
    #[inline]
    fn encrypt_words(&self, mut hi: u32, mut lo: u32) -> (u32, u32) {
        for i in (0..16).step_by(2) {
            hi ^= self.p[i];
            lo ^= self.f(hi);
            lo ^= self.p[i + 1];
            hi ^= self.f(lo);
        }
        hi ^= self.p[16];
        lo ^= self.p[17];
        (lo, hi)
    }

    /// Runs the 16 decryption rounds, consuming the P-array in reverse.
    #[inline]
    fn decrypt_words(&self, mut hi: u32, mut lo: u32) -> (u32, u32) {
        for i in (2..18).step_by(2).rev() {
            hi ^= self.p[i + 1];
            lo ^= self.f(hi);
            lo ^= self.p[i];
            hi ^= self.f(lo);
        }
        hi ^= self.p[1];
        lo ^= self.p[0];
        (lo, hi)
    }
}

/// Scans the S-boxes for a repeated 32-bit entry.
///
/// Works on a sorted copy of each box; the state itself is untouched.
fn sbox_has_duplicates(s: &[[u32; 256]; 4]) -> bool {
    s.iter().any(|sbox| {
        let mut sorted = *sbox;
        sorted.sort_unstable();
        sorted.windows(2).any(|pair| pair[0] == pair[1])
    })
}

impl Drop for Blowfish {
    /// Securely clears the expanded key state on drop.
    fn drop(&mut self) {
        self.p.zeroize();
        self.s.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_answer_first_vector() {
        // All-zero key, all-zero plaintext.
        let bf = Blowfish::new(&[0u8; 8]).unwrap();
        let mut block = [0u8; 8];
        bf.encrypt_block(&mut block).unwrap();
        assert_eq!(block, [0x4E, 0xF9, 0x97, 0x45, 0x61, 0x98, 0xDD, 0x78]);
    }

    #[test]
    fn test_self_test_passes() {
        assert!(Blowfish::self_test().is_ok());
    }

    #[test]
    fn test_roundtrip_various_key_lengths() {
        let key: Vec<u8> = (0u8..56).collect();
        for len in [1usize, 2, 7, 8, 16, 24, 55, 56] {
            let bf = Blowfish::new(&key[..len]).unwrap();
            let original = [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE, 0xBA, 0xBE];
            let mut block = original;
            bf.encrypt_block(&mut block).unwrap();
            assert_ne!(block, original, "Key length {} left block unchanged", len);
            bf.decrypt_block(&mut block).unwrap();
            assert_eq!(block, original, "Roundtrip failed for key length {}", len);
        }
    }

    #[test]
    fn test_key_too_long() {
        assert_eq!(
            Blowfish::new(&[0u8; 57]).err(),
            Some(BlowcryptError::BadKeyLength)
        );
    }

    #[test]
    fn test_empty_key_schedules() {
        // The harness-only empty key must schedule without touching the
        // P-array XOR step.
        let bf = Blowfish::new(&[]).unwrap();
        let mut block = [0u8; 8];
        bf.encrypt_block(&mut block).unwrap();
        let mut back = block;
        bf.decrypt_block(&mut back).unwrap();
        assert_eq!(back, [0u8; 8]);
    }

    #[test]
    fn test_invalidate_zeroes_state() {
        let mut bf = Blowfish::new(b"sensitive").unwrap();
        bf.invalidate();
        assert!(bf.p.iter().all(|&w| w == 0));
        assert!(bf.s.iter().flatten().all(|&w| w == 0));
        assert!(!bf.is_valid());
    }

    #[test]
    fn test_invalidated_operations_fail() {
        let mut bf = Blowfish::new(b"sensitive").unwrap();
        bf.invalidate();
        let mut block = [0u8; 8];
        assert_eq!(
            bf.encrypt_block(&mut block),
            Err(BlowcryptError::InstanceInvalidated)
        );
        assert_eq!(
            bf.decrypt_block(&mut block),
            Err(BlowcryptError::InstanceInvalidated)
        );
    }

    #[test]
    fn test_rekey_revives_invalidated_engine() {
        let mut bf = Blowfish::new(b"first").unwrap();
        bf.invalidate();
        bf.rekey(b"second").unwrap();
        let mut block = [1u8, 2, 3, 4, 5, 6, 7, 8];
        assert!(bf.encrypt_block(&mut block).is_ok());
    }

    #[test]
    fn test_rekey_matches_fresh_engine() {
        let mut bf = Blowfish::new(b"old key").unwrap();
        bf.rekey(b"new key").unwrap();
        let fresh = Blowfish::new(b"new key").unwrap();

        let mut a = [0x11u8; 8];
        let mut b = [0x11u8; 8];
        bf.encrypt_block(&mut a).unwrap();
        fresh.encrypt_block(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Blowfish::new(b"clone me").unwrap();
        let mut copy = original.clone();
        copy.rekey(b"diverged").unwrap();

        let mut a = [0x22u8; 8];
        let mut b = [0x22u8; 8];
        original.encrypt_block(&mut a).unwrap();
        copy.encrypt_block(&mut b).unwrap();
        assert_ne!(a, b, "Rekeying the clone must not affect the original");

        let fresh = Blowfish::new(b"clone me").unwrap();
        let mut c = [0x22u8; 8];
        fresh.encrypt_block(&mut c).unwrap();
        assert_eq!(a, c, "Original must still match a fresh engine");
    }

    #[test]
    fn test_weak_key_flag_normal_keys() {
        // Duplicate S-box entries are a roughly 1-in-30000 event per key;
        // ordinary keys must report false.
        for key in [&b"abc"[..], &b"0123456789abcdef"[..], &[0u8; 8][..], &[0xFFu8; 56][..]] {
            let bf = Blowfish::new(key).unwrap();
            assert!(!bf.weak_key());
        }
    }

    #[test]
    fn test_sbox_duplicate_scan() {
        let mut s = [[0u32; 256]; 4];
        for (box_index, sbox) in s.iter_mut().enumerate() {
            for (i, entry) in sbox.iter_mut().enumerate() {
                *entry = (box_index * 256 + i) as u32;
            }
        }
        assert!(!sbox_has_duplicates(&s));

        // A single repeated value in the last box must trip the scan.
        s[3][200] = s[3][17];
        assert!(sbox_has_duplicates(&s));
    }

    #[test]
    fn test_byte_order_big_endian_halves() {
        // The block maps to (hi, lo) big-endian; flipping the halves must
        // change the ciphertext.
        let bf = Blowfish::new(b"order").unwrap();
        let mut a = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut b = [0x05, 0x06, 0x07, 0x08, 0x01, 0x02, 0x03, 0x04];
        bf.encrypt_block(&mut a).unwrap();
        bf.encrypt_block(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
