//! Password-based string encryption.
//!
//! Wraps [`CbcMode`] behind a password: the key is the SHA-1 digest of the
//! password's UTF-16 big-endian bytes, every message gets a fresh random
//! IV, and the result travels as base64 of `IV || ciphertext`. A salted
//! SHA-1 checksum of the password is exposed for offline verification
//! without storing the password itself.
//!
//! The format carries no authentication tag, and a single unsalted hash is
//! a weak key derivation by modern standards; both are retained because
//! the bytes must match material produced by the original implementation.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::blowfish::BLOCK_SIZE;
use crate::cbc::CbcMode;
use crate::error::BlowcryptError;
use crate::random::{OsRandom, RandomSource};
use crate::utils::text;

/// Length of the random salt in the key checksum, in bytes.
const SALT_LENGTH: usize = 20;

/// Length of a SHA-1 digest in bytes.
const DIGEST_LENGTH: usize = 20;

/// Password-based encryption of strings to base64 envelopes.
///
/// Decryption failures of any kind (bad base64, short input, corrupt
/// padding, wrong password) uniformly come back as `None`; distinguishing
/// them would hand an attacker a padding oracle.
///
/// # Examples
///
/// ```
/// use blowcrypt::PasswordEnvelope;
///
/// let mut envelope = PasswordEnvelope::with_os_random("my password").unwrap();
/// let sealed = envelope.encrypt("Protect me.").unwrap();
/// assert_eq!(envelope.decrypt(&sealed).as_deref(), Some("Protect me."));
/// assert_eq!(envelope.decrypt("not base64!"), None);
/// ```
pub struct PasswordEnvelope {
    cbc: CbcMode,
    key_checksum: String,
    rng: Box<dyn RandomSource>,
}

impl PasswordEnvelope {
    /// Creates an envelope from a password and an injected random source.
    ///
    /// Derives the cipher key as SHA-1 of the UTF-16BE password bytes,
    /// draws a 20-byte salt for the key checksum, and clears the raw
    /// password bytes and the derived key from memory before returning.
    ///
    /// # Parameters
    /// - `password`: The password; any non-empty string is usable.
    /// - `rng`: Source for the checksum salt and the per-message IVs.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::RandomSourceFailure`] if the source fails.
    pub fn new(password: &str, mut rng: Box<dyn RandomSource>) -> Result<Self, BlowcryptError> {
        let mut password_bytes = text::to_utf16_be(password);
        let mut key: [u8; DIGEST_LENGTH] = Sha1::digest(&password_bytes).into();
        let cbc = CbcMode::new(&key);
        key.zeroize();
        let cbc = cbc?;

        let mut salt = [0u8; SALT_LENGTH];
        let drawn = rng.fill(&mut salt);
        if let Err(e) = drawn {
            password_bytes.zeroize();
            return Err(e);
        }

        let mut hasher = Sha1::new();
        hasher.update(salt);
        hasher.update(&password_bytes);
        password_bytes.zeroize();
        let checksum: [u8; DIGEST_LENGTH] = hasher.finalize().into();

        let mut packed = [0u8; SALT_LENGTH + DIGEST_LENGTH];
        packed[..SALT_LENGTH].copy_from_slice(&salt);
        packed[SALT_LENGTH..].copy_from_slice(&checksum);
        let key_checksum = BASE64.encode(packed);

        Ok(PasswordEnvelope {
            cbc,
            key_checksum,
            rng,
        })
    }

    /// Creates an envelope backed by the operating system generator.
    pub fn with_os_random(password: &str) -> Result<Self, BlowcryptError> {
        Self::new(password, Box::new(OsRandom))
    }

    /// Returns the base64 salt-plus-digest checksum for this password.
    ///
    /// Store it next to the ciphertext and check candidate passwords with
    /// [`verify_key`](Self::verify_key) before attempting decryption.
    pub fn key_checksum(&self) -> &str {
        &self.key_checksum
    }

    /// Encrypts a string into a base64 envelope.
    ///
    /// The UTF-16BE plaintext is padded to the next block boundary with
    /// 1 to 8 bytes, every pad byte holding the pad length mod 8; an
    /// already aligned payload grows by a full block of zero bytes. The
    /// peer's decoder depends on exactly this scheme, quirk included.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::RandomSourceFailure`] if no IV can be drawn.
    pub fn encrypt(&mut self, plain: &str) -> Result<String, BlowcryptError> {
        let mut buffer = text::to_utf16_be(plain);
        let pad = BLOCK_SIZE - buffer.len() % BLOCK_SIZE;
        buffer.resize(buffer.len() + pad, (pad % BLOCK_SIZE) as u8);

        let mut iv = [0u8; BLOCK_SIZE];
        let drawn = self.rng.fill(&mut iv);
        if let Err(e) = drawn {
            buffer.zeroize();
            return Err(e);
        }
        self.cbc.set_iv(&iv);

        let mut sealed = Vec::with_capacity(BLOCK_SIZE + buffer.len());
        sealed.extend_from_slice(&iv);
        sealed.resize(BLOCK_SIZE + buffer.len(), 0);
        let encrypted = self.cbc.encrypt(&buffer, &mut sealed[BLOCK_SIZE..]);
        buffer.zeroize();
        encrypted?;

        Ok(BASE64.encode(&sealed))
    }

    /// Decrypts a base64 envelope produced by [`encrypt`](Self::encrypt)
    /// or by the peer implementation.
    ///
    /// Returns `None` on any failure: malformed base64, an envelope
    /// shorter than IV plus one block, an out-of-range pad byte, or
    /// ill-formed UTF-16 in the recovered payload.
    pub fn decrypt(&mut self, sealed: &str) -> Option<String> {
        let raw = BASE64.decode(sealed).ok()?;
        if raw.len() < BLOCK_SIZE * 2 {
            return None;
        }

        let (iv, body) = raw.split_at(BLOCK_SIZE);
        self.cbc.set_iv(iv.try_into().expect("split yields 8 bytes"));

        // Trailing bytes beyond the last whole block are ignored.
        let data_len = (body.len() / BLOCK_SIZE) * BLOCK_SIZE;
        let mut plain = vec![0u8; data_len];
        if self.cbc.decrypt(&body[..data_len], &mut plain).is_err() {
            return None;
        }

        let last = plain[data_len - 1] as usize;
        if last >= BLOCK_SIZE {
            plain.zeroize();
            return None;
        }
        let pad = if last == 0 { BLOCK_SIZE } else { last };
        let decoded = text::from_utf16_be(&plain[..data_len - pad]);
        plain.zeroize();
        decoded
    }

    /// Checks a password against a stored key checksum.
    ///
    /// Recomputes SHA-1 over the stored salt and the candidate password's
    /// UTF-16BE bytes and compares digests in constant time. Malformed
    /// input of any kind yields `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blowcrypt::PasswordEnvelope;
    ///
    /// let envelope = PasswordEnvelope::with_os_random("correct horse").unwrap();
    /// let stored = envelope.key_checksum().to_owned();
    /// assert!(PasswordEnvelope::verify_key("correct horse", &stored));
    /// assert!(!PasswordEnvelope::verify_key("wrong horse", &stored));
    /// ```
    pub fn verify_key(password: &str, stored_checksum: &str) -> bool {
        let raw = match BASE64.decode(stored_checksum) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        if raw.len() != SALT_LENGTH + DIGEST_LENGTH {
            return false;
        }

        let mut hasher = Sha1::new();
        hasher.update(&raw[..SALT_LENGTH]);
        let mut password_bytes = text::to_utf16_be(password);
        hasher.update(&password_bytes);
        password_bytes.zeroize();
        let computed: [u8; DIGEST_LENGTH] = hasher.finalize().into();

        computed.ct_eq(&raw[SALT_LENGTH..]).into()
    }

    /// See [`Blowfish::weak_key`](crate::Blowfish::weak_key).
    pub fn weak_key(&self) -> bool {
        self.cbc.weak_key()
    }

    /// Zeroizes the cipher state and disables the envelope.
    pub fn invalidate(&mut self) {
        self.cbc.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic source that fills every request with one byte value.
    struct FixedRandom(u8);

    impl RandomSource for FixedRandom {
        fn fill(&mut self, dest: &mut [u8]) -> Result<(), BlowcryptError> {
            dest.fill(self.0);
            Ok(())
        }
    }

    /// Source that always fails, for error propagation tests.
    struct BrokenRandom;

    impl RandomSource for BrokenRandom {
        fn fill(&mut self, _dest: &mut [u8]) -> Result<(), BlowcryptError> {
            Err(BlowcryptError::RandomSourceFailure)
        }
    }

    fn fixed_envelope(password: &str) -> PasswordEnvelope {
        PasswordEnvelope::new(password, Box::new(FixedRandom(0x42))).unwrap()
    }

    #[test]
    fn test_encrypt_frozen_snapshot() {
        // Deterministic IV 0x42..42; any change is a format regression.
        let mut envelope = fixed_envelope("secret");
        assert_eq!(
            envelope.encrypt("Protect me.").unwrap(),
            "QkJCQkJCQkJrzYBcw54KBokE/hOGAEzbnjyv4qhvoWc="
        );
    }

    #[test]
    fn test_key_checksum_frozen_snapshot() {
        let envelope = fixed_envelope("secret");
        assert_eq!(
            envelope.key_checksum(),
            "QkJCQkJCQkJCQkJCQkJCQkJCQkLAxYSWM7scPNpk3WtCMwAQIHd0Eg=="
        );
    }

    #[test]
    fn test_roundtrip() {
        let mut envelope = fixed_envelope("round trip");
        for text in ["", "x", "Protect me.", "longer text crossing several blocks", "日本語"] {
            let sealed = envelope.encrypt(text).unwrap();
            assert_eq!(envelope.decrypt(&sealed).as_deref(), Some(text));
        }
    }

    #[test]
    fn test_aligned_plaintext_pads_full_zero_block() {
        // "Test" is exactly one block of UTF-16BE, so the envelope grows
        // by a whole pad block of zero bytes.
        let mut envelope = fixed_envelope("secret");
        let sealed = envelope.encrypt("Test").unwrap();
        let raw = BASE64.decode(&sealed).unwrap();
        assert_eq!(raw.len(), 8 + 16);
        assert_eq!(sealed, "QkJCQkJCQkLyK73jt3mlrnxd2jCnmGMD");
        assert_eq!(envelope.decrypt(&sealed).as_deref(), Some("Test"));
    }

    #[test]
    fn test_decrypt_rejects_garbage() {
        let mut envelope = fixed_envelope("secret");
        assert_eq!(envelope.decrypt("not base64 at all!"), None);
        assert_eq!(envelope.decrypt(""), None);
        // Valid base64 but shorter than IV + one block.
        assert_eq!(envelope.decrypt(&BASE64.encode([0u8; 12])), None);
    }

    #[test]
    fn test_decrypt_rejects_corrupt_padding() {
        let mut envelope = fixed_envelope("secret");
        let sealed = envelope.encrypt("Protect me.").unwrap();
        let mut raw = BASE64.decode(&sealed).unwrap();
        // Flipping a bit in the last ciphertext block scrambles the whole
        // final block after decryption; the odds of a valid pad byte
        // surviving are small, and this particular flip does not.
        let last = raw.len() - 1;
        raw[last] ^= 0x80;
        assert_eq!(envelope.decrypt(&BASE64.encode(&raw)), None);
    }

    #[test]
    fn test_wrong_password_fails_closed() {
        let mut writer = fixed_envelope("right password");
        let sealed = writer.encrypt("Protect me.").unwrap();
        let mut reader = fixed_envelope("wrong password");
        assert_eq!(reader.decrypt(&sealed), None);
    }

    #[test]
    fn test_verify_key_accepts_own_checksum() {
        let envelope = PasswordEnvelope::with_os_random("pass phrase").unwrap();
        assert!(PasswordEnvelope::verify_key(
            "pass phrase",
            envelope.key_checksum()
        ));
        assert!(!PasswordEnvelope::verify_key(
            "pass phrasf",
            envelope.key_checksum()
        ));
    }

    #[test]
    fn test_verify_key_rejects_malformed() {
        assert!(!PasswordEnvelope::verify_key("x", "###"));
        assert!(!PasswordEnvelope::verify_key(
            "x",
            &BASE64.encode([0u8; 39])
        ));
        assert!(!PasswordEnvelope::verify_key(
            "x",
            &BASE64.encode([0u8; 41])
        ));
    }

    #[test]
    fn test_checksum_decodes_to_forty_bytes() {
        let envelope = PasswordEnvelope::with_os_random("any").unwrap();
        let raw = BASE64.decode(envelope.key_checksum()).unwrap();
        assert_eq!(raw.len(), 40);
    }

    #[test]
    fn test_random_failure_propagates() {
        assert_eq!(
            PasswordEnvelope::new("pw", Box::new(BrokenRandom)).err(),
            Some(BlowcryptError::RandomSourceFailure)
        );
    }

    #[test]
    fn test_random_ivs_differ_across_messages() {
        let mut envelope = PasswordEnvelope::with_os_random("fresh ivs").unwrap();
        let a = envelope.encrypt("same text").unwrap();
        let b = envelope.encrypt("same text").unwrap();
        assert_ne!(a, b, "Fresh IVs must yield different envelopes");
        assert_eq!(envelope.decrypt(&a).as_deref(), Some("same text"));
        assert_eq!(envelope.decrypt(&b).as_deref(), Some("same text"));
    }

    #[test]
    fn test_invalidated_envelope_fails_closed() {
        let mut envelope = fixed_envelope("secret");
        let sealed = envelope.encrypt("Protect me.").unwrap();
        envelope.invalidate();
        assert_eq!(
            envelope.encrypt("more").err(),
            Some(BlowcryptError::InstanceInvalidated)
        );
        assert_eq!(envelope.decrypt(&sealed), None);
    }
}
