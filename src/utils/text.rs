//! String-to-byte conversion for the envelope wire format.
//!
//! The peer platform hashes and encrypts strings as UTF-16 big-endian code
//! units, so the envelope must use the same byte representation on both
//! the password and the plaintext paths. Rust strings are UTF-8; these
//! helpers convert at the boundary.

/// Encodes a string as UTF-16 big-endian bytes.
///
/// # Parameters
/// - `input`: The string to encode.
///
/// # Returns
/// A `Vec<u8>` holding two bytes per UTF-16 code unit, high byte first.
pub(crate) fn to_utf16_be(input: &str) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() * 2);
    for unit in input.encode_utf16() {
        output.extend_from_slice(&unit.to_be_bytes());
    }
    output
}

/// Decodes UTF-16 big-endian bytes back into a string.
///
/// # Parameters
/// - `input`: Byte slice whose length must be a multiple of 2.
///
/// # Returns
/// The decoded string, or `None` for an odd-length slice or ill-formed
/// UTF-16 (unpaired surrogates).
pub(crate) fn from_utf16_be(input: &[u8]) -> Option<String> {
    if !input.len().is_multiple_of(2) {
        return None;
    }
    let units: Vec<u16> = input
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_encoding() {
        assert_eq!(to_utf16_be("AB"), vec![0x00, 0x41, 0x00, 0x42]);
    }

    #[test]
    fn test_roundtrip() {
        for s in ["", "Protect me.", "contraseña", "日本語テスト", "emoji 🔐 mix"] {
            let bytes = to_utf16_be(s);
            assert_eq!(from_utf16_be(&bytes).as_deref(), Some(s));
        }
    }

    #[test]
    fn test_non_bmp_uses_surrogate_pair() {
        // U+1F510 encodes as a surrogate pair, four bytes.
        let bytes = to_utf16_be("🔐");
        assert_eq!(bytes.len(), 4);
        assert_eq!(bytes[..2], [0xD8, 0x3D]);
    }

    #[test]
    fn test_odd_length_rejected() {
        assert_eq!(from_utf16_be(&[0x00, 0x41, 0x00]), None);
    }

    #[test]
    fn test_unpaired_surrogate_rejected() {
        assert_eq!(from_utf16_be(&[0xD8, 0x00]), None);
    }

    #[test]
    fn test_empty() {
        assert!(to_utf16_be("").is_empty());
        assert_eq!(from_utf16_be(&[]).as_deref(), Some(""));
    }
}
