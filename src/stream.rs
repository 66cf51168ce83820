//! Framed byte-stream encryption over CFB.
//!
//! The wire format is a 4-byte little-endian payload length followed by
//! the CFB ciphertext of exactly that many bytes; no authentication tag,
//! no further framing. The little-endian header and the CFB byte order
//! match the peer implementation, which is the whole point of the format.

use std::io::{self, Read, Write};

use crate::cfb::CfbMode;
use crate::error::BlowcryptError;

/// Encrypting writer producing the framed wire format.
///
/// Plaintext is buffered in memory; nothing reaches the underlying writer
/// until [`finish`](Self::finish), which emits the length header and the
/// ciphertext in one pass. Dropping the writer without calling `finish`
/// discards the buffered payload.
///
/// # Examples
///
/// ```
/// use std::io::Write;
/// use blowcrypt::{CipherReader, CipherWriter};
///
/// let mut writer = CipherWriter::new(Vec::new(), b"stream key").unwrap();
/// writer.write_all(b"framed payload").unwrap();
/// let wire = writer.finish().unwrap();
///
/// let mut reader = CipherReader::new(wire.as_slice(), b"stream key").unwrap();
/// let mut back = String::new();
/// std::io::Read::read_to_string(&mut reader, &mut back).unwrap();
/// assert_eq!(back, "framed payload");
/// ```
pub struct CipherWriter<W: Write> {
    inner: W,
    cfb: CfbMode,
    buffer: Vec<u8>,
}

impl<W: Write> CipherWriter<W> {
    /// Creates a writer over `inner` with a fresh zero-IV CFB instance.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::BadKeyLength`] if the key is longer than
    /// [`MAX_KEY_LENGTH`](crate::MAX_KEY_LENGTH).
    pub fn new(inner: W, key: &[u8]) -> Result<Self, BlowcryptError> {
        Ok(Self::with_cipher(inner, CfbMode::new(key)?))
    }

    /// Creates a writer over `inner` using a caller-prepared CFB instance
    /// (for a non-zero IV).
    pub fn with_cipher(inner: W, cfb: CfbMode) -> Self {
        CipherWriter {
            inner,
            cfb,
            buffer: Vec::new(),
        }
    }

    /// Encrypts and emits the buffered payload, returning the inner writer.
    ///
    /// Writes the 4-byte little-endian length header, then the CFB
    /// ciphertext, then flushes. Calling `finish` is mandatory; it is the
    /// only operation that touches the underlying stream.
    ///
    /// # Errors
    /// Propagates I/O errors from the underlying writer. A payload larger
    /// than 4 GiB does not fit the header and fails with
    /// [`io::ErrorKind::InvalidInput`]; an invalidated cipher surfaces as
    /// [`io::ErrorKind::Other`].
    pub fn finish(mut self) -> io::Result<W> {
        let length = u32::try_from(self.buffer.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "payload exceeds 4 GiB"))?;
        self.inner.write_all(&length.to_le_bytes())?;
        self.cfb
            .encrypt_in_place(&mut self.buffer)
            .map_err(into_io_error)?;
        self.inner.write_all(&self.buffer)?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for CipherWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Nothing to push; ciphertext only exists after finish().
        Ok(())
    }
}

/// Decrypting reader consuming the framed wire format.
///
/// The first read pulls the 4-byte little-endian header off the underlying
/// stream; after `length` payload bytes have been delivered, every further
/// read reports end of file.
pub struct CipherReader<R: Read> {
    inner: R,
    cfb: CfbMode,
    remaining: Option<u32>,
}

impl<R: Read> CipherReader<R> {
    /// Creates a reader over `inner` with a fresh zero-IV CFB instance.
    ///
    /// # Errors
    /// Returns [`BlowcryptError::BadKeyLength`] if the key is longer than
    /// [`MAX_KEY_LENGTH`](crate::MAX_KEY_LENGTH).
    pub fn new(inner: R, key: &[u8]) -> Result<Self, BlowcryptError> {
        Ok(Self::with_cipher(inner, CfbMode::new(key)?))
    }

    /// Creates a reader over `inner` using a caller-prepared CFB instance.
    pub fn with_cipher(inner: R, cfb: CfbMode) -> Self {
        CipherReader {
            inner,
            cfb,
            remaining: None,
        }
    }

    /// Returns the inner reader, abandoning any undelivered payload.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for CipherReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = match self.remaining {
            Some(n) => n,
            None => {
                let mut header = [0u8; 4];
                self.inner.read_exact(&mut header)?;
                let length = u32::from_le_bytes(header);
                self.remaining = Some(length);
                length
            }
        };

        if remaining == 0 || buf.is_empty() {
            return Ok(0);
        }

        let want = buf.len().min(remaining as usize);
        let got = self.inner.read(&mut buf[..want])?;
        if got == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stream ended before the framed payload",
            ));
        }
        self.cfb
            .decrypt_in_place(&mut buf[..got])
            .map_err(into_io_error)?;
        self.remaining = Some(remaining - got as u32);
        Ok(got)
    }
}

fn into_io_error(err: BlowcryptError) -> io::Error {
    io::Error::other(err)
}
