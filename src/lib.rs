//! Blowfish symmetric cipher engine.
//!
//! Provides the Blowfish block cipher with three modes of operation
//! (ECB, CBC, CFB), a password-based string-encryption envelope, and a
//! framed byte-stream wrapper over CFB.
//!
//! This crate is compatible byte-for-byte with the original C#
//! implementation: the block function reproduces the Eric Young
//! known-answer vectors, the envelope reads and writes the same base64
//! material, and the stream format interoperates with the peer's framing.
//!
//! # Architecture
//!
//! ```text
//! Blowfish    (engine — key schedule + 16-round Feistel network)
//!     ↑ owned by composition
//! EcbMode / CbcMode / CfbMode   (the three mode state machines)
//!     ↑
//! PasswordEnvelope  (SHA-1 key derivation + CBC + base64 framing)
//! CipherWriter / CipherReader   (length-framed byte streams over CFB)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a string under a password:
//!
//! ```
//! use blowcrypt::PasswordEnvelope;
//!
//! let mut envelope = PasswordEnvelope::with_os_random("my_secret_password").unwrap();
//! let sealed = envelope.encrypt("Protect me.").unwrap();
//! assert_eq!(envelope.decrypt(&sealed).as_deref(), Some("Protect me."));
//! ```
//!
//! Stream any number of bytes through CFB:
//!
//! ```
//! use blowcrypt::CfbMode;
//!
//! let mut enc = CfbMode::new(b"stream key").unwrap();
//! let mut dec = CfbMode::new(b"stream key").unwrap();
//!
//! let mut cipher = [0u8; 11];
//! enc.encrypt(b"odd lengths", &mut cipher).unwrap();
//!
//! let mut plain = [0u8; 11];
//! dec.decrypt(&cipher, &mut plain).unwrap();
//! assert_eq!(&plain, b"odd lengths");
//! ```

#![deny(clippy::all)]

pub mod error;

mod blowfish;
mod cbc;
mod cfb;
mod consts;
mod ecb;
mod envelope;
mod random;
mod stream;
pub(crate) mod utils;
mod vectors;

pub use blowfish::{Blowfish, BLOCK_SIZE, MAX_KEY_LENGTH};
pub use cbc::CbcMode;
pub use cfb::CfbMode;
pub use ecb::EcbMode;
pub use envelope::PasswordEnvelope;
pub use random::{OsRandom, RandomSource};
pub use stream::{CipherReader, CipherWriter};
