//! # Password-Derived Block Cipher Pipeline
//!
//! Whole-buffer encryption with a key derived from a password:
//!
//! - **Key derivation**: PBKDF2-HMAC-SHA256, 100 000 iterations, 16-byte salt
//! - **Padding**: PKCS#7 to 16-byte blocks, always at least one byte
//! - **Encryption**: AES-256 in CBC mode with a random 16-byte IV
//! - **Framing**: `salt || iv || ciphertext`, no header or tag
//!
//! The module also defines [`FileCipher`], the encrypt/decrypt contract
//! shared with the Hill cipher so the file processor can drive either.

mod aes_cbc;
mod derive;
mod frame;
mod pipeline;

pub use aes_cbc::AesCbc;
pub use derive::{Derive, derive_key};
pub use frame::Frame;
pub use pipeline::{PasswordCipher, decrypt, encrypt};

use crate::error::Result;

/// A reversible whole-buffer transform.
///
/// `decrypt(encrypt(x))` recovers `x` up to the documented lossiness of the
/// implementation (the Hill cipher drops non-letters and keeps its filler).
pub trait FileCipher: Send + Sync {
    /// Transforms plaintext into its stored form.
    ///
    /// # Errors
    ///
    /// Returns an error if key setup, randomness or encryption fails.
    fn encrypt(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Recovers plaintext from its stored form.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unusable or the input is malformed.
    /// No partial output is returned.
    fn decrypt(&self, input: &[u8]) -> Result<Vec<u8>>;
}
