//! Password-based file encryption: PBKDF2 key, PKCS#7, AES-256-CBC.
//!
//! Encrypt draws a fresh salt and IV from the OS, so two encryptions of the
//! same input never produce the same frame. Decrypt needs only the password.
//!
//! The construction provides confidentiality only. A wrong password or a
//! tampered file is detected, at best, by the padding check.

use secrecy::ExposeSecret;
use tracing::debug;

use crate::cipher::FileCipher;
use crate::cipher::aes_cbc::AesCbc;
use crate::cipher::derive::Derive;
use crate::cipher::frame::Frame;
use crate::config::{IV_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::Result;
use crate::padding;
use crate::secret::Password;

/// Encrypts and decrypts whole buffers under one password.
pub struct PasswordCipher {
    password: Password,
    iterations: u32,
}

impl PasswordCipher {
    pub fn new(password: Password) -> Self {
        Self { password, iterations: PBKDF2_ITERATIONS }
    }

    /// Lower iteration count so tests stay fast.
    #[cfg(test)]
    pub(crate) fn with_iterations(password: Password, iterations: u32) -> Self {
        Self { password, iterations }
    }

    /// Produces `salt || iv || AES-256-CBC(PKCS7(plaintext))`.
    ///
    /// Empty input is allowed and yields one full padding block.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let derive = Derive::new(self.password.as_bytes());
        let salt: [u8; SALT_SIZE] = Derive::random_bytes()?;
        let iv: [u8; IV_SIZE] = Derive::random_bytes()?;
        let key = derive.derive_key(&salt, self.iterations)?;

        let padded = padding::pad(plaintext)?;
        let ciphertext = AesCbc::new(key.expose_secret(), iv).encrypt(&padded)?;

        debug!(plaintext = plaintext.len(), ciphertext = ciphertext.len(), salt = %hex::encode(salt), "encrypted frame");
        Ok(Frame::new(salt, iv, ciphertext).to_bytes())
    }

    /// Reverses [`PasswordCipher::encrypt`].
    ///
    /// # Errors
    ///
    /// - [`CipherError::MalformedInput`](crate::error::CipherError::MalformedInput)
    ///   if the frame is truncated or misaligned.
    /// - [`CipherError::InvalidPadding`](crate::error::CipherError::InvalidPadding)
    ///   if the padding check fails, which is how a wrong password usually
    ///   shows up.
    pub fn decrypt(&self, frame: &[u8]) -> Result<Vec<u8>> {
        let frame = Frame::parse(frame)?;
        let key = Derive::new(self.password.as_bytes()).derive_key(frame.salt(), self.iterations)?;

        debug!(ciphertext = frame.ciphertext().len(), salt = %hex::encode(frame.salt()), "decrypting frame");
        let padded = AesCbc::new(key.expose_secret(), *frame.iv()).decrypt(frame.ciphertext())?;
        padding::unpad(&padded)
    }
}

impl FileCipher for PasswordCipher {
    fn encrypt(&self, input: &[u8]) -> Result<Vec<u8>> {
        PasswordCipher::encrypt(self, input)
    }

    fn decrypt(&self, input: &[u8]) -> Result<Vec<u8>> {
        PasswordCipher::decrypt(self, input)
    }
}

/// Encrypts `plaintext` under `password`.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    PasswordCipher::new(Password::new(password)).encrypt(plaintext)
}

/// Decrypts a frame produced by [`encrypt`].
pub fn decrypt(frame: &[u8], password: &str) -> Result<Vec<u8>> {
    PasswordCipher::new(Password::new(password)).decrypt(frame)
}
