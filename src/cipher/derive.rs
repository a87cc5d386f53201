//! # Key Derivation with PBKDF2
//!
//! Derives the AES-256 key from a password and a per-file salt using
//! PBKDF2-HMAC-SHA256. The iteration count is fixed by
//! [`PBKDF2_ITERATIONS`] so the same password and salt always give the same
//! key, while a fresh salt gives an unrelated one.
//!
//! Derivation is the slowest step of every encrypt and decrypt; callers
//! derive once per operation.

use hmac::Hmac;
use rand::TryRngCore;
use rand::rngs::OsRng;
use secrecy::{ExposeSecretMut, SecretBox};
use sha2::Sha256;

use crate::config::{KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::{CipherError, Result};
use crate::secret::SecretKey;

/// Password-based key derivation bound to one password.
pub struct Derive<'a> {
    password: &'a [u8],
}

impl<'a> Derive<'a> {
    /// Any byte string is accepted, including the empty one.
    pub fn new(password: &'a [u8]) -> Self {
        Self { password }
    }

    /// Runs PBKDF2-HMAC-SHA256 for `iterations` rounds.
    pub fn derive_key(&self, salt: &[u8], iterations: u32) -> Result<SecretKey> {
        if iterations == 0 {
            return Err(CipherError::KeyDerivation("iteration count must be at least 1".into()));
        }

        let mut key: SecretKey = SecretBox::new(Box::new([0u8; KEY_SIZE]));
        pbkdf2::pbkdf2::<Hmac<Sha256>>(self.password, salt, iterations, key.expose_secret_mut()).map_err(|e| CipherError::KeyDerivation(format!("pbkdf2 failed: {e}")))?;

        Ok(key)
    }

    /// Fills an `N`-byte array from the operating system CSPRNG.
    ///
    /// Used for both salts and IVs.
    pub fn random_bytes<const N: usize>() -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| CipherError::Random(e.to_string()))?;
        Ok(bytes)
    }
}

/// Derives the 32-byte key for `password` and `salt` with the standard
/// iteration count.
///
/// # Errors
///
/// Returns [`CipherError::KeyDerivation`] if PBKDF2 itself fails.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_SIZE]) -> Result<SecretKey> {
    Derive::new(password).derive_key(salt, PBKDF2_ITERATIONS)
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_known_vectors() {
        let derive = Derive::new(b"password");

        let key = derive.derive_key(b"salt", 1).unwrap();
        assert_eq!(hex::encode(key.expose_secret()), "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b");

        let key = derive.derive_key(b"salt", 2).unwrap();
        assert_eq!(hex::encode(key.expose_secret()), "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43");
    }

    #[test]
    fn test_derive_key_deterministic() {
        let salt = [7u8; SALT_SIZE];
        let key1 = derive_key(b"test_password", &salt).unwrap();
        let key2 = derive_key(b"test_password", &salt).unwrap();
        assert_eq!(key1.expose_secret(), key2.expose_secret());
    }

    #[test]
    fn test_different_salts_give_different_keys() {
        let derive = Derive::new(b"test_password");
        let key1 = derive.derive_key(&[0u8; SALT_SIZE], 10).unwrap();
        let key2 = derive.derive_key(&[1u8; SALT_SIZE], 10).unwrap();
        assert_ne!(key1.expose_secret(), key2.expose_secret());
    }

    #[test]
    fn test_empty_password() {
        let salt = [3u8; SALT_SIZE];
        let empty = derive_key(b"", &salt).unwrap();
        assert_eq!(empty.expose_secret(), derive_key(b"", &salt).unwrap().expose_secret());
        assert_ne!(empty.expose_secret(), derive_key(b"a", &salt).unwrap().expose_secret());
    }

    #[test]
    fn test_zero_iterations() {
        let derive = Derive::new(b"pw");
        assert!(derive.derive_key(b"salt", 0).is_err());
    }

    #[test]
    fn test_random_bytes() {
        let bytes1: [u8; 32] = Derive::random_bytes().unwrap();
        let bytes2: [u8; 32] = Derive::random_bytes().unwrap();
        assert_ne!(bytes1, bytes2);
    }
}
