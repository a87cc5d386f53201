//! On-disk layout of an AES-encrypted file.
//!
//! ```text
//! offset 0..16   salt
//! offset 16..32  iv
//! offset 32..    ciphertext (positive multiple of 16 bytes)
//! ```
//!
//! There is no magic number, version or authentication tag.

use crate::config::{BLOCK_SIZE, HEADER_SIZE, IV_SIZE, MIN_FRAME_SIZE, SALT_SIZE};
use crate::error::{CipherError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    salt: [u8; SALT_SIZE],
    iv: [u8; IV_SIZE],
    ciphertext: Vec<u8>,
}

impl Frame {
    pub fn new(salt: [u8; SALT_SIZE], iv: [u8; IV_SIZE], ciphertext: Vec<u8>) -> Self {
        Self { salt, iv, ciphertext }
    }

    /// Splits raw bytes into salt, IV and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MalformedInput`] if the buffer is shorter than
    /// the header plus one block, or if the ciphertext is not block aligned.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_FRAME_SIZE {
            return Err(CipherError::MalformedInput(format!("frame too short: need at least {MIN_FRAME_SIZE} bytes, got {}", bytes.len())));
        }

        let (header, ciphertext) = bytes.split_at(HEADER_SIZE);
        if !ciphertext.len().is_multiple_of(BLOCK_SIZE) {
            return Err(CipherError::MalformedInput(format!("ciphertext length {} is not a multiple of {BLOCK_SIZE}", ciphertext.len())));
        }

        let (salt, iv) = header.split_at(SALT_SIZE);
        let salt: [u8; SALT_SIZE] = salt.try_into().map_err(|_| CipherError::MalformedInput("invalid salt length".into()))?;
        let iv: [u8; IV_SIZE] = iv.try_into().map_err(|_| CipherError::MalformedInput("invalid iv length".into()))?;

        Ok(Self { salt, iv, ciphertext: ciphertext.to_vec() })
    }

    /// Serializes as `salt || iv || ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    #[inline]
    pub fn salt(&self) -> &[u8; SALT_SIZE] {
        &self.salt
    }

    #[inline]
    pub fn iv(&self) -> &[u8; IV_SIZE] {
        &self.iv
    }

    #[inline]
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let frame = Frame::new([1u8; SALT_SIZE], [2u8; IV_SIZE], vec![3u8; 32]);
        let bytes = frame.to_bytes();

        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[..16], &[1u8; 16]);
        assert_eq!(&bytes[16..32], &[2u8; 16]);
        assert_eq!(&bytes[32..], &[3u8; 32]);
        assert_eq!(Frame::parse(&bytes).unwrap(), frame);
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(Frame::parse(&[]), Err(CipherError::MalformedInput(_))));
        assert!(matches!(Frame::parse(&[0u8; HEADER_SIZE]), Err(CipherError::MalformedInput(_))));
        assert!(matches!(Frame::parse(&[0u8; MIN_FRAME_SIZE - 1]), Err(CipherError::MalformedInput(_))));
    }

    #[test]
    fn test_parse_misaligned() {
        assert!(matches!(Frame::parse(&[0u8; MIN_FRAME_SIZE + 5]), Err(CipherError::MalformedInput(_))));
    }
}
