//! # Hill Matrix Cipher
//!
//! A classical linear block cipher over the 26-letter alphabet. Text is
//! reduced to its letters, split into blocks of `n` indices (where `n` is the
//! key order), and each block is multiplied by the key matrix modulo 26.
//!
//! Two properties of the transform are deliberate and visible to callers:
//!
//! - Non-letters are dropped on both encode and decode; they never round-trip.
//! - The final block is padded with a filler letter and that padding is kept
//!   by decode, since the ciphertext carries no length marker.

pub mod alphabet;
pub mod matrix;

use tracing::debug;

pub use matrix::KeyMatrix;

use crate::cipher::FileCipher;
use crate::config::{DEFAULT_KEY_MATRIX, HILL_FILLER};
use crate::error::{CipherError, Result};

/// A Hill cipher bound to one key matrix and filler letter.
#[derive(Clone, Debug)]
pub struct HillCipher {
    key: KeyMatrix,
    filler: i64,
}

impl HillCipher {
    /// Creates a cipher with the default filler letter.
    ///
    /// The key is not checked for invertibility here: encoding works with any
    /// square matrix, and [`HillCipher::decode`] reports a bad key.
    pub fn new(key: KeyMatrix) -> Self {
        let filler = alphabet::letter_index(HILL_FILLER).unwrap_or_default();
        Self { key, filler }
    }

    /// Replaces the filler letter used to complete the final block.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MalformedInput`] if `filler` is not an ASCII letter.
    pub fn with_filler(mut self, filler: char) -> Result<Self> {
        self.filler = alphabet::letter_index(filler).ok_or_else(|| CipherError::MalformedInput(format!("filler {filler:?} is not an ASCII letter")))?;
        Ok(self)
    }

    /// Encodes the letters of `text`.
    ///
    /// Lower-case letters are treated as upper-case; everything else is
    /// discarded. The output length is the letter count rounded up to a
    /// multiple of the key order.
    pub fn encode(&self, text: &str) -> String {
        let n = self.key.order();
        let mut indices = alphabet::to_indices(text);

        let remainder = indices.len() % n;
        if remainder != 0 {
            indices.resize(indices.len() + n - remainder, self.filler);
        }

        debug!(letters = indices.len(), order = n, "hill encode");
        let encoded: Vec<i64> = indices.chunks_exact(n).flat_map(|block| self.key.apply(block)).collect();
        alphabet::to_text(&encoded)
    }

    /// Decodes the letters of `text`.
    ///
    /// # Errors
    ///
    /// - [`CipherError::InvalidKey`] if the key has no inverse modulo 26. This
    ///   is checked first, whatever the input.
    /// - [`CipherError::MalformedInput`] if the letter count is not a multiple
    ///   of the key order.
    pub fn decode(&self, text: &str) -> Result<String> {
        let inverse = self.key.inverse_mod()?;

        let n = self.key.order();
        let indices = alphabet::to_indices(text);
        if indices.len() % n != 0 {
            return Err(CipherError::MalformedInput(format!("{} letters is not a multiple of the block size {n}", indices.len())));
        }

        debug!(letters = indices.len(), order = n, "hill decode");
        let decoded: Vec<i64> = indices.chunks_exact(n).flat_map(|block| inverse.apply(block)).collect();
        Ok(alphabet::to_text(&decoded))
    }
}

impl Default for HillCipher {
    fn default() -> Self {
        Self::new(KeyMatrix::from_array(DEFAULT_KEY_MATRIX))
    }
}

impl FileCipher for HillCipher {
    fn encrypt(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encode(&String::from_utf8_lossy(input)).into_bytes())
    }

    fn decrypt(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(self.decode(&String::from_utf8_lossy(input))?.into_bytes())
    }
}

/// Encodes `text` with `key` and the default filler.
pub fn encode(text: &str, key: &KeyMatrix) -> String {
    HillCipher::new(key.clone()).encode(text)
}

/// Decodes `text` with `key`.
///
/// # Errors
///
/// See [`HillCipher::decode`].
pub fn decode(text: &str, key: &KeyMatrix) -> Result<String> {
    HillCipher::new(key.clone()).decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_key() -> KeyMatrix {
        KeyMatrix::from_array([[7, 8], [10, 3]])
    }

    #[test]
    fn test_encode_act() {
        assert_eq!(encode("ACT", &default_key()), "QGFM");
    }

    #[test]
    fn test_decode_keeps_filler() {
        let key = default_key();
        assert_eq!(decode("QGFM", &key).unwrap(), "ACTK");
    }

    #[test]
    fn test_roundtrip_even_length() {
        let key = default_key();
        let encoded = encode("HELLOWORLD", &key);
        assert_eq!(encoded.len(), 10);
        assert_eq!(decode(&encoded, &key).unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_roundtrip_strips_and_uppercases() {
        let key = default_key();
        let encoded = encode("Attack at dawn!", &key);
        assert_eq!(decode(&encoded, &key).unwrap(), "ATTACKATDAWN");
    }

    #[test]
    fn test_roundtrip_3x3() {
        let key = KeyMatrix::from_array([[6, 24, 1], [13, 16, 10], [20, 17, 15]]);
        assert_eq!(encode("ACT", &key), "POH");
        assert_eq!(decode("POH", &key).unwrap(), "ACT");

        let encoded = encode("HELLO", &key);
        assert_eq!(decode(&encoded, &key).unwrap(), "HELLOK");
    }

    #[test]
    fn test_custom_filler() {
        let cipher = HillCipher::new(KeyMatrix::from_array([[3, 3], [2, 5]])).with_filler('x').unwrap();
        let encoded = cipher.encode("ABC");
        assert_eq!(cipher.decode(&encoded).unwrap(), "ABCX");
        assert!(HillCipher::default().with_filler('3').is_err());
    }

    #[test]
    fn test_empty_input() {
        let key = default_key();
        assert_eq!(encode("", &key), "");
        assert_eq!(encode("123 !?", &key), "");
        assert_eq!(decode("", &key).unwrap(), "");
    }

    #[test]
    fn test_decode_invalid_key() {
        let key = KeyMatrix::from_array([[2, 4], [6, 8]]);
        for text in ["", "AB", "ABC", "QGFM"] {
            assert!(matches!(decode(text, &key), Err(CipherError::InvalidKey { determinant: 18 })));
        }
    }

    #[test]
    fn test_decode_determinants_sharing_factor_with_26() {
        for rows in [[[1, 2], [2, 4]], [[2, 0], [0, 1]], [[1, 0], [0, 13]], [[2, 0], [0, 13]]] {
            let key = KeyMatrix::from_array(rows);
            assert!(matches!(decode("ABCD", &key), Err(CipherError::InvalidKey { .. })));
        }
    }

    #[test]
    fn test_roundtrip_key_with_huge_entries() {
        let key: KeyMatrix = "5200000007,8,10,5200000003".parse().unwrap();
        assert_eq!(encode("ACT", &key), "QGFM");
        assert_eq!(decode("QGFM", &key).unwrap(), "ACTK");

        let key = KeyMatrix::new(vec![vec![i64::MAX, i64::MIN], vec![i64::MIN, 1]]).unwrap();
        let encoded = encode("MEETMEATNOON", &key);
        assert_eq!(decode(&encoded, &key).unwrap(), "MEETMEATNOON");
    }

    #[test]
    fn test_encode_does_not_check_key() {
        let key = KeyMatrix::from_array([[2, 4], [6, 8]]);
        assert_eq!(encode("AB", &key).len(), 2);
    }

    #[test]
    fn test_decode_misaligned() {
        assert!(matches!(decode("ABC", &default_key()), Err(CipherError::MalformedInput(_))));
    }

    #[test]
    fn test_file_cipher_bytes() {
        let cipher = HillCipher::default();
        let encrypted = cipher.encrypt(b"act\n").unwrap();
        assert_eq!(encrypted, b"QGFM");
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), b"ACTK");
    }
}
