use aes::Aes256;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::config::{BLOCK_SIZE, IV_SIZE, KEY_SIZE};
use crate::error::{CipherError, Result};

type Encryptor = cbc::Encryptor<Aes256>;
type Decryptor = cbc::Decryptor<Aes256>;

/// AES-256 in CBC mode for one key/IV pair.
///
/// Works on block-aligned buffers only; padding is applied by the caller.
pub struct AesCbc<'k> {
    key: &'k [u8; KEY_SIZE],
    iv: [u8; IV_SIZE],
}

impl<'k> AesCbc<'k> {
    #[inline]
    pub fn new(key: &'k [u8; KEY_SIZE], iv: [u8; IV_SIZE]) -> Self {
        Self { key, iv }
    }

    pub fn encrypt(&self, padded: &[u8]) -> Result<Vec<u8>> {
        ensure_aligned(padded)?;
        Ok(Encryptor::new(self.key.into(), (&self.iv).into()).encrypt_padded_vec_mut::<NoPadding>(padded))
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ensure_aligned(ciphertext)?;
        Decryptor::new(self.key.into(), (&self.iv).into())
            .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
            .map_err(|_| CipherError::MalformedInput("aes-cbc decryption failed".into()))
    }
}

fn ensure_aligned(data: &[u8]) -> Result<()> {
    if data.is_empty() || !data.len().is_multiple_of(BLOCK_SIZE) {
        return Err(CipherError::MalformedInput(format!("length {} is not a positive multiple of {BLOCK_SIZE}", data.len())));
    }
    Ok(())
}
