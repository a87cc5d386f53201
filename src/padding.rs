//! PKCS#7 padding over 16-byte AES blocks.
//!
//! Padding always adds between 1 and 16 bytes, so an aligned input gains a
//! full block. Unpadding is strict: the pad value must be in `1..=16` and
//! every pad byte must carry it.

use block_padding::array::typenum::{U16, Unsigned};
use block_padding::array::Array;
use block_padding::{PaddedData, Padding, Pkcs7};

use crate::config::BLOCK_SIZE;
use crate::error::{CipherError, Result};

type Block = U16;

/// Pads `data` to a positive multiple of [`BLOCK_SIZE`].
pub fn pad(data: &[u8]) -> Result<Vec<u8>> {
    match Pkcs7::pad_detached::<Block>(data) {
        PaddedData::Pad { blocks, tail_block } => {
            let mut result = Vec::with_capacity((blocks.len() + 1) * Block::USIZE);
            for block in blocks {
                result.extend_from_slice(block.as_slice());
            }
            result.extend_from_slice(tail_block.as_slice());
            Ok(result)
        }
        PaddedData::NoPad { blocks } => Ok(blocks.iter().flat_map(|block| block.iter().copied()).collect()),
        PaddedData::Error => Err(CipherError::InvalidPadding),
    }
}

/// Strips and validates PKCS#7 padding.
///
/// # Errors
///
/// - [`CipherError::MalformedInput`] if `data` is empty or not block aligned.
/// - [`CipherError::InvalidPadding`] if the trailing bytes are not valid padding.
pub fn unpad(data: &[u8]) -> Result<Vec<u8>> {
    if data.is_empty() || !data.len().is_multiple_of(BLOCK_SIZE) {
        return Err(CipherError::MalformedInput(format!("padded length {} is not a positive multiple of {BLOCK_SIZE}", data.len())));
    }

    let blocks: Vec<Array<u8, Block>> = data
        .chunks_exact(Block::USIZE)
        .map(|chunk| {
            let mut block = Array::default();
            block.copy_from_slice(chunk);
            block
        })
        .collect();

    Pkcs7::unpad_blocks::<Block>(&blocks).map(<[u8]>::to_vec).map_err(|_| CipherError::InvalidPadding)
}
