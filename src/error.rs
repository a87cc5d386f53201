//! # Error Types
//!
//! Errors raised by the cipher core. The application layer wraps these in
//! [`anyhow::Error`] with context about the file being processed.

use thiserror::Error;

/// Convenience alias for results produced by the cipher core.
pub type Result<T, E = CipherError> = std::result::Result<T, E>;

/// The error type for all cipher operations.
#[derive(Error, Debug)]
pub enum CipherError {
    /// The key matrix determinant has no inverse modulo 26.
    ///
    /// Raised by Hill decoding before any block is transformed.
    #[error("key matrix is not invertible modulo 26 (determinant {determinant})")]
    InvalidKey { determinant: i64 },

    /// The key matrix is empty, not square, or could not be parsed.
    #[error("invalid key matrix: {0}")]
    InvalidMatrix(String),

    /// Ciphertext is not aligned to the block size or is too short.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// PKCS#7 padding check failed after decryption.
    ///
    /// Without an integrity tag a wrong password and a corrupted file look
    /// the same, so both end up here.
    #[error("invalid padding (wrong password or corrupted data)")]
    InvalidPadding,

    /// Password-based key derivation failed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// The operating system random source failed.
    #[error("random generator failed: {0}")]
    Random(String),

    /// I/O error at the file boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
