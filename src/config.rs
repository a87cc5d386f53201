//! Global Configuration Constants
//!
//! Every tunable used by the two ciphers and by the command-line front end
//! lives here. The values are part of the on-disk contract: changing any of
//! the block-cipher sizes or the iteration count makes previously written
//! files unreadable.

/// Application name used in user-facing output.
pub const APP_NAME: &str = "hillcrypt";

// === Hill Matrix Cipher ===

/// Number of symbols in the working alphabet (`A`..=`Z`).
pub const ALPHABET_SIZE: i64 = 26;

/// Letter appended to the last block when the text length is not a
/// multiple of the key order.
///
/// The padding is not reversible: decoding keeps the filler letters.
pub const HILL_FILLER: char = 'K';

/// Key matrix used when none is given on the command line.
///
/// Determinant is `7*3 - 8*10 = -59`, which is `19 (mod 26)` and coprime
/// with 26, so the matrix is invertible.
pub const DEFAULT_KEY_MATRIX: [[i64; 2]; 2] = [[7, 8], [10, 3]];

/// Largest accepted key order.
///
/// Inversion uses cofactor expansion, whose cost grows factorially with the
/// order.
pub const MAX_KEY_ORDER: usize = 8;

/// File extension appended to Hill-encrypted output.
pub const HILL_EXTENSION: &str = ".hill";

// === PBKDF2 + AES-256-CBC pipeline ===

/// PBKDF2 iteration count.
///
/// The dominant cost of every encrypt and decrypt call.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Length of the per-file salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Length of the CBC initialization vector in bytes.
pub const IV_SIZE: usize = 16;

/// Length of the derived AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// AES block size; ciphertext is always a positive multiple of this.
pub const BLOCK_SIZE: usize = 16;

/// Size of the fixed frame header: `salt || iv`.
pub const HEADER_SIZE: usize = SALT_SIZE + IV_SIZE;

/// Smallest well-formed frame: the header plus one padded block.
pub const MIN_FRAME_SIZE: usize = HEADER_SIZE + BLOCK_SIZE;

/// File extension appended to AES-encrypted output.
pub const AES_EXTENSION: &str = ".enc";

/// Extension used for decrypted output when the input carries no known
/// extension to strip.
pub const DECRYPTED_EXTENSION: &str = ".dec";

// === User interface ===

/// Minimum length for a newly chosen encryption password.
///
/// Decryption only requires a non-empty password so files written with
/// shorter passwords stay readable.
pub const PASSWORD_MIN_LENGTH: usize = 8;
