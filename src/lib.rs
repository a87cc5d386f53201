//! hillcrypt - two small whole-file ciphers behind one command-line tool.
//!
//! - [`hill`]: Hill matrix cipher over `A`..=`Z` with exact modular inversion
//! - [`cipher`]: PBKDF2-HMAC-SHA256 key derivation with AES-256-CBC and PKCS#7
//!
//! Both implement [`cipher::FileCipher`], the encrypt/decrypt contract used by
//! the [`processor`].

pub mod app;
pub mod cipher;
pub mod config;
pub mod error;
pub mod file;
pub mod hill;
pub mod padding;
pub mod processor;
pub mod secret;
pub mod types;
pub mod ui;

pub use error::{CipherError, Result};
