//! Common type definitions.
//!
//! - [`ProcessorMode`]: encryption or decryption
//! - [`Algorithm`]: which cipher processes the file

use std::fmt::{Display, Formatter, Result};

use clap::ValueEnum;
use strum::{Display as StrumDisplay, EnumIter};

use crate::config::{AES_EXTENSION, HILL_EXTENSION};

/// The direction of a file operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProcessorMode {
    Encrypt,
    Decrypt,
}

impl ProcessorMode {
    /// Human-readable label for user-facing output.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
        }
    }

    /// Past-tense verb used in status lines.
    #[inline]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypted",
            Self::Decrypt => "decrypted",
        }
    }
}

impl Display for ProcessorMode {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// The cipher applied to a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, StrumDisplay, EnumIter)]
pub enum Algorithm {
    /// Hill matrix cipher over `A`..=`Z`.
    #[strum(to_string = "hill")]
    Hill,

    /// PBKDF2 + AES-256-CBC.
    #[strum(to_string = "aes-256-cbc")]
    Aes,
}

impl Algorithm {
    /// Extension appended to encrypted output and stripped on decrypt.
    #[inline]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Hill => HILL_EXTENSION,
            Self::Aes => AES_EXTENSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::Hill.to_string(), "hill");
        assert_eq!(Algorithm::Aes.to_string(), "aes-256-cbc");
    }

    #[test]
    fn test_extensions_are_distinct() {
        let extensions: Vec<&str> = Algorithm::iter().map(Algorithm::extension).collect();
        assert_eq!(extensions, vec![".hill", ".enc"]);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(ProcessorMode::Encrypt.to_string(), "Encrypt");
        assert_eq!(ProcessorMode::Decrypt.past_tense(), "decrypted");
    }
}
