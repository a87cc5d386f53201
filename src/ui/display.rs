//! Status output.

use std::path::Path;

use console::style;

use crate::hill::KeyMatrix;
use crate::types::{Algorithm, ProcessorMode};

/// Formats the one-line summary printed after a successful run.
pub fn success_message(mode: ProcessorMode, algorithm: Algorithm, path: &Path) -> String {
    format!("File {} with {algorithm}: {}", mode.past_tense(), path.display())
}

pub fn show_success(mode: ProcessorMode, algorithm: Algorithm, path: &Path) {
    println!("{} {}", style("✓").green(), style(success_message(mode, algorithm, path)).bold());
}

pub fn show_failure(error: &anyhow::Error) {
    eprintln!("{} {}", style("✗").red(), style(format!("{error:#}")).bold());
}

/// Warns that a key can encrypt but will never decrypt.
pub fn show_key_warning(key: &KeyMatrix) {
    eprintln!(
        "{} {}",
        style("!").yellow(),
        style(format!("key matrix {key} is not invertible modulo 26 (determinant {}); the output cannot be decrypted", key.determinant())).yellow()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message() {
        let message = success_message(ProcessorMode::Encrypt, Algorithm::Aes, Path::new("a.txt.enc"));
        assert_eq!(message, "File encrypted with aes-256-cbc: a.txt.enc");
    }
}
