//! Whole-file I/O at the edge of the program.
//!
//! Files are read and written in one piece; there is no streaming. Output
//! paths are derived from the input path, the operation and the algorithm.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use tokio::fs;

use crate::config::DECRYPTED_EXTENSION;
use crate::types::{Algorithm, ProcessorMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    /// Default output path for this file.
    ///
    /// Encrypting appends the algorithm extension. Decrypting strips it when
    /// present and otherwise appends `.dec`, so the input is never the target.
    pub fn output_path(&self, mode: ProcessorMode, algorithm: Algorithm) -> PathBuf {
        let extension = algorithm.extension();
        match mode {
            ProcessorMode::Encrypt => {
                let mut name = self.path.as_os_str().to_os_string();
                name.push(extension);
                PathBuf::from(name)
            }

            ProcessorMode::Decrypt => self.path.to_string_lossy().strip_suffix(extension).filter(|stem| !stem.is_empty()).map_or_else(
                || {
                    let mut name = self.path.as_os_str().to_os_string();
                    name.push(DECRYPTED_EXTENSION);
                    PathBuf::from(name)
                },
                PathBuf::from,
            ),
        }
    }

    /// Checks that this path names an existing regular file.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.exists(), "file not found: {}", self.path.display());
        ensure!(!self.is_dir(), "path is a directory: {}", self.path.display());
        Ok(())
    }

    pub async fn read(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).await.with_context(|| format!("failed to read file: {}", self.path.display()))
    }

    /// Writes `data`, creating parent directories and truncating any
    /// existing file.
    pub async fn write(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }

        fs::write(&self.path, data).await.with_context(|| format!("failed to write file: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_output_path_encrypt() {
        let file = File::new("notes.txt");
        assert_eq!(file.output_path(ProcessorMode::Encrypt, Algorithm::Hill), PathBuf::from("notes.txt.hill"));
        assert_eq!(file.output_path(ProcessorMode::Encrypt, Algorithm::Aes), PathBuf::from("notes.txt.enc"));
    }

    #[test]
    fn test_output_path_decrypt() {
        assert_eq!(File::new("notes.txt.enc").output_path(ProcessorMode::Decrypt, Algorithm::Aes), PathBuf::from("notes.txt"));
        assert_eq!(File::new("notes.txt.hill").output_path(ProcessorMode::Decrypt, Algorithm::Hill), PathBuf::from("notes.txt"));
        assert_eq!(File::new("cipher.bin").output_path(ProcessorMode::Decrypt, Algorithm::Aes), PathBuf::from("cipher.bin.dec"));
        assert_eq!(File::new(".enc").output_path(ProcessorMode::Decrypt, Algorithm::Aes), PathBuf::from(".enc.dec"));
    }

    #[test]
    fn test_validate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");

        assert!(File::new(&path).validate().is_err());
        assert!(File::new(dir.path()).validate().is_err());

        std::fs::write(&path, b"data").unwrap();
        assert!(File::new(&path).validate().is_ok());
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let file = File::new(dir.path().join("nested").join("out.bin"));

        file.write(b"\x00\x01binary").await.unwrap();
        assert_eq!(file.read().await.unwrap(), b"\x00\x01binary");
    }
}
