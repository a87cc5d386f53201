//! High-level file encryption and decryption.

use std::sync::Arc;

use anyhow::{Context, Result, ensure};
use tracing::{debug, info};

use crate::cipher::FileCipher;
use crate::file::File;
use crate::types::{Algorithm, ProcessorMode};

/// Applies one cipher to whole files.
///
/// The transform is CPU-bound (key derivation dominates for AES), so it runs
/// on tokio's blocking pool while file I/O stays async.
pub struct Processor<C> {
    cipher: Arc<C>,
    algorithm: Algorithm,
}

impl<C> Processor<C>
where
    C: FileCipher + 'static,
{
    pub fn new(cipher: C, algorithm: Algorithm) -> Self {
        Self { cipher: Arc::new(cipher), algorithm }
    }

    /// Reads `input`, transforms it and writes the result to `output`.
    ///
    /// Nothing is written if the transform fails.
    pub async fn process(&self, mode: ProcessorMode, input: &File, output: &File) -> Result<()> {
        ensure!(input.path() != output.path(), "input and output are the same file: {}", input.path().display());

        let data = input.read().await?;
        debug!(algorithm = %self.algorithm, %mode, bytes = data.len(), "read input");

        let cipher = Arc::clone(&self.cipher);
        let result = tokio::task::spawn_blocking(move || match mode {
            ProcessorMode::Encrypt => cipher.encrypt(&data),
            ProcessorMode::Decrypt => cipher.decrypt(&data),
        })
        .await
        .context("cipher task did not complete")??;

        output.write(&result).await?;
        info!(algorithm = %self.algorithm, %mode, bytes = result.len(), output = %output.path().display(), "done");

        Ok(())
    }
}
