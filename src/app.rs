use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, warn};

use crate::cipher::{FileCipher, PasswordCipher};
use crate::config::{APP_NAME, DEFAULT_KEY_MATRIX, HILL_FILLER, PASSWORD_MIN_LENGTH};
use crate::file::File;
use crate::hill::{HillCipher, KeyMatrix};
use crate::processor::Processor;
use crate::types::{Algorithm, ProcessorMode};
use crate::ui::prompt::Prompt;

#[derive(Subcommand)]
pub enum Commands {
    /// Hill matrix cipher over the letters A-Z. Non-letters are dropped.
    Hill {
        #[arg(value_enum)]
        mode: ProcessorMode,

        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Key matrix entries, row-major, e.g. "7,8,10,3".
        #[arg(short, long)]
        key: Option<KeyMatrix>,

        /// Letter used to complete the last block.
        #[arg(short, long, default_value_t = HILL_FILLER)]
        filler: char,
    },

    /// PBKDF2 + AES-256-CBC. The password is always prompted for.
    Aes {
        #[arg(value_enum)]
        mode: ProcessorMode,

        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Parser)]
#[command(name = APP_NAME, version, about = "Encrypt files with a Hill matrix cipher or with PBKDF2 + AES-256-CBC.")]
pub struct App {
    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();
        let level = if app.verbose { Level::DEBUG } else { Level::WARN };
        let subscriber = tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(app)
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Hill { mode, input, output, key, filler } => {
                let key = key.unwrap_or_else(|| KeyMatrix::from_array(DEFAULT_KEY_MATRIX));
                if mode == ProcessorMode::Encrypt && !key.is_invertible() {
                    warn!(%key, "encrypting with a non-invertible key");
                    crate::ui::show_key_warning(&key);
                }
                let cipher = HillCipher::new(key).with_filler(filler)?;
                Self::run(cipher, Algorithm::Hill, mode, input, output).await
            }

            Commands::Aes { mode, input, output } => {
                // Fail on a bad path before asking for a password.
                File::new(&input).validate()?;

                let prompt = Prompt::new(PASSWORD_MIN_LENGTH);
                let password = match mode {
                    ProcessorMode::Encrypt => prompt.prompt_encryption_password()?,
                    ProcessorMode::Decrypt => prompt.prompt_decryption_password()?,
                };
                Self::run(PasswordCipher::new(password), Algorithm::Aes, mode, input, output).await
            }
        }
    }

    async fn run<C>(cipher: C, algorithm: Algorithm, mode: ProcessorMode, input_path: PathBuf, output_path: Option<PathBuf>) -> Result<()>
    where
        C: FileCipher + 'static,
    {
        let input = File::new(input_path);
        input.validate()?;
        let output = File::new(output_path.unwrap_or_else(|| input.output_path(mode, algorithm)));

        Processor::new(cipher, algorithm)
            .process(mode, &input, &output)
            .await
            .with_context(|| format!("{} with {algorithm} failed: {}", mode.label(), input.path().display()))?;

        crate::ui::show_success(mode, algorithm, output.path());

        Ok(())
    }
}
