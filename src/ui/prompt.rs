//! Interactive password prompts.
//!
//! The password is only ever read from the terminal, never from arguments,
//! so it does not end up in shell history.

use anyhow::{Result, anyhow};
use inquire::{Password as PasswordPrompt, PasswordDisplayMode, min_length, required};

use crate::secret::Password;

/// Password prompt with a minimum length for new passwords.
pub struct Prompt {
    password_min_length: usize,
}

impl Prompt {
    pub fn new(password_min_length: usize) -> Self {
        Self { password_min_length }
    }

    /// Asks for a new password twice and requires the entries to match.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is cancelled or the terminal fails.
    pub fn prompt_encryption_password(&self) -> Result<Password> {
        PasswordPrompt::new("Enter encryption password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_validator(required!("password cannot be empty"))
            .with_validator(min_length!(self.password_min_length, format!("password must be at least {} characters long", self.password_min_length)))
            .with_custom_confirmation_message("Confirm password:")
            .with_custom_confirmation_error_message("passwords do not match")
            .prompt()
            .map(Password::from_string)
            .map_err(|e| anyhow!("password input failed: {e}"))
    }

    /// Asks once for the password of an existing file.
    ///
    /// A wrong password is only noticed later, by the padding check.
    pub fn prompt_decryption_password(&self) -> Result<Password> {
        PasswordPrompt::new("Enter decryption password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_validator(required!("password cannot be empty"))
            .without_confirmation()
            .prompt()
            .map(Password::from_string)
            .map_err(|e| anyhow!("password input failed: {e}"))
    }
}
