//! Terminal interaction.
//!
//! - [`display`]: status lines for success and failure
//! - [`prompt`]: masked password prompts

pub mod display;
pub mod prompt;

pub use display::{show_failure, show_key_warning, show_success};
