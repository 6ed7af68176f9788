//! Shared helpers for command handlers.

use std::io::IsTerminal;

use crate::error::CliError;

/// Whether we can ask the user a question (stdin and stderr are terminals).
pub fn can_prompt() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Prompt for a yes/no answer, defaulting to `default`.
pub fn confirm(message: &str, default: bool) -> Result<bool, CliError> {
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
