//! CLI error types with miette diagnostics.
//!
//! Maps core and config failures into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use amphibia_config::ConfigError;
use amphibia_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const LOAD_FAILED: i32 = 7;
    pub const CONFIG: i32 = 78;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Loading ──────────────────────────────────────────────────────
    #[error("Failed to load amphibians from {url}")]
    #[diagnostic(
        code(amphibia::load_failed),
        help(
            "Check your network connection and that the service is reachable.\n\
             Run again with -v for details, or point at another server with --base-url."
        )
    )]
    LoadFailed { url: String },

    #[error("Loading was interrupted before it finished")]
    #[diagnostic(code(amphibia::interrupted))]
    Interrupted,

    // ── Setup ────────────────────────────────────────────────────────
    #[error("Could not set up the HTTP client: {0}")]
    #[diagnostic(
        code(amphibia::client_setup),
        help("Check the ca_cert path in your config, or use --insecure for test servers.")
    )]
    ClientSetup(#[from] CoreError),

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(amphibia::validation))]
    Validation { field: String, reason: String },

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(amphibia::config_exists),
        help("Use --force to overwrite it, or edit it with: amphibia config set <key> <value>")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(amphibia::config))]
    Config(#[from] ConfigError),

    // ── I/O ──────────────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(amphibia::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LoadFailed { .. } | Self::Interrupted => exit_code::LOAD_FAILED,
            Self::Validation { .. } | Self::ConfigExists { .. } | Self::Config(_) => {
                exit_code::CONFIG
            }
            Self::ClientSetup(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failures_map_to_load_exit_code() {
        let err = CliError::LoadFailed {
            url: "http://x/amphibians".into(),
        };
        assert_eq!(err.exit_code(), exit_code::LOAD_FAILED);
        assert_eq!(CliError::Interrupted.exit_code(), exit_code::LOAD_FAILED);
    }

    #[test]
    fn validation_maps_to_config_exit_code() {
        let err = CliError::Validation {
            field: "base_url".into(),
            reason: "relative URL without a base".into(),
        };
        assert_eq!(err.exit_code(), exit_code::CONFIG);
    }
}
