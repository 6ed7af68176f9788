//! CLI configuration: thin wrapper around `amphibia_config`.
//!
//! Re-exports the shared types and layers `GlobalOpts` flag overrides
//! (--base-url, --timeout, --insecure, ...) on top of the config file.

use std::time::Duration;

use amphibia_core::{SourceConfig, TlsVerification};

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use amphibia_config::{
    Config, config_path, load_config_file, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Translate the config file + global flags into a `SourceConfig`.
///
/// CLI flag overrides take priority over config values.
pub fn resolve_source(config: &Config, global: &GlobalOpts) -> Result<SourceConfig, CliError> {
    let mut source = config.source_config()?;

    // 1. Base URL (flag > env > config)
    if let Some(ref url_str) = global.base_url {
        source.base_url = url_str.parse().map_err(|_| CliError::Validation {
            field: "base-url".into(),
            reason: format!("invalid URL: {url_str}"),
        })?;
    }

    // 2. TLS
    if global.insecure {
        source.tls = TlsVerification::DangerAcceptInvalid;
    }

    // 3. Timeout
    if let Some(secs) = global.timeout {
        source.timeout = Duration::from_secs(secs);
    }

    Ok(source)
}

/// Output format: flag > config default > cards.
pub fn resolve_output(config: &Config, global: &GlobalOpts) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        clap::ValueEnum::from_str(&config.defaults.output, true).unwrap_or(OutputFormat::Cards)
    })
}

/// Color mode: flag > config default > auto.
pub fn resolve_color(config: &Config, global: &GlobalOpts) -> ColorMode {
    global.color.unwrap_or_else(|| {
        clap::ValueEnum::from_str(&config.defaults.color, true).unwrap_or(ColorMode::Auto)
    })
}
