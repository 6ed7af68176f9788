//! Config subcommand handlers.

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::{RenderOpts, util};

// ── Helpers ─────────────────────────────────────────────────────────

/// Ask for the handful of values a config file carries.
fn prompt_config(mut cfg: Config) -> Result<Config, CliError> {
    cfg.base_url = Input::new()
        .with_prompt("Service base URL")
        .default(cfg.base_url)
        .validate_with(|s: &String| -> Result<(), String> {
            s.parse::<url::Url>().map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(util::prompt_err)?;

    cfg.timeout = Input::new()
        .with_prompt("Request timeout (seconds)")
        .default(cfg.timeout)
        .interact_text()
        .map_err(util::prompt_err)?;

    Ok(cfg)
}

fn parse_bool(field: &str, value: &str) -> Result<bool, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("expected 'true' or 'false', got '{value}'"),
    })
}

/// Apply a single `key = value` assignment, validating the value.
fn apply_setting(cfg: &mut Config, key: &str, value: &str) -> Result<(), CliError> {
    match key {
        "base_url" => {
            value
                .parse::<url::Url>()
                .map_err(|e| CliError::Validation {
                    field: key.into(),
                    reason: format!("{e}: {value}"),
                })?;
            cfg.base_url = value.into();
        }
        "timeout" => {
            cfg.timeout = value.parse().map_err(|_| CliError::Validation {
                field: key.into(),
                reason: format!("expected a number of seconds, got '{value}'"),
            })?;
        }
        "insecure" => cfg.insecure = parse_bool(key, value)?,
        "ca_cert" => {
            cfg.ca_cert = if value.is_empty() {
                None
            } else {
                Some(value.into())
            };
        }
        "defaults.output" => {
            <OutputFormat as clap::ValueEnum>::from_str(value, true).map_err(|reason| {
                CliError::Validation {
                    field: key.into(),
                    reason,
                }
            })?;
            cfg.defaults.output = value.into();
        }
        "defaults.color" => {
            <crate::cli::ColorMode as clap::ValueEnum>::from_str(value, true).map_err(
                |reason| CliError::Validation {
                    field: key.into(),
                    reason,
                },
            )?;
            cfg.defaults.color = value.into();
        }
        other => {
            return Err(CliError::Validation {
                field: "key".into(),
                reason: format!(
                    "unknown key '{other}' (expected base_url, timeout, insecure, ca_cert, \
                     defaults.output or defaults.color)"
                ),
            });
        }
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, opts: RenderOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { force } => {
            let path = config::config_path();
            if path.exists() && !force {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let cfg = if util::can_prompt() {
                prompt_config(Config::default())?
            } else {
                Config::default()
            };

            let written = config::save_config(&cfg)?;
            if !opts.quiet {
                eprintln!("Config written to {}", written.display());
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = match opts.output {
                OutputFormat::Json => output::render_json_pretty(&cfg),
                OutputFormat::JsonCompact => output::render_json_compact(&cfg),
                OutputFormat::Yaml => output::render_yaml(&cfg),
                OutputFormat::Cards | OutputFormat::Table | OutputFormat::Plain => {
                    toml::to_string_pretty(&cfg).map_err(amphibia_config::ConfigError::from)?
                }
            };
            output::print_output(out.trim_end(), opts.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let mut cfg = config::load_config_file(&config::config_path())?;
            apply_setting(&mut cfg, &key, &value)?;
            config::save_config(&cfg)?;
            if !opts.quiet {
                eprintln!("Set {key} = {value}");
            }
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), opts.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn set_known_keys() {
        let mut cfg = Config::default();
        apply_setting(&mut cfg, "base_url", "http://localhost:9000/").unwrap();
        apply_setting(&mut cfg, "timeout", "5").unwrap();
        apply_setting(&mut cfg, "insecure", "true").unwrap();
        apply_setting(&mut cfg, "defaults.output", "table").unwrap();

        assert_eq!(cfg.base_url, "http://localhost:9000/");
        assert_eq!(cfg.timeout, 5);
        assert!(cfg.insecure);
        assert_eq!(cfg.defaults.output, "table");
    }

    #[test]
    fn empty_ca_cert_clears_it() {
        let mut cfg = Config::default();
        apply_setting(&mut cfg, "ca_cert", "/tmp/ca.pem").unwrap();
        assert!(cfg.ca_cert.is_some());
        apply_setting(&mut cfg, "ca_cert", "").unwrap();
        assert!(cfg.ca_cert.is_none());
    }

    #[test]
    fn rejects_bad_values_and_unknown_keys() {
        let mut cfg = Config::default();
        assert!(apply_setting(&mut cfg, "timeout", "soon").is_err());
        assert!(apply_setting(&mut cfg, "base_url", "not a url").is_err());
        assert!(apply_setting(&mut cfg, "defaults.output", "xml").is_err());
        assert!(apply_setting(&mut cfg, "profile", "home").is_err());
        assert_eq!(cfg, Config::default());
    }
}
