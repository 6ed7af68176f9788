//! List command handler.
//!
//! Drives a `ListLoader` and renders each of its states: a spinner while
//! loading, the list on success, a failure notice plus retry prompt on
//! error.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tabled::Tabled;

use amphibia_core::{Amphibian, HttpSource, ListLoader, LoadState, SourceConfig};

use crate::cli::{ListArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::{RenderOpts, util};

const DESCRIPTION_WIDTH: usize = 60;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AmphibianRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Image")]
    image_url: String,
}

impl From<&Amphibian> for AmphibianRow {
    fn from(a: &Amphibian) -> Self {
        Self {
            name: a.name.clone(),
            kind: a.kind.clone(),
            description: truncate(&a.description, DESCRIPTION_WIDTH),
            image_url: a.image_url.clone(),
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_owned();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

// ── Cards ───────────────────────────────────────────────────────────

fn render_card(a: &Amphibian, color: bool) -> String {
    if color {
        format!(
            "{} ({})\n  {}\n  {}",
            a.name.bold().green(),
            a.kind.dimmed(),
            a.description,
            a.image_url.underline().blue()
        )
    } else {
        format!("{} ({})\n  {}\n  {}", a.name, a.kind, a.description, a.image_url)
    }
}

fn render_items(items: &[Amphibian], opts: RenderOpts) -> String {
    output::render_list(
        opts.output,
        items,
        |a| AmphibianRow::from(a),
        |a| a.name.clone(),
        |a| render_card(a, opts.color),
    )
}

// ── Loading indicator ───────────────────────────────────────────────

fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Loading amphibians…");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn is_human(format: OutputFormat) -> bool {
    matches!(format, OutputFormat::Cards | OutputFormat::Table)
}

fn failure_notice(color: bool) -> String {
    let msg = "Failed to load amphibians.";
    if color {
        msg.red().to_string()
    } else {
        msg.to_owned()
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    args: ListArgs,
    source_config: &SourceConfig,
    opts: RenderOpts,
) -> Result<(), CliError> {
    let source = HttpSource::new(source_config)?;
    let endpoint = source
        .client()
        .endpoint_url()
        .map_or_else(|_| source_config.base_url.to_string(), |u| u.to_string());

    let loader = ListLoader::new(source);
    let mut states = loader.subscribe();

    loop {
        let pb = spinner(opts.quiet);
        let state = states.settled().await;
        pb.finish_and_clear();

        match state {
            Some(LoadState::Success(items)) => {
                tracing::debug!(count = items.len(), "rendering amphibians");
                if items.is_empty() && !opts.quiet && is_human(opts.output) {
                    eprintln!("No amphibians found.");
                }
                output::print_output(&render_items(&items, opts), opts.quiet);
                return Ok(());
            }
            Some(LoadState::Error) => {
                if !opts.quiet {
                    eprintln!("{}", failure_notice(opts.color));
                }
                if !args.no_retry
                    && util::can_prompt()
                    && util::confirm("Retry?", true)?
                {
                    drop(loader.retry());
                    continue;
                }
                return Err(CliError::LoadFailed { url: endpoint });
            }
            Some(LoadState::Loading) | None => return Err(CliError::Interrupted),
        }
    }
}
