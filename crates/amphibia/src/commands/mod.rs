//! Command dispatch.

pub mod config_cmd;
pub mod list;
pub mod util;

use crate::cli::{ColorMode, OutputFormat};

/// Presentation settings resolved from flags and config.
#[derive(Debug, Clone, Copy)]
pub struct RenderOpts {
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

impl RenderOpts {
    pub fn new(output: OutputFormat, color: ColorMode, quiet: bool) -> Self {
        Self {
            output,
            color: crate::output::should_color(color),
            quiet,
        }
    }
}
