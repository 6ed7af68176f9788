mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::RenderOpts;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let opts = RenderOpts::new(
        config::resolve_output(&cfg, &cli.global),
        config::resolve_color(&cfg, &cli.global),
        cli.global.quiet,
    );

    match cli.command {
        // Config commands don't touch the network
        Command::Config(args) => commands::config_cmd::handle(args, opts),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "amphibia", &mut std::io::stdout());
            Ok(())
        }

        Command::List(args) => {
            let source = config::resolve_source(&cfg, &cli.global)?;
            tracing::debug!(base_url = %source.base_url, "loading amphibians");
            commands::list::handle(args, &source, opts).await
        }
    }
}
