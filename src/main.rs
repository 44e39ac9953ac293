//! hush - load encrypted environment files into your shell.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hush::cli::output;
use hush::cli::{execute, Cli};
use hush::core::constants;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for evaluable output
    let filter = EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("hush=debug")
        } else {
            EnvFilter::new("hush=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.opts) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
