//! Sieve CLI - ingestion gate for delimited data.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Scan {
            file,
            output,
            dirty_output,
            report,
            json,
            fail_on_dirty,
            delimiter,
            encoding,
            max_rows,
        } => commands::scan::run(commands::scan::ScanOptions {
            file,
            output,
            dirty_output,
            report,
            json,
            fail_on_dirty,
            delimiter,
            encoding,
            max_rows,
            verbose: cli.verbose,
        }),

        Commands::Rules { json } => commands::rules::run(json),

        Commands::Serve { port, host } => commands::serve::run(host, port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for reports. `RUST_LOG` wins over flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
