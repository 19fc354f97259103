//! Cratedig CLI - Extract a record collection from a catalog release export.

use clap::Parser;
use cratedig_cli::{execute_extract, Cli, Config, Destination};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Log to stderr; stdout may carry the document
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> cratedig_cli::Result<()> {
    let config = Config::resolve(cli)?;

    let destination = if cli.stdout {
        Destination::Stdout
    } else {
        Destination::File(config.paths.output.clone())
    };

    let summary = execute_extract(&config, &destination, cli.compact)?;

    if !cli.quiet {
        eprintln!("{}", summary.summary());
    }
    Ok(())
}
