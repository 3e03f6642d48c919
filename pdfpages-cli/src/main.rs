//! pdfpages - Merge, remove, insert and split pages of PDF documents.

mod cli;

use clap::Parser;
use std::process;

use crate::cli::Cli;
use pdfpages::commands::execute;
use pdfpages::config::ReportFormat;
use pdfpages::error::PdfPagesError;
use pdfpages::output::{OutputFormatter, display_outcome, render_json};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        OutputFormatter::new(cli.quiet, cli.verbose).error(&format!("Error: {err}"));
        process::exit(err.exit_code());
    }
}

/// `RUST_LOG` wins over the default filter.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<(), PdfPagesError> {
    let config = cli.to_config()?;
    let args = cli.to_args();

    log::debug!("{} v{}: {args:?}", pdfpages::NAME, pdfpages::VERSION);

    let outcome = execute(&args, &config)?;

    match config.format {
        ReportFormat::Json => println!("{}", render_json(&outcome)?),
        ReportFormat::Text => display_outcome(&OutputFormatter::from_config(&config), &outcome),
    }

    Ok(())
}
