//! schoolstatus — Command-line generator for school operational status templates
//!
//! Reads a Common Core of Data school roster and writes one
//! `<ST>/school_operational_status.json` per State under the output
//! directory, listing every LEA and school with the weekly in-person
//! instruction status set to "Not reported".
//!
//! Usage examples
//! --------------
//!
//! - Generate into the current directory
//!   $ schoolstatus ccd_sch_029_2021.csv
//!
//! - Generate elsewhere, with a different schema URL
//!   $ schoolstatus ccd.csv --outputdir=templates --schema=https://example.org/sos.schema.json
//!
//! - Same, configured through the environment
//!   $ SOS_CCDFILE=ccd.csv SOS_OUTPUTDIR=templates schoolstatus
//!
//! Configuration
//! -------------
//!
//! Built-in defaults, then `SOS_CCDFILE`, `SOS_OUTPUTDIR`, `SOS_CONFORMANCE`,
//! `SOS_SCHEMA`, `SOS_LOGLEVEL`, then command-line flags. Logs go to stdout.
mod args;

use crate::args::CliArgs;
use anyhow::Context;
use clap::Parser;
use schoolstatus_core::{run, GeneratorConfig, LogLevel};
use std::io::IsTerminal;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Resolve configuration once: environment first, then flags on top
    let config = GeneratorConfig::from_env()
        .context("invalid SOS_* environment configuration")?
        .with_overrides(args.into_overrides());

    init_logging(config.log_level);
    info!(
        ccd_file = %config.ccd_file.display(),
        output_dir = %config.output_dir.display(),
        conforms_to = %config.conforms_to,
        described_by = %config.described_by,
        log_level = %config.log_level,
        "configuration"
    );

    let report = run(&config).with_context(|| {
        format!(
            "generating templates from {}",
            config.ccd_file.display()
        )
    })?;

    info!(
        "wrote {} State files ({} LEAs, {} schools)",
        report.files.len(),
        report.stats.leas,
        report.stats.schools
    );
    Ok(())
}

/// Timestamp, level, file:line and message, to stdout.
fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::default().add_directive(LevelFilter::from_level(level.as_tracing_level()).into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}
