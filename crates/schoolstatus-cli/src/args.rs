use clap::Parser;
use schoolstatus_core::{ConfigOverrides, LogLevel};
use std::path::PathBuf;

/// CLI arguments for schoolstatus
///
/// Every option is optional here: anything left out falls back to the
/// matching `SOS_*` environment variable, then to the built-in default.
#[derive(Debug, Parser)]
#[command(
    name = "schoolstatus",
    version,
    about = "Generate JSON templates for aggregating school operational status"
)]
pub struct CliArgs {
    /// Common Core of Data school file (CSV, or .csv.gz) with ST, LEAID, LEA_NAME, NCESSCH and SCH_NAME columns
    #[arg(value_name = "CCD_FILE")]
    pub input: Option<PathBuf>,

    /// Same as CCD_FILE; the positional argument wins if both are given [env: SOS_CCDFILE]
    #[arg(long = "ccdfile", value_name = "PATH")]
    pub ccd_file: Option<PathBuf>,

    /// Directory where the per-State template directories are written [env: SOS_OUTPUTDIR]
    #[arg(long = "outputdir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// URL to embed in the conformsTo element [env: SOS_CONFORMANCE]
    #[arg(long = "conformance", value_name = "URL")]
    pub conforms_to: Option<String>,

    /// URL of the reference JSON schema, embedded as describedBy [env: SOS_SCHEMA]
    #[arg(long = "schema", value_name = "URL")]
    pub described_by: Option<String>,

    /// One of DEBUG, INFO, WARNING, ERROR, CRITICAL [env: SOS_LOGLEVEL]
    #[arg(long = "loglevel", value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    s.parse::<LogLevel>().map_err(|e| e.to_string())
}

impl CliArgs {
    pub fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            ccd_file: self.input.or(self.ccd_file),
            output_dir: self.output_dir,
            conforms_to: self.conforms_to,
            described_by: self.described_by,
            log_level: self.log_level,
        }
    }
}
