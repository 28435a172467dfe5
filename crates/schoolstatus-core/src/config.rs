// crates/schoolstatus-core/src/config.rs

//! Layered run configuration: built-in defaults, then `SOS_*` environment
//! variables, then explicit overrides from the command line.

use crate::emit::TemplateOptions;
use crate::error::{Result, RosterError};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_CCD_FILE: &str = "ccd_sch_sas.csv";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const CONFORMANCE_URL: &str = "https://data.ed.gov/v1.0/schema/schooloperationalstatus";
pub const SCHEMA_URL: &str = "https://data.ed.gov/v1.0/schema/schooloperationalstatus.schema.json";

pub const ENV_CCD_FILE: &str = "SOS_CCDFILE";
pub const ENV_OUTPUT_DIR: &str = "SOS_OUTPUTDIR";
pub const ENV_CONFORMANCE: &str = "SOS_CONFORMANCE";
pub const ENV_SCHEMA: &str = "SOS_SCHEMA";
pub const ENV_LOG_LEVEL: &str = "SOS_LOGLEVEL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub const NAMES: [&'static str; 5] = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// `tracing` has no level above ERROR, so CRITICAL folds into it.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error | LogLevel::Critical => tracing::Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(RosterError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values given explicitly on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub ccd_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub conforms_to: Option<String>,
    pub described_by: Option<String>,
    pub log_level: Option<LogLevel>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub ccd_file: PathBuf,
    pub output_dir: PathBuf,
    pub conforms_to: String,
    pub described_by: String,
    pub log_level: LogLevel,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            ccd_file: PathBuf::from(DEFAULT_CCD_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            conforms_to: CONFORMANCE_URL.to_string(),
            described_by: SCHEMA_URL.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for the `SOS_*` keys.
    ///
    /// An unparseable `SOS_LOGLEVEL` is an error rather than a silent fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_CCD_FILE) {
            config.ccd_file = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_OUTPUT_DIR) {
            config.output_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup(ENV_CONFORMANCE) {
            config.conforms_to = v;
        }
        if let Some(v) = lookup(ENV_SCHEMA) {
            config.described_by = v;
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            config.log_level = v.parse()?;
        }

        Ok(config)
    }

    /// Command-line values win over anything already resolved.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(v) = overrides.ccd_file {
            self.ccd_file = v;
        }
        if let Some(v) = overrides.output_dir {
            self.output_dir = v;
        }
        if let Some(v) = overrides.conforms_to {
            self.conforms_to = v;
        }
        if let Some(v) = overrides.described_by {
            self.described_by = v;
        }
        if let Some(v) = overrides.log_level {
            self.log_level = v;
        }
        self
    }

    pub fn template(&self) -> TemplateOptions {
        TemplateOptions {
            conforms_to: self.conforms_to.clone(),
            described_by: self.described_by.clone(),
        }
    }
}
