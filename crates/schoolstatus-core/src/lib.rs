// crates/schoolstatus-core/src/lib.rs

//! Turns a CCD school roster (one row per school) into per-State
//! `school_operational_status.json` templates listing every LEA and school,
//! with the weekly in-person instruction status left as "Not reported".
//!
//! ```no_run
//! use schoolstatus_core::{run, GeneratorConfig};
//!
//! let config = GeneratorConfig::from_env()?;
//! let report = run(&config)?;
//! println!("{} States written", report.stats.states);
//! # Ok::<(), schoolstatus_core::RosterError>(())
//! ```

pub mod common;
pub mod config;
pub mod emit;
pub mod error;
pub mod loader; // Adds `Roster::load_from_path` / `Roster::from_reader`
pub mod model;
pub mod pipeline;

// Re-exports
pub use crate::common::RosterStats;
pub use crate::config::{ConfigOverrides, GeneratorConfig, LogLevel};
pub use crate::emit::{generate, render_state, write_state_file, TemplateOptions, STATUS_FILE_NAME};
pub use crate::error::{Result, RosterError};
pub use crate::model::{LeaGroup, Roster, RosterRecord, School, StateGroup};
pub use crate::pipeline::{run, GenerationReport};
