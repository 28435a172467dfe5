// crates/schoolstatus-core/src/emit/mod.rs

//! # Template Emitter
//!
//! One directory per State under the output root, each holding a single
//! `school_operational_status.json`. States are written strictly in order;
//! the first failure stops the run and earlier files are left in place.

use crate::error::{Result, RosterError};
use crate::model::{Roster, StateGroup};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

mod template;

pub use template::{
    render_state, TemplateOptions, NOT_REPORTED, REPORTING_PERIOD_START, STATUS_COMMENTS,
};

pub const STATUS_FILE_NAME: &str = "school_operational_status.json";

/// Writes `<output_root>/<ST>/school_operational_status.json`, truncating
/// any previous file, and returns its path.
pub fn write_state_file(
    output_root: &Path,
    state: &StateGroup,
    options: &TemplateOptions,
) -> Result<PathBuf> {
    let dir = state_dir(output_root, &state.code)?;
    fs::create_dir_all(&dir).map_err(|source| RosterError::Output {
        path: dir.clone(),
        source,
    })?;

    let path = dir.join(STATUS_FILE_NAME);
    let file = File::create(&path).map_err(|source| RosterError::Output {
        path: path.clone(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    render_state(&mut writer, state, options)?;
    writer.flush().map_err(|source| RosterError::Output {
        path: path.clone(),
        source,
    })?;

    debug!(
        state = %state.code,
        leas = state.leas.len(),
        schools = state.school_count(),
        "wrote {}",
        path.display()
    );
    Ok(path)
}

/// The State's directory under `output_root`. The code must be exactly one
/// plain path component, so nothing lands outside the root or in it directly.
fn state_dir(output_root: &Path, code: &str) -> Result<PathBuf> {
    let mut components = Path::new(code).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) => Ok(output_root.join(name)),
        _ => Err(RosterError::InvalidStateCode(code.to_string())),
    }
}

/// Writes every State of `roster` under `output_root`, in State order.
pub fn generate(
    roster: &Roster,
    output_root: &Path,
    options: &TemplateOptions,
) -> Result<Vec<PathBuf>> {
    let files = roster
        .states()
        .iter()
        .map(|state| write_state_file(output_root, state, options))
        .collect::<Result<Vec<_>>>()?;

    info!(
        files = files.len(),
        "wrote templates under {}",
        output_root.display()
    );
    Ok(files)
}
