// crates/schoolstatus-core/src/loader/mod.rs

//! # Roster Loader
//!
//! Handles the Physical Layer (I/O, Decompression), checks the header for
//! the required CCD columns, and hands the parsed rows to the grouping step.

use crate::error::{Result, RosterError};
use crate::model::convert::records_to_nested;
use crate::model::{Roster, RosterRecord, REQUIRED_COLUMNS};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

mod common_io;

#[cfg(feature = "compact")]
pub use common_io::is_gzip;

impl Roster {
    /// Loads and groups a roster file.
    ///
    /// Fails with [`RosterError::NotFound`] if the file cannot be opened,
    /// [`RosterError::MissingColumn`] if the header lacks one of
    /// [`REQUIRED_COLUMNS`], and [`RosterError::Csv`] on malformed rows.
    #[tracing::instrument(level = "debug", skip(path), fields(roster = %path.as_ref().display()))]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader)
    }

    /// Same as [`Roster::load_from_path`] for an already-open source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        ensure_required_columns(&headers)?;

        let records = rdr
            .deserialize::<RosterRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(rows = records.len(), "roster rows read");

        let roster = records_to_nested(records);
        let stats = roster.stats();
        info!(
            states = stats.states,
            leas = stats.leas,
            schools = stats.schools,
            "roster grouped"
        );
        Ok(roster)
    }
}

/// Reports the first required column (in CCD order) the header lacks.
fn ensure_required_columns(headers: &StringRecord) -> Result<()> {
    match REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        Some(missing) => Err(RosterError::MissingColumn((*missing).to_string())),
        None => Ok(()),
    }
}
