// crates/schoolstatus-core/src/pipeline.rs
use crate::common::RosterStats;
use crate::config::GeneratorConfig;
use crate::emit::generate;
use crate::error::Result;
use crate::model::Roster;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub stats: RosterStats,
    /// Written template paths, in State order.
    pub files: Vec<PathBuf>,
}

/// Load the roster named in `config` and write one template per State.
pub fn run(config: &GeneratorConfig) -> Result<GenerationReport> {
    let start = Instant::now();
    info!(
        "reading roster {} -> {}",
        config.ccd_file.display(),
        config.output_dir.display()
    );

    let roster = Roster::load_from_path(&config.ccd_file)?;
    let files = generate(&roster, &config.output_dir, &config.template())?;

    let stats = roster.stats();
    info!(
        states = stats.states,
        leas = stats.leas,
        schools = stats.schools,
        elapsed = ?start.elapsed(),
        "done"
    );
    Ok(GenerationReport { stats, files })
}
