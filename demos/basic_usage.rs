//! Basic usage example for schoolstatus-rs
//!
//! Loads a small in-memory roster, looks a few things up, and writes the
//! per-State templates into a temporary directory.
//!
//!   cargo run --example basic_usage

use schoolstatus_core::{generate, render_state, Roster, TemplateOptions};

const ROSTER: &str = "\
ST,LEAID,LEA_NAME,NCESSCH,SCH_NAME
VA,001,Acme LEA,001001,Acme Elementary
VA,001,Acme LEA,001002,Acme Middle
VA,002,Blue Ridge LEA,002001,Blue Ridge High
MD,240,Bay LEA,240001,Bay Middle
";

fn main() -> schoolstatus_core::Result<()> {
    println!("=== schoolstatus-rs Basic Usage ===\n");

    let roster = Roster::from_reader(ROSTER.as_bytes())?;
    let stats = roster.stats();
    println!(
        "Loaded {} States, {} LEAs, {} schools",
        stats.states, stats.leas, stats.schools
    );

    for state in roster.states() {
        println!("{}:", state.code);
        for lea in &state.leas {
            println!("  {} {} ({} schools)", lea.id, lea.name, lea.schools.len());
        }
    }

    if let Some(school) = roster.find_school("VA", "001", "001002") {
        println!("\nLookup VA/001/001002 -> {}", school.name);
    }

    // Render one State to stdout
    if let Some(md) = roster.find_state("MD") {
        println!("\n--- MD template ---");
        let mut stdout = std::io::stdout().lock();
        render_state(&mut stdout, md, &TemplateOptions::default())?;
    }

    // Write every State to disk
    let out = tempfile::tempdir()?;
    let files = generate(&roster, out.path(), &TemplateOptions::default())?;
    for f in files {
        println!("wrote {}", f.display());
    }

    Ok(())
}
