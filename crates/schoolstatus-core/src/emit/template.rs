// crates/schoolstatus-core/src/emit/template.rs

//! The per-State template, written by hand rather than through a serializer
//! so the layout matches files downstream consumers already read.
//!
//! Known defect kept on purpose: the preamble carries four keys all named
//! `"comment"`. Most JSON parsers keep only the last one. Changing that
//! alters the contract, so it stays until consumers confirm they don't
//! depend on it.

use crate::config::{CONFORMANCE_URL, SCHEMA_URL};
use crate::error::Result;
use crate::model::{LeaGroup, School, StateGroup};
use std::io::Write;

pub const REPORTING_PERIOD_START: &str = "2021-05-10";
pub const NOT_REPORTED: &str = "Not reported";

pub const STATUS_COMMENTS: [&str; 4] = [
    "For each school, record All if all enrolled students were offered in-person instruction the full week",
    "record None if no enrolled student was offered in-person instruction any day of the reporting week,",
    "record Hybrid if the school was in session but the other two responses are not accurate,",
    "and record Not in session if the school was not in session for the reporting week.",
];

const SEPARATOR: &str = ",\n";
const LEA_SUFFIX: &str = "\n]}";
const SUFFIX: &str = "\n]\n}\n\n";

/// The two URLs that vary between deployments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOptions {
    pub conforms_to: String,
    pub described_by: String,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            conforms_to: CONFORMANCE_URL.to_string(),
            described_by: SCHEMA_URL.to_string(),
        }
    }
}

/// JSON string literal, quotes included. Plain text comes out unchanged
/// between the quotes; only `"`, `\` and control characters get escaped.
fn quoted(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Writes one State's template document to `out`.
pub fn render_state<W: Write>(
    out: &mut W,
    state: &StateGroup,
    options: &TemplateOptions,
) -> Result<()> {
    write_preamble(out, options)?;

    for (i, lea) in state.leas.iter().enumerate() {
        if i > 0 {
            out.write_all(SEPARATOR.as_bytes())?;
        }
        write_lea(out, lea)?;
    }

    out.write_all(SUFFIX.as_bytes())?;
    Ok(())
}

fn write_preamble<W: Write>(out: &mut W, options: &TemplateOptions) -> Result<()> {
    writeln!(out, "{{")?;
    writeln!(out, "\"conformsTo\": {},", quoted(&options.conforms_to)?)?;
    writeln!(out, "\"describedBy\": {},", quoted(&options.described_by)?)?;
    writeln!(
        out,
        "\"reportingPeriodStartDate\": \"{REPORTING_PERIOD_START}\","
    )?;
    for comment in STATUS_COMMENTS {
        writeln!(out, "\"comment\": \"{comment}\",")?;
    }
    // blank line after the opening bracket is part of the layout
    writeln!(out, "\"lea\": [\n")?;
    Ok(())
}

fn write_lea<W: Write>(out: &mut W, lea: &LeaGroup) -> Result<()> {
    writeln!(
        out,
        "{{\"leaID\": {}, \"leaName\": {}, \"openStatus\": [",
        quoted(&lea.id)?,
        quoted(&lea.name)?
    )?;

    for (i, school) in lea.schools.iter().enumerate() {
        if i > 0 {
            out.write_all(SEPARATOR.as_bytes())?;
        }
        write_school(out, school)?;
    }

    out.write_all(LEA_SUFFIX.as_bytes())?;
    Ok(())
}

fn write_school<W: Write>(out: &mut W, school: &School) -> Result<()> {
    write!(
        out,
        "  {{ \"weeklyInPersonInstruction\": \"{NOT_REPORTED}\", \"schoolID\": {}, \"schoolName\": {} }}",
        quoted(&school.id)?,
        quoted(&school.name)?
    )?;
    Ok(())
}
