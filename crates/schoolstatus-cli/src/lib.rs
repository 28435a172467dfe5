//! schoolstatus-cli
//! ================
//!
//! Ships the `schoolstatus` binary, which reads a Common Core of Data school
//! roster and writes one `<ST>/school_operational_status.json` template per
//! State.
//!
//! ```text
//! schoolstatus --help
//! schoolstatus ccd_sch_029_2021.csv --outputdir=templates
//! SOS_LOGLEVEL=DEBUG schoolstatus ccd.csv.gz
//! ```
//!
//! Loading, grouping and rendering are available as a library in
//! `schoolstatus-core`.
#![cfg_attr(docsrs, feature(doc_cfg))]

// Empty on purpose: argument parsing and logging setup live in the binary.
