// crates/schoolstatus-core/src/model/record.rs
use serde::Deserialize;

/// Columns the loader insists on, in CCD header spelling.
pub const REQUIRED_COLUMNS: [&str; 5] = ["ST", "LEAID", "LEA_NAME", "NCESSCH", "SCH_NAME"];

/// One roster row as it comes from the CCD school file.
///
/// Identifiers are opaque strings; leading zeros in `LEAID`/`NCESSCH`
/// survive. Any other column in the file is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterRecord {
    #[serde(rename = "ST")]
    pub state: String,
    #[serde(rename = "LEAID")]
    pub lea_id: String,
    #[serde(rename = "LEA_NAME")]
    pub lea_name: String,
    #[serde(rename = "NCESSCH")]
    pub school_id: String,
    #[serde(rename = "SCH_NAME")]
    pub school_name: String,
}

impl RosterRecord {
    pub fn new(
        state: impl Into<String>,
        lea_id: impl Into<String>,
        lea_name: impl Into<String>,
        school_id: impl Into<String>,
        school_name: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            lea_id: lea_id.into(),
            lea_name: lea_name.into(),
            school_id: school_id.into(),
            school_name: school_name.into(),
        }
    }
}
