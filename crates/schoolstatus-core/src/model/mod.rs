// crates/schoolstatus-core/src/model/mod.rs
pub mod convert;
pub mod nested;
pub mod record;

pub use nested::{LeaGroup, Roster, School, StateGroup};
pub use record::{RosterRecord, REQUIRED_COLUMNS};
