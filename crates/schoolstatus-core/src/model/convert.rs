// crates/schoolstatus-core/src/model/convert.rs

use crate::model::nested::{LeaGroup, Roster, School, StateGroup};
use crate::model::record::RosterRecord;
use std::collections::BTreeMap;
use tracing::warn;

/// Groups flat roster rows into the nested view.
///
/// The index is keyed by State, then LEA ID; both levels come out in
/// ascending key order. Schools are appended in input order and are not
/// de-duplicated. Rows with a blank State code or LEA ID have no group to
/// land in and are skipped with a warning.
pub fn records_to_nested<I>(records: I) -> Roster
where
    I: IntoIterator<Item = RosterRecord>,
{
    let mut index: BTreeMap<String, BTreeMap<String, LeaGroup>> = BTreeMap::new();

    for rec in records {
        if rec.state.trim().is_empty() || rec.lea_id.trim().is_empty() {
            warn!(
                state = %rec.state,
                lea_id = %rec.lea_id,
                school_id = %rec.school_id,
                "skipping roster row without State code or LEA ID"
            );
            continue;
        }
        let leas = index.entry(rec.state).or_default();
        let lea = leas.entry(rec.lea_id.clone()).or_insert_with(|| LeaGroup {
            id: rec.lea_id,
            name: rec.lea_name,
            schools: Vec::new(),
        });
        lea.schools.push(School {
            id: rec.school_id,
            name: rec.school_name,
        });
    }

    let states = index
        .into_iter()
        .map(|(code, leas)| StateGroup {
            code,
            leas: leas.into_values().collect(),
        })
        .collect();

    Roster { states }
}
