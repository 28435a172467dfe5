// crates/schoolstatus-core/src/model/nested.rs
use crate::common::RosterStats;

/// # The Nested Roster
///
/// The grouped view the emitter walks. States are sorted by code and LEAs
/// by id, so two runs over the same input always visit them in the same
/// order. Schools keep the order in which they appeared in the input.
///
/// **Structure:** `Roster` -> `Vec<StateGroup>` -> `Vec<LeaGroup>` -> `Vec<School>`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    pub states: Vec<StateGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateGroup {
    /// Two-letter State code, also the output directory name.
    pub code: String,
    pub leas: Vec<LeaGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaGroup {
    pub id: String,
    /// Name from the first roster row seen for this LEA.
    pub name: String,
    pub schools: Vec<School>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct School {
    pub id: String,
    pub name: String,
}

impl Roster {
    pub fn states(&self) -> &[StateGroup] {
        &self.states
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn stats(&self) -> RosterStats {
        RosterStats {
            states: self.states.len(),
            leas: self.states.iter().map(|s| s.leas.len()).sum(),
            schools: self.states.iter().map(StateGroup::school_count).sum(),
        }
    }

    /// Lookup by State code (exact match).
    pub fn find_state(&self, code: &str) -> Option<&StateGroup> {
        self.states
            .binary_search_by(|s| s.code.as_str().cmp(code))
            .ok()
            .map(|i| &self.states[i])
    }

    pub fn find_lea(&self, state: &str, lea_id: &str) -> Option<&LeaGroup> {
        self.find_state(state)?.find_lea(lea_id)
    }

    /// Full composite-key lookup: (State, LEA ID, School ID).
    /// Returns the first match when the input carried duplicate rows.
    pub fn find_school(&self, state: &str, lea_id: &str, school_id: &str) -> Option<&School> {
        self.find_lea(state, lea_id)?
            .schools
            .iter()
            .find(|s| s.id == school_id)
    }
}

impl StateGroup {
    pub fn find_lea(&self, lea_id: &str) -> Option<&LeaGroup> {
        self.leas
            .binary_search_by(|l| l.id.as_str().cmp(lea_id))
            .ok()
            .map(|i| &self.leas[i])
    }

    pub fn school_count(&self) -> usize {
        self.leas.iter().map(|l| l.schools.len()).sum()
    }
}
