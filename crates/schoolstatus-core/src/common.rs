/// Simple aggregate statistics for a loaded roster.
///
/// Returned by [`Roster::stats`](crate::Roster::stats); the counts include
/// duplicate school rows, since those pass through to the output unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterStats {
    pub states: usize,
    pub leas: usize,
    pub schools: usize,
}
