use crate::api::Student;
use crate::ui::mvi::Intent;

/// Collection lifecycle events.
#[derive(Debug, Clone)]
pub enum RosterIntent {
    /// A fetch was issued; show the busy panel until it settles.
    FetchStarted,
    /// Fetch succeeded: adopt the returned sequence verbatim.
    Loaded { students: Vec<Student> },
    /// Fetch failed: keep the current sequence, surface the summary.
    Failed { summary: String },
}

impl Intent for RosterIntent {}
