//! State of the student collection as last synchronized with the service.

use crate::api::Student;
use crate::ui::mvi::UiState;

/// Load status of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// A fetch is in flight and nothing newer is known.
    #[default]
    Loading,
    /// `students` mirrors the last successful fetch.
    Ready,
    /// The last fetch failed; `summary` feeds the error panel.
    Failed { summary: String },
}

/// What the body panel should render, derived from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterView {
    /// Busy indicator only. No table, no add affordance.
    Busy,
    /// Add affordance plus the empty-collection placeholder.
    EmptyCollection,
    /// Add affordance, count badge and the record table.
    Table { count: usize },
    /// Failure panel with a retry hint.
    Error { summary: String },
}

/// The local copy of the student collection.
///
/// Records are kept exactly as the service returned them, in server order
/// and without de-duplication. A failed fetch keeps the previous records
/// so a later retry starts from a consistent base, but the view decision
/// shows the failure panel instead of possibly stale rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub status: LoadStatus,
}

impl UiState for RosterState {}

impl RosterState {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// Pure render decision for the body panel.
    ///
    /// `Loading` always wins, even when old records are retained, so a
    /// refresh never shows data it is about to replace. `Ready` splits on
    /// whether the collection is empty.
    pub fn view(&self) -> RosterView {
        match &self.status {
            LoadStatus::Loading => RosterView::Busy,
            LoadStatus::Failed { summary } => RosterView::Error {
                summary: summary.clone(),
            },
            LoadStatus::Ready if self.students.is_empty() => RosterView::EmptyCollection,
            LoadStatus::Ready => RosterView::Table {
                count: self.students.len(),
            },
        }
    }
}
