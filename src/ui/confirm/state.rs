//! State of the delete confirmation dialog.

use crate::ui::mvi::UiState;

/// The two dialog buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    /// Abort the deletion. Always the initial selection.
    #[default]
    No,
    /// Proceed with the deletion.
    Yes,
}

impl ConfirmChoice {
    pub fn toggled(self) -> Self {
        match self {
            ConfirmChoice::No => ConfirmChoice::Yes,
            ConfirmChoice::Yes => ConfirmChoice::No,
        }
    }
}

/// Confirmation gate for a pending row deletion.
///
/// While hidden, no deletion is pending. While visible, it remembers the
/// target so the app does not depend on the row selection staying put
/// underneath the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmDeleteState {
    #[default]
    Hidden,
    Visible {
        student_id: i64,
        student_name: String,
        selected: ConfirmChoice,
    },
}

impl UiState for ConfirmDeleteState {}

impl ConfirmDeleteState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ConfirmDeleteState::Hidden)
    }

    /// Pending target, if any.
    pub fn target(&self) -> Option<(i64, &str)> {
        match self {
            ConfirmDeleteState::Hidden => None,
            ConfirmDeleteState::Visible {
                student_id,
                student_name,
                ..
            } => Some((*student_id, student_name.as_str())),
        }
    }

    /// Currently selected button; `No` while hidden.
    pub fn selected(&self) -> ConfirmChoice {
        match self {
            ConfirmDeleteState::Hidden => ConfirmChoice::No,
            ConfirmDeleteState::Visible { selected, .. } => *selected,
        }
    }

    /// Prompt line naming the target.
    pub fn prompt(&self) -> Option<String> {
        self.target().map(|(id, name)| {
            format!("Are you sure you want to delete student named {name} with the id of {id}?")
        })
    }
}
