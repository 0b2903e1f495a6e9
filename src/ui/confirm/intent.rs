use crate::ui::mvi::Intent;

/// Actions on the delete confirmation dialog.
#[derive(Debug, Clone)]
pub enum ConfirmDeleteIntent {
    /// Open for the given target. Selection starts on `No`.
    Open {
        student_id: i64,
        student_name: String,
    },
    /// Close without deleting.
    Cancel,
    /// Move selection between `No` and `Yes`.
    Toggle,
}

impl Intent for ConfirmDeleteIntent {}
