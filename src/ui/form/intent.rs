use crate::ui::mvi::Intent;

/// Actions on the creation overlay.
#[derive(Debug, Clone)]
pub enum StudentFormIntent {
    /// Open with blank inputs, focus on the first field.
    Open,
    /// Close and discard whatever was typed.
    Close,
    /// Move focus to the next field, wrapping.
    FocusNext,
    /// Move focus to the previous field, wrapping.
    FocusPrev,
    /// Append a character to the focused field.
    Input { ch: char },
    /// Remove the last character of the focused field.
    Backspace,
    /// A create call went out; lock the inputs until it settles.
    SubmitStarted,
    /// The create call failed; unlock for correction.
    SubmitFailed,
}

impl Intent for StudentFormIntent {}
