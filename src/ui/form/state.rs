//! State of the student creation overlay.

use crate::api::NewStudent;
use crate::ui::mvi::UiState;

/// One text input of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub label: &'static str,
    pub value: String,
}

/// Input set for a blank form, in focus order.
pub fn blank_inputs() -> Vec<FormInput> {
    vec![
        FormInput {
            label: "Name",
            value: String::new(),
        },
        FormInput {
            label: "Email",
            value: String::new(),
        },
        FormInput {
            label: "Gender",
            value: String::new(),
        },
    ]
}

/// The creation overlay.
///
/// `submitting` locks the inputs while the create call is in flight. A
/// rejected submit clears the lock and keeps the typed values so the
/// operator can correct and retry; only a successful create or an explicit
/// close discards them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StudentFormState {
    #[default]
    Hidden,
    Visible {
        inputs: Vec<FormInput>,
        focused: usize,
        submitting: bool,
    },
}

impl UiState for StudentFormState {}

impl StudentFormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, StudentFormState::Hidden)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            StudentFormState::Visible {
                submitting: true,
                ..
            }
        )
    }

    /// The creation payload as currently typed, if the overlay is open.
    ///
    /// Values are passed through untrimmed and unvalidated: the service is
    /// the validator and its rejections come back as ordinary failure
    /// notices.
    pub fn payload(&self) -> Option<NewStudent> {
        let StudentFormState::Visible { inputs, .. } = self else {
            return None;
        };

        let value = |index: usize| {
            inputs
                .get(index)
                .map(|input| input.value.clone())
                .unwrap_or_default()
        };

        Some(NewStudent {
            name: value(0),
            email: value(1),
            gender: value(2),
        })
    }
}
