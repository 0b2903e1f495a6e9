use crate::ui::confirm::intent::ConfirmDeleteIntent;
use crate::ui::confirm::state::{ConfirmChoice, ConfirmDeleteState};
use crate::ui::mvi::Reducer;

/// Folds dialog actions into dialog state.
///
/// The affirmative path is not an intent: the app reads the selection on
/// Enter and issues the delete itself, then dispatches `Cancel` to close.
pub struct ConfirmDeleteReducer;

impl Reducer for ConfirmDeleteReducer {
    type State = ConfirmDeleteState;
    type Intent = ConfirmDeleteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (
                _,
                ConfirmDeleteIntent::Open {
                    student_id,
                    student_name,
                },
            ) => ConfirmDeleteState::Visible {
                student_id,
                student_name,
                selected: ConfirmChoice::No,
            },
            (_, ConfirmDeleteIntent::Cancel) => ConfirmDeleteState::Hidden,
            (
                ConfirmDeleteState::Visible {
                    student_id,
                    student_name,
                    selected,
                },
                ConfirmDeleteIntent::Toggle,
            ) => ConfirmDeleteState::Visible {
                student_id,
                student_name,
                selected: selected.toggled(),
            },
            (ConfirmDeleteState::Hidden, ConfirmDeleteIntent::Toggle) => {
                ConfirmDeleteState::Hidden
            }
        }
    }
}
