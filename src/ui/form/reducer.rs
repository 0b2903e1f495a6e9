use crate::ui::form::intent::StudentFormIntent;
use crate::ui::form::state::{blank_inputs, StudentFormState};
use crate::ui::mvi::Reducer;

/// Folds overlay actions into overlay state.
///
/// While `submitting` is set, editing and focus intents are ignored; only
/// `Close` and the submit lifecycle intents get through.
pub struct StudentFormReducer;

impl Reducer for StudentFormReducer {
    type State = StudentFormState;
    type Intent = StudentFormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        use StudentFormIntent as I;
        use StudentFormState as S;

        match (state, intent) {
            (_, I::Open) => S::Visible {
                inputs: blank_inputs(),
                focused: 0,
                submitting: false,
            },
            (_, I::Close) => S::Hidden,
            (S::Hidden, _) => S::Hidden,
            (S::Visible { inputs, focused, .. }, I::SubmitStarted) => S::Visible {
                inputs,
                focused,
                submitting: true,
            },
            (S::Visible { inputs, focused, .. }, I::SubmitFailed) => S::Visible {
                inputs,
                focused,
                submitting: false,
            },
            (
                state @ S::Visible {
                    submitting: true, ..
                },
                _,
            ) => state,
            (S::Visible { inputs, focused, .. }, I::FocusNext) => {
                let next = if inputs.is_empty() {
                    0
                } else {
                    (focused + 1) % inputs.len()
                };
                S::Visible {
                    inputs,
                    focused: next,
                    submitting: false,
                }
            }
            (S::Visible { inputs, focused, .. }, I::FocusPrev) => {
                let prev = if inputs.is_empty() {
                    0
                } else {
                    (focused + inputs.len() - 1) % inputs.len()
                };
                S::Visible {
                    inputs,
                    focused: prev,
                    submitting: false,
                }
            }
            (
                S::Visible {
                    mut inputs,
                    focused,
                    ..
                },
                I::Input { ch },
            ) => {
                if let Some(input) = inputs.get_mut(focused) {
                    input.value.push(ch);
                }
                S::Visible {
                    inputs,
                    focused,
                    submitting: false,
                }
            }
            (
                S::Visible {
                    mut inputs,
                    focused,
                    ..
                },
                I::Backspace,
            ) => {
                if let Some(input) = inputs.get_mut(focused) {
                    input.value.pop();
                }
                S::Visible {
                    inputs,
                    focused,
                    submitting: false,
                }
            }
        }
    }
}
