//! Creation overlay transitions.

use roster::ui::form::{StudentFormIntent, StudentFormReducer, StudentFormState};
use roster::ui::mvi::Reducer;

fn reduce_all(intents: impl IntoIterator<Item = StudentFormIntent>) -> StudentFormState {
    intents
        .into_iter()
        .fold(StudentFormState::default(), StudentFormReducer::reduce)
}

fn focused_index(state: &StudentFormState) -> usize {
    match state {
        StudentFormState::Visible { focused, .. } => *focused,
        StudentFormState::Hidden => panic!("form is hidden"),
    }
}

#[test]
fn open_starts_blank_with_the_name_field_focused() {
    let state = reduce_all([StudentFormIntent::Open]);

    assert!(state.is_visible());
    assert!(!state.is_submitting());
    assert_eq!(focused_index(&state), 0);

    let payload = state.payload().expect("payload");
    assert_eq!(payload.name, "");
    assert_eq!(payload.email, "");
    assert_eq!(payload.gender, "");
}

#[test]
fn typing_goes_to_the_focused_field() {
    let state = reduce_all([
        StudentFormIntent::Open,
        StudentFormIntent::Input { ch: 'J' },
        StudentFormIntent::Input { ch: 'o' },
        StudentFormIntent::FocusNext,
        StudentFormIntent::Input { ch: 'j' },
        StudentFormIntent::Input { ch: '@' },
    ]);

    let payload = state.payload().expect("payload");
    assert_eq!(payload.name, "Jo");
    assert_eq!(payload.email, "j@");
    assert_eq!(payload.gender, "");
}

#[test]
fn backspace_removes_the_last_character() {
    let state = reduce_all([
        StudentFormIntent::Open,
        StudentFormIntent::Input { ch: 'A' },
        StudentFormIntent::Input { ch: 'b' },
        StudentFormIntent::Backspace,
    ]);

    assert_eq!(state.payload().expect("payload").name, "A");
}

#[test]
fn backspace_on_an_empty_field_is_a_no_op() {
    let state = reduce_all([StudentFormIntent::Open, StudentFormIntent::Backspace]);

    assert_eq!(state.payload().expect("payload").name, "");
}

#[test]
fn focus_wraps_in_both_directions() {
    let state = reduce_all([StudentFormIntent::Open]);
    assert_eq!(focused_index(&state), 0);

    let state = StudentFormReducer::reduce(state, StudentFormIntent::FocusPrev);
    assert_eq!(focused_index(&state), 2);

    let state = StudentFormReducer::reduce(state, StudentFormIntent::FocusNext);
    assert_eq!(focused_index(&state), 0);
}

#[test]
fn submit_started_locks_editing() {
    let state = reduce_all([
        StudentFormIntent::Open,
        StudentFormIntent::Input { ch: 'X' },
        StudentFormIntent::SubmitStarted,
        StudentFormIntent::Input { ch: 'Y' },
        StudentFormIntent::Backspace,
        StudentFormIntent::FocusNext,
    ]);

    assert!(state.is_submitting());
    assert_eq!(state.payload().expect("payload").name, "X");
    assert_eq!(focused_index(&state), 0);
}

#[test]
fn submit_failed_unlocks_and_keeps_values() {
    let state = reduce_all([
        StudentFormIntent::Open,
        StudentFormIntent::Input { ch: 'X' },
        StudentFormIntent::SubmitStarted,
        StudentFormIntent::SubmitFailed,
        StudentFormIntent::Input { ch: 'Y' },
    ]);

    assert!(!state.is_submitting());
    assert_eq!(state.payload().expect("payload").name, "XY");
}

#[test]
fn close_discards_everything() {
    let state = reduce_all([
        StudentFormIntent::Open,
        StudentFormIntent::Input { ch: 'X' },
        StudentFormIntent::Close,
    ]);

    assert_eq!(state, StudentFormState::Hidden);
    assert!(state.payload().is_none());
}

#[test]
fn intents_on_a_hidden_form_do_nothing() {
    let state = reduce_all([
        StudentFormIntent::Input { ch: 'X' },
        StudentFormIntent::FocusNext,
        StudentFormIntent::SubmitStarted,
    ]);

    assert_eq!(state, StudentFormState::Hidden);
}
