use crate::ui::mvi::Reducer;
use crate::ui::roster::intent::RosterIntent;
use crate::ui::roster::state::{LoadStatus, RosterState};

/// Folds fetch lifecycle events into the collection state.
///
/// `Loaded` replaces the whole sequence, never merges, so the table can
/// never show a mix of two fetches.
pub struct RosterReducer;

impl Reducer for RosterReducer {
    type State = RosterState;
    type Intent = RosterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RosterIntent::FetchStarted => RosterState {
                status: LoadStatus::Loading,
                ..state
            },
            RosterIntent::Loaded { students } => RosterState {
                students,
                status: LoadStatus::Ready,
            },
            RosterIntent::Failed { summary } => RosterState {
                status: LoadStatus::Failed { summary },
                ..state
            },
        }
    }
}
