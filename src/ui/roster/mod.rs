//! The student collection surface: state, intents and reducer.

mod intent;
mod reducer;
mod state;

pub use intent::RosterIntent;
pub use reducer::RosterReducer;
pub use state::{LoadStatus, RosterState, RosterView};
