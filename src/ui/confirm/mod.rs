//! The delete confirmation dialog: state, intents and reducer.

mod intent;
mod reducer;
mod state;

pub use intent::ConfirmDeleteIntent;
pub use reducer::ConfirmDeleteReducer;
pub use state::{ConfirmChoice, ConfirmDeleteState};
