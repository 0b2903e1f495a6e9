//! Minimal MVI plumbing shared by every interactive surface.
//!
//! Each surface (the roster table, the creation overlay, the delete
//! confirmation) keeps its state in a plain value and describes what can
//! happen to it as an intent enum; a pure reducer folds intents into new
//! state. The app owns the state fields and is the only place reducers
//! run, so every transition is observable and testable without a terminal.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
