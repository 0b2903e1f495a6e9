//! The student creation overlay: state, intents and reducer.

mod intent;
mod reducer;
mod state;

pub use intent::StudentFormIntent;
pub use reducer::StudentFormReducer;
pub use state::{blank_inputs, FormInput, StudentFormState};
