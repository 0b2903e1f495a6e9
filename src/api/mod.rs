//! Client side of the student roster service.
//!
//! `ApiClient` wraps the three REST endpoints behind the shared `ApiError`
//! failure shape. The worker runs the calls on a dedicated runtime thread
//! so the UI loop never touches the network.

mod client;
mod error;
mod types;
mod worker;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{NewStudent, Student};
pub use worker::{spawn_worker, ApiCommand, ApiCommandSender, ApiOutcome};
