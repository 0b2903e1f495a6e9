//! Terminal client for a student roster service.
//!
//! The `ui` module owns all interaction state and rendering. `api` talks to
//! the remote service and `config` supplies the startup settings; the
//! binary in `main.rs` wires the three together.

pub mod api;
pub mod config;
pub mod ui;
