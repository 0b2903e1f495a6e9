//! Terminal user interface.
//!
//! `app` owns the state and `runtime` drives the draw/event loop, with
//! `input` routing keys and `render` painting frames. Each interactive
//! surface (roster, form, confirm) is its own MVI triple under a submodule.

pub mod app;
pub mod avatar;
pub mod confirm;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notice;
pub mod render;
pub mod roster;
pub mod runtime;
pub mod table;
pub mod terminal_guard;
pub mod theme;
