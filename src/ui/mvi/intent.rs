//! Base trait for intents in the MVI layer.

/// Marker trait for the events a surface reacts to.
///
/// An intent is one of:
/// - A key press routed to the surface
/// - A settled service call
/// - A lifecycle event (opening or closing an overlay)
///
/// Intents are folded into new states by reducers.
pub trait Intent: Send + 'static {}
