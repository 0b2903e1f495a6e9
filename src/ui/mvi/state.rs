//! Base trait for UI state in the MVI layer.

/// Marker trait for the state value each surface owns.
///
/// States are:
/// - Owned values, replaced wholesale on every transition
/// - Self-contained (everything the view needs to render)
/// - Comparable (PartialEq so tests can assert whole transitions)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
