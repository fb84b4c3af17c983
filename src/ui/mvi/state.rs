//! Base trait for feature state.

/// Marker trait for feature state objects.
///
/// `Default` is the freshly mounted state; `take`-then-`reduce` relies on it.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
