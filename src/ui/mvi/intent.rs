//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either something the user did (typed a character, left a
/// field, pressed a button) or something the system observed (the account
/// service answered).
pub trait Intent: Send + 'static {}
