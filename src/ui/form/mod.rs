//! Sign-up form feature module.
//!
//! - `validator.rs` - Field rules (pure)
//! - `state.rs` - Field values, touched flags, visible errors
//! - `intent.rs` - Change / Blur / SubmitAttempted / Clear
//! - `reducer.rs` - State transitions, re-validating on every change

mod intent;
mod reducer;
mod state;
pub mod validator;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FieldState, FormState};
pub use validator::{validate, Field, FieldError, MIN_PASSWORD_LEN};
