//! Sign-up submission feature module.
//!
//! Submission lifecycle: `Idle → Submitting → Succeeded | Failed`, with
//! `Failed → Submitting` on retry.
//!
//! - `state.rs` - Lifecycle state enum
//! - `intent.rs` - Submit and response events, tagged with a generation
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Owns form + submission state, hands out request tickets

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{SignUpController, SubmitTicket};
pub use intent::SubmissionIntent;
pub use reducer::SubmissionReducer;
pub use state::SubmissionState;
