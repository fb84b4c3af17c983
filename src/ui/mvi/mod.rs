//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ ViewModel ──→ Frame
//!    ↑                                  │
//!    └──────────── key / response ──────┘
//! ```
//!
//! - **State**: snapshot of one feature (form fields, submission progress)
//! - **Intent**: typed user action or system event
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
