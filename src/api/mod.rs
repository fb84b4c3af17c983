//! Client for the remote account service.

mod client;
mod error;
mod types;

pub use client::AccountClient;
pub use error::ApiError;
pub use types::{NewUser, User};
