//! Terminal sign-up form: field validation, a submission state machine and
//! an account-service client.

pub mod api;
pub mod config;
pub mod logging;
pub mod ui;
