use crate::api::User;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionIntent {
    /// Submit control activated. `form_valid` is the form's verdict at that moment.
    Submit { generation: u64, form_valid: bool },
    /// The request tagged `generation` created the account.
    Succeeded { generation: u64, user: User },
    /// The request tagged `generation` failed; `error` is shown to the user.
    Failed { generation: u64, error: String },
}

impl Intent for SubmissionIntent {}
