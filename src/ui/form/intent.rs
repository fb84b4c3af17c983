use crate::ui::form::validator::Field;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// The input's text changed to `value`.
    Change { field: Field, value: String },
    /// Focus left the input.
    Blur { field: Field },
    /// The user activated "Sign Up". Makes every field's error visible,
    /// valid or not.
    SubmitAttempted,
    /// Drop all values. Used once the account exists.
    Clear,
}

impl Intent for FormIntent {}
