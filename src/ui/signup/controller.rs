use crate::api::{ApiError, NewUser, User};
use crate::ui::form::{Field, FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;

use super::intent::SubmissionIntent;
use super::reducer::SubmissionReducer;
use super::state::SubmissionState;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// A request the caller must now send. Its `generation` must be echoed back
/// through [`SignUpController::complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub user: NewUser,
}

/// Owns the form and submission state of one mounted sign-up form.
///
/// The network call itself happens elsewhere: `submit` hands out a ticket,
/// `complete` takes the outcome back.
pub struct SignUpController {
    form: FormState,
    submission: SubmissionState,
    last_generation: u64,
    mounted: bool,
}

impl Default for SignUpController {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpController {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            submission: SubmissionState::default(),
            last_generation: 0,
            mounted: true,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.mounted && self.form.is_valid() && self.submission.accepts_submit()
    }

    /// Whether the form inputs accept edits. False once the account exists.
    pub fn is_editable(&self) -> bool {
        self.mounted && !self.submission.is_succeeded()
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch_form(FormIntent::Change {
            field,
            value: value.into(),
        });
    }

    pub fn set_touched(&mut self, field: Field) {
        self.dispatch_form(FormIntent::Blur { field });
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        if !self.is_editable() {
            return;
        }
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Handle activation of the submit control.
    ///
    /// Always reveals field errors. Returns a ticket only when the form is
    /// valid and no request is in flight.
    pub fn submit(&mut self) -> Option<SubmitTicket> {
        if !self.mounted || !self.submission.accepts_submit() {
            return None;
        }

        dispatch_mvi!(self, form, FormReducer, FormIntent::SubmitAttempted);

        let generation = self.last_generation + 1;
        dispatch_mvi!(
            self,
            submission,
            SubmissionReducer,
            SubmissionIntent::Submit {
                generation,
                form_valid: self.form.is_valid(),
            }
        );

        if self.submission.in_flight() != Some(generation) {
            tracing::debug!("Submit ignored: form invalid");
            return None;
        }

        self.last_generation = generation;
        tracing::info!(generation, "Sign-up submission started");
        Some(SubmitTicket {
            generation,
            user: NewUser {
                username: self.form.value(Field::Username).to_string(),
                email: self.form.value(Field::Email).to_string(),
                password: self.form.value(Field::Password).to_string(),
            },
        })
    }

    /// Apply the outcome of request `generation`.
    ///
    /// Returns `false` when the outcome was dropped as stale (superseded, or
    /// the form has been unmounted).
    pub fn complete(&mut self, generation: u64, outcome: Result<User, ApiError>) -> bool {
        if !self.mounted {
            tracing::debug!(generation, "Dropping sign-up response: form unmounted");
            return false;
        }
        if self.submission.in_flight() != Some(generation) {
            tracing::debug!(
                generation,
                in_flight = ?self.submission.in_flight(),
                "Dropping stale sign-up response"
            );
            return false;
        }

        let intent = match outcome {
            Ok(user) => {
                tracing::info!(generation, username = %user.username, "Sign-up succeeded");
                SubmissionIntent::Succeeded { generation, user }
            }
            Err(err) => {
                tracing::warn!(
                    generation,
                    status = ?err.status(),
                    error = %err,
                    "Sign-up failed"
                );
                SubmissionIntent::Failed {
                    generation,
                    error: err.user_message(),
                }
            }
        };
        dispatch_mvi!(self, submission, SubmissionReducer, intent);

        if self.submission.is_succeeded() {
            dispatch_mvi!(self, form, FormReducer, FormIntent::Clear);
        }
        true
    }

    /// Tear the form down. Later responses are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}
