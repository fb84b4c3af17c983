use crate::api::User;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    /// Nothing sent yet.
    #[default]
    Idle,
    /// Request `generation` is in flight.
    Submitting { generation: u64 },
    /// Account created. Terminal.
    Succeeded { user: User },
    /// Last request failed; the user may submit again.
    Failed { error: String },
}

impl UiState for SubmissionState {}

impl SubmissionState {
    /// States from which the submit control may fire.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Generation of the request currently in flight.
    pub fn in_flight(&self) -> Option<u64> {
        match self {
            Self::Submitting { generation } => Some(*generation),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Succeeded { user } => Some(user),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}
