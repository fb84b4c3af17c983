use crate::ui::mvi::Reducer;

use super::intent::SubmissionIntent;
use super::state::SubmissionState;

/// Reducer for submission lifecycle transitions.
///
/// Responses only land when their generation matches the request in
/// flight; anything else is a stale answer and leaves the state alone.
pub struct SubmissionReducer;

impl Reducer for SubmissionReducer {
    type State = SubmissionState;
    type Intent = SubmissionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SubmissionIntent::Submit {
                generation,
                form_valid,
            } => match state {
                SubmissionState::Idle | SubmissionState::Failed { .. } if form_valid => {
                    SubmissionState::Submitting { generation }
                }
                other => other,
            },

            SubmissionIntent::Succeeded { generation, user } => match state {
                SubmissionState::Submitting { generation: current } if current == generation => {
                    SubmissionState::Succeeded { user }
                }
                other => other,
            },

            SubmissionIntent::Failed { generation, error } => match state {
                SubmissionState::Submitting { generation: current } if current == generation => {
                    SubmissionState::Failed { error }
                }
                other => other,
            },
        }
    }
}
