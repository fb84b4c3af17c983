use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;
use crate::ui::form::validator::Field;
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Change { field, value } => {
                let entry = state.field_mut(field);
                entry.value = value;
                if field.reveals_on_change() {
                    entry.touched = true;
                }
                state.refresh(field);
                state
            }
            FormIntent::Blur { field } => {
                state.field_mut(field).touched = true;
                state.refresh(field);
                state
            }
            FormIntent::SubmitAttempted => {
                state.mark_submit_attempted();
                for field in Field::ALL {
                    state.refresh(field);
                }
                state
            }
            FormIntent::Clear => FormState::default(),
        }
    }
}
