use crate::ui::form::validator::{validate, Field, FieldError};
use crate::ui::mvi::UiState;

/// One input's value and its currently displayed error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldState {
    pub value: String,
    /// Set on first blur (or first change, for fields that give live feedback).
    pub touched: bool,
    /// `Some` only while the value is invalid and the error is eligible for display.
    pub error: Option<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    username: FieldState,
    email: FieldState,
    password: FieldState,
    submit_attempted: bool,
}

impl UiState for FormState {}

impl FormState {
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    /// Error to render next to `field`, if any.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.field(field).error
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// True iff every field passes its rule, whether or not errors are shown.
    pub fn is_valid(&self) -> bool {
        Field::ALL
            .iter()
            .all(|&field| validate(field, self.value(field)).is_ok())
    }

    pub(super) fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    pub(super) fn mark_submit_attempted(&mut self) {
        self.submit_attempted = true;
    }

    /// Recompute the displayed error for `field`.
    pub(super) fn refresh(&mut self, field: Field) {
        let revealed = self.submit_attempted;
        let state = self.field_mut(field);
        state.error = if state.touched || revealed {
            validate(field, &state.value).err()
        } else {
            None
        };
    }
}
