//! View model: what the screen shows, independent of terminal drawing.
//!
//! Elements carry their label text, so callers (the renderer, key handling,
//! tests) locate inputs and buttons the way a user would: by label.

use crate::ui::form::Field;
use crate::ui::signup::{SignUpController, SubmissionState};

pub const SUBMIT_LABEL: &str = "Sign Up";
pub const START_LABEL: &str = "Start Now";
pub const SUCCESS_MESSAGE: &str = "Sign Up Successfully!";
pub const FAILURE_MESSAGE: &str = "Error Signing Up!";
pub const SUBMITTING_MESSAGE: &str = "Signing up...";

/// Something that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Input(Field),
    Submit,
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Input {
        field: Field,
        label: &'static str,
        value: String,
        masked: bool,
        error: Option<String>,
    },
    Button {
        control: Control,
        label: &'static str,
        enabled: bool,
    },
    Message {
        tone: Tone,
        text: String,
    },
}

impl Element {
    pub fn control(&self) -> Option<Control> {
        match self {
            Element::Input { field, .. } => Some(Control::Input(*field)),
            Element::Button { control, .. } => Some(*control),
            Element::Message { .. } => None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            Element::Input { label, .. } | Element::Button { label, .. } => Some(label),
            Element::Message { .. } => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Element::Input { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Element::Input { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            Element::Button { enabled, .. } => *enabled,
            _ => true,
        }
    }

    fn texts(&self) -> Vec<&str> {
        match self {
            Element::Input { label, error, .. } => {
                let mut texts = vec![*label];
                texts.extend(error.as_deref());
                texts
            }
            Element::Button { label, .. } => vec![*label],
            Element::Message { text, .. } => vec![text.as_str()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub title: &'static str,
    pub elements: Vec<Element>,
}

impl ViewModel {
    /// The sign-up screen for the controller's current state.
    pub fn sign_up(controller: &SignUpController) -> Self {
        let mut elements = Vec::new();

        if let SubmissionState::Succeeded { .. } = controller.submission() {
            elements.push(Element::Message {
                tone: Tone::Success,
                text: SUCCESS_MESSAGE.to_string(),
            });
            elements.push(Element::Button {
                control: Control::Start,
                label: START_LABEL,
                enabled: true,
            });
            return Self {
                title: "Sign Up",
                elements,
            };
        }

        let form = controller.form();
        for field in Field::ALL {
            elements.push(Element::Input {
                field,
                label: field.label(),
                value: form.value(field).to_string(),
                masked: field.is_masked(),
                error: form.error(field).map(|e| e.to_string()),
            });
        }
        elements.push(Element::Button {
            control: Control::Submit,
            label: SUBMIT_LABEL,
            enabled: controller.can_submit(),
        });

        match controller.submission() {
            SubmissionState::Submitting { .. } => elements.push(Element::Message {
                tone: Tone::Info,
                text: SUBMITTING_MESSAGE.to_string(),
            }),
            SubmissionState::Failed { error } => {
                elements.push(Element::Message {
                    tone: Tone::Error,
                    text: FAILURE_MESSAGE.to_string(),
                });
                elements.push(Element::Message {
                    tone: Tone::Error,
                    text: error.clone(),
                });
            }
            SubmissionState::Idle | SubmissionState::Succeeded { .. } => {}
        }

        Self {
            title: "Sign Up",
            elements,
        }
    }

    /// Landing screen shown after navigation.
    pub fn home(username: Option<&str>) -> Self {
        let greeting = match username {
            Some(name) => format!("Welcome, {}!", name),
            None => "Welcome!".to_string(),
        };
        Self {
            title: "Home",
            elements: vec![Element::Message {
                tone: Tone::Success,
                text: greeting,
            }],
        }
    }

    /// Focusable controls in display order.
    pub fn controls(&self) -> Vec<Control> {
        self.elements.iter().filter_map(Element::control).collect()
    }

    /// Input whose label contains `query`, ignoring case.
    pub fn input(&self, query: &str) -> Option<&Element> {
        self.find(query, |e| matches!(e, Element::Input { .. }))
    }

    /// Button whose label contains `query`, ignoring case.
    pub fn button(&self, query: &str) -> Option<&Element> {
        self.find(query, |e| matches!(e, Element::Button { .. }))
    }

    /// Whether any label, error or message contains `needle`, ignoring case.
    pub fn has_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.elements
            .iter()
            .flat_map(Element::texts)
            .any(|text| text.to_lowercase().contains(&needle))
    }

    fn find(&self, query: &str, kind: impl Fn(&Element) -> bool) -> Option<&Element> {
        let query = query.to_lowercase();
        self.elements.iter().find(|e| {
            kind(*e)
                && e
                    .label()
                    .is_some_and(|label| label.to_lowercase().contains(&query))
        })
    }
}
