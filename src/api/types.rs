use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Registration payload.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Request body: `{"user": {...}}`.
#[derive(Serialize)]
pub(crate) struct NewUserEnvelope<'a> {
    pub user: &'a NewUser,
}

/// Account returned by the service on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Session token for subsequent authenticated calls.
    pub token: String,
}

#[derive(Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

/// Failure bodies the service is known to send.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorBody {
    /// `{"error": "Invalid request"}`
    Message { error: String },
    /// `{"errors": {"email": ["has already been taken"]}}`
    Fields {
        errors: BTreeMap<String, Vec<String>>,
    },
}

impl ErrorBody {
    pub fn into_message(self) -> String {
        match self {
            ErrorBody::Message { error } => error,
            ErrorBody::Fields { errors } => errors
                .into_iter()
                .flat_map(|(field, messages)| {
                    messages
                        .into_iter()
                        .map(move |message| format!("{} {}", field, message))
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}
