//! Errors produced while creating an account.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request timeout after {seconds}s")]
    Timeout { seconds: u64 },

    /// Non-2xx answer.
    #[error("Sign-up rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// 2xx answer whose body is not an account.
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    /// The submission worker is gone.
    #[error("Sign-up unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Text shown under "Error Signing Up!".
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Connection { .. } => "Could not reach the account service".to_string(),
            ApiError::Timeout { .. } => "The account service did not respond in time".to_string(),
            ApiError::InvalidResponse(_) => "Unexpected response from server".to_string(),
            ApiError::ClientBuild(_) | ApiError::Unavailable(_) => {
                "Sign-up is currently unavailable".to_string()
            }
        }
    }

    /// HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_surfaces_server_text() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Invalid request".into(),
        };
        assert_eq!(err.user_message(), "Invalid request");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn unparseable_body_uses_fallback_text() {
        let err = ApiError::InvalidResponse("missing field `token`".into());
        assert_eq!(err.user_message(), "Unexpected response from server");
        assert_eq!(err.status(), None);
    }
}
