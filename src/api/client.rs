use reqwest::Client;
use std::time::Duration;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{ErrorBody, NewUser, NewUserEnvelope, User, UserEnvelope};
use crate::config::ApiConfig;

/// Issues `POST <base_url>/users`.
///
/// One call is one attempt: failures are returned to the caller, never retried.
#[derive(Clone)]
pub struct AccountClient {
    client: Client,
    users_url: String,
    timeout: Duration,
}

impl AccountClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            users_url: config.users_url(),
            timeout: config.timeout(),
        })
    }

    pub async fn register(&self, user: &NewUser) -> Result<User, ApiError> {
        let request_id = Uuid::new_v4().to_string();
        tracing::info!(
            request_id = %request_id,
            username = %user.username,
            url = %self.users_url,
            "Submitting sign-up"
        );

        let response = self
            .client
            .post(&self.users_url)
            .header("x-request-id", &request_id)
            .json(&NewUserEnvelope { user })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        if status.is_success() {
            let envelope: UserEnvelope = serde_json::from_slice(&body).map_err(|e| {
                tracing::warn!(request_id = %request_id, error = %e, "Unreadable sign-up response");
                ApiError::InvalidResponse(e.to_string())
            })?;
            tracing::info!(request_id = %request_id, status = status.as_u16(), "Sign-up accepted");
            return Ok(envelope.user);
        }

        let message = serde_json::from_slice::<ErrorBody>(&body)
            .map(ErrorBody::into_message)
            .unwrap_or_else(|_| format!("Request failed with status {}", status.as_u16()));
        tracing::warn!(
            request_id = %request_id,
            status = status.as_u16(),
            message = %message,
            "Sign-up rejected"
        );
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            ApiError::Connection {
                url: self.users_url.clone(),
                source: err,
            }
        }
    }
}
