//! Webhook delivery.
//!
//! A message moves through three stages:
//! - composing: a mutable [`Message`](crate::message::Message)
//! - ready: a [`PreparedRequest`] with a validated URL and frozen payload
//! - sent or failed: the outcome of exactly one POST
//!
//! There are no retries. Only HTTP 200 counts as sent.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Upper bound for the single webhook request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A payload bound to its endpoint, ready to send or print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    url: String,
    payload: String,
}

impl PreparedRequest {
    pub(crate) const fn new(url: String, payload: String) -> Self {
        Self { url, payload }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The JSON sent as the `payload` form field.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// What would be sent: the request line followed by the payload.
    pub fn dry_run(&self) -> String {
        format!("POST {}\n{}", self.url, self.payload)
    }

    /// POST the payload once.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request cannot be completed and a
    /// delivery error for any status other than 200.
    pub fn deliver(&self, client: &WebhookClient) -> Result<()> {
        client.post(self)
    }
}

/// Blocking HTTP client for incoming webhooks.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
}

impl WebhookClient {
    /// Client with [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns a transport error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// # Errors
    ///
    /// Returns a transport error if the TLS backend cannot be initialised.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Send a prepared request as a urlencoded form with a single
    /// `payload` field.
    ///
    /// # Errors
    ///
    /// See [`PreparedRequest::deliver`].
    pub fn post(&self, request: &PreparedRequest) -> Result<()> {
        tracing::debug!(url = %request.url, bytes = request.payload.len(), "posting payload");
        let response = self
            .client
            .post(&request.url)
            .form(&[("payload", request.payload.as_str())])
            .send()?;

        let status = response.status();
        if status == StatusCode::OK {
            tracing::info!(url = %request.url, "message delivered");
            return Ok(());
        }

        let body = response.text()?;
        tracing::debug!(status = status.as_u16(), %body, "webhook rejected payload");
        Err(delivery_error(status.as_u16(), &body))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    status_code: Option<u16>,
}

/// Map a rejected response to an error, preferring the server's own
/// message and status code when the body is JSON that carries them.
pub fn delivery_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(reported) => Error::Delivery {
            message: reported.message,
            status: reported.status_code.unwrap_or(status),
        },
        Err(_) => Error::Delivery {
            message: body.to_string(),
            status,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_message_is_used() {
        let err = delivery_error(502, r#"{"message": "X"}"#);
        assert_eq!(err.to_string(), "X (502)");
    }

    #[test]
    fn test_reported_status_code_wins() {
        let err = delivery_error(
            400,
            r#"{"id":"web.incoming_webhook.channel.app_error","message":"Couldn't find the channel.","status_code":404}"#,
        );
        assert_eq!(err.to_string(), "Couldn't find the channel. (404)");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_non_json_body_is_used_verbatim() {
        let err = delivery_error(503, "Service Unavailable");
        assert_eq!(err.to_string(), "Service Unavailable (503)");
    }

    #[test]
    fn test_json_without_message_is_used_verbatim() {
        let err = delivery_error(500, r#"{"error": "boom"}"#);
        assert_eq!(err.to_string(), r#"{"error": "boom"} (500)"#);
    }

    #[test]
    fn test_dry_run_is_request_line_and_payload() {
        let request = PreparedRequest::new(
            "http://chat.net/hooks/abc".to_string(),
            "{\n    \"text\": \"hi\"\n}".to_string(),
        );
        assert_eq!(
            request.dry_run(),
            "POST http://chat.net/hooks/abc\n{\n    \"text\": \"hi\"\n}"
        );
    }
}
