//! Outbound webhook test delivery

use chrono::{DateTime, Utc};
use serde_json::json;
use thiserror::Error;

/// Failure modes of the webhook test action
#[derive(Debug, Error)]
pub enum WebhookError {
    /// A required form field was empty; nothing was sent
    #[error("webhook URL is required")]
    MissingUrl,

    /// The request never left the transport (DNS, connect, timeout)
    #[error("request could not be delivered: {0}")]
    Transport(String),
}

/// Presence check run before any dispatch is attempted
pub fn validate_url(url: &str) -> Result<(), WebhookError> {
    if url.trim().is_empty() {
        return Err(WebhookError::MissingUrl);
    }
    Ok(())
}

/// Sends diagnostic test events to a user-configured automation endpoint.
///
/// The endpoint is opaque: delivery means the request left the transport
/// without error. The HTTP status is never inspected, so a 4xx/5xx response
/// still counts as dispatched.
pub struct WebhookTester {
    http: reqwest::Client,
    product: String,
}

impl WebhookTester {
    pub fn new(product: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            product: product.into(),
        })
    }

    /// Fixed payload shape for test events
    pub fn test_payload(&self, now: DateTime<Utc>) -> serde_json::Value {
        json!({
            "test": true,
            "timestamp": now.to_rfc3339(),
            "source": self.product,
            "patient_name": "Test Patient",
            "appointment_time": "2025-05-28 10:00 AM",
            "message_type": "reminder",
        })
    }

    /// Issue a single POST to `url`. No retry on failure.
    pub async fn dispatch(&self, url: &str) -> Result<(), WebhookError> {
        validate_url(url)?;
        let payload = self.test_payload(Utc::now());
        self.http
            .post(url.trim())
            .json(&payload)
            .send()
            .await
            .map_err(|err| WebhookError::Transport(format!("{err:#}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_url() {
        assert!(matches!(validate_url(""), Err(WebhookError::MissingUrl)));
        assert!(matches!(validate_url("   "), Err(WebhookError::MissingUrl)));
        assert!(validate_url("https://hooks.example.com/catch/1").is_ok());
    }

    #[test]
    fn test_payload_shape() {
        let tester = WebhookTester::new("HealthRemind Pro").unwrap();
        let payload = tester.test_payload(Utc::now());
        let object = payload.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "appointment_time",
                "message_type",
                "patient_name",
                "source",
                "test",
                "timestamp"
            ]
        );

        assert_eq!(payload["test"], true);
        assert_eq!(payload["source"], "HealthRemind Pro");
        assert_eq!(payload["patient_name"], "Test Patient");
        assert_eq!(payload["message_type"], "reminder");
    }

    #[test]
    fn test_payload_timestamp_is_rfc3339() {
        let tester = WebhookTester::new("HealthRemind Pro").unwrap();
        let payload = tester.test_payload(Utc::now());
        let stamp = payload["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}
