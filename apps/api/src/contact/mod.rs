//! Contact form relay: visitor messages are forwarded to Web3Forms, which mails them
//! to the portfolio owner.

pub mod handlers;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;

const WEB3FORMS_URL: &str = "https://api.web3forms.com/submit";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// What a visitor typed into the get-in-touch form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// All three fields are required. The email only has to contain `@`.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [("name", &self.name), ("email", &self.email), ("message", &self.message)] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} cannot be empty")));
            }
        }
        if !self.email.contains('@') {
            return Err(AppError::Validation("email is not a valid address".to_string()));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Submission<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[derive(Clone)]
pub struct ContactRelay {
    client: Client,
    access_key: Option<String>,
}

impl ContactRelay {
    /// The key may be absent; sends then fail with a configuration error.
    pub fn new(access_key: Option<String>) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, access_key })
    }

    pub fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }

    /// One POST per message. Any 2xx counts as delivered.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), AppError> {
        message.validate()?;
        let access_key = self.access_key.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Web3Forms access key not configured. Set WEB3FORMS_KEY.".to_string(),
            )
        })?;

        let response = self
            .client
            .post(WEB3FORMS_URL)
            .json(&Submission {
                access_key,
                name: message.name.trim(),
                email: message.email.trim(),
                message: message.message.trim(),
            })
            .send()
            .await
            .map_err(|e| AppError::transport("Web3Forms", &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Web3Forms returned {}: {}", status, body);
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: format!("Failed to send message: {}", status.as_u16()),
            });
        }

        info!("Contact message relayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        }
    }

    #[test]
    fn test_complete_message_validates() {
        assert!(message("Ana", "ana@example.com", "Hello").validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        for m in [
            message(" ", "ana@example.com", "Hello"),
            message("Ana", "", "Hello"),
            message("Ana", "ana@example.com", "\n"),
        ] {
            assert!(matches!(m.validate(), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn test_email_needs_an_at_sign() {
        let err = message("Ana", "ana.example.com", "Hello").validate().unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let relay = ContactRelay::new(None).unwrap();
        assert!(!relay.is_configured());
        let err = relay
            .send(&message("Ana", "ana@example.com", "Hello"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_invalid_message_is_rejected_before_key_check() {
        let relay = ContactRelay::new(None).unwrap();
        let err = relay.send(&message("", "", "")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
