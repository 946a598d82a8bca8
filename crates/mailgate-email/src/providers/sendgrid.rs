//! SendGrid provider implementation

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::traits::{MailProvider, SendEmailRequest, SendOutcome};
use crate::errors::GatewayError;

/// SendGrid v3 API client.
///
/// Holds the bearer credential for the lifetime of the process; the key is
/// never logged. Each operation makes exactly one outbound call with the
/// underlying client's default timeouts.
pub struct SendGridProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SendGridProvider {
    const BASE_URL: &'static str = "https://api.sendgrid.com";

    /// Create a new SendGrid provider with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: Self::BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host, for tests against a stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// SendGrid v3 mail-send request types
#[derive(Debug, Serialize)]
struct MailSendPayload {
    personalizations: Vec<Personalization>,
    from: EmailAddress,
    subject: String,
    content: Vec<MailContent>,
}

#[derive(Debug, Serialize)]
struct Personalization {
    to: Vec<EmailAddress>,
}

#[derive(Debug, Serialize)]
struct EmailAddress {
    email: String,
}

#[derive(Debug, Serialize)]
struct MailContent {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

impl MailSendPayload {
    fn from_request(email: &SendEmailRequest) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: email.to_email.clone(),
                }],
            }],
            from: EmailAddress {
                email: email.from_email.clone(),
            },
            subject: email.subject.clone(),
            content: vec![MailContent {
                content_type: "text/html".to_string(),
                value: email.content.clone(),
            }],
        }
    }
}

#[async_trait]
impl MailProvider for SendGridProvider {
    async fn register_domain(&self, domain: &str) -> Result<Value, GatewayError> {
        debug!("Registering domain with SendGrid: {}", domain);

        let payload = serde_json::json!({
            "domain": domain,
            "automatic_security": true,
        });

        let response = self
            .client
            .post(self.api_url("/v3/whitelabel/domains"))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to register domain: {}", e)))?;

        response.json().await.map_err(|e| {
            GatewayError::InvalidResponse(format!("Failed to parse domain response: {}", e))
        })
    }

    async fn validate_domain(&self, domain_id: i64) -> Result<Value, GatewayError> {
        debug!("Triggering SendGrid validation for domain id: {}", domain_id);

        let response = self
            .client
            .post(self.api_url(&format!("/v3/whitelabel/domains/{}/validate", domain_id)))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to validate domain: {}", e)))?;

        response.json().await.map_err(|e| {
            GatewayError::InvalidResponse(format!("Failed to parse validation response: {}", e))
        })
    }

    async fn send(&self, email: &SendEmailRequest) -> Result<SendOutcome, GatewayError> {
        debug!("Sending email via SendGrid from: {}", email.from_email);

        let payload = MailSendPayload::from_request(email);

        let response = self
            .client
            .post(self.api_url("/v3/mail/send"))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to send email: {}", e)))?;

        let status_code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect();

        // Accepted sends come back with an empty body; rejections carry JSON.
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read send response: {}", e)))?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(SendOutcome {
            status_code,
            body,
            headers,
        })
    }
}
