//! Mail provider trait definitions

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GatewayError;

/// Request to send a single HTML email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendEmailRequest {
    /// Sender email address
    pub from_email: String,
    /// Recipient email address
    pub to_email: String,
    /// Email subject
    pub subject: String,
    /// HTML body content
    pub content: String,
}

/// Outcome of a mail-send exchange that completed at the HTTP level.
///
/// Transport failures never appear here; they surface as
/// [`GatewayError::Transport`] so callers can tell a provider rejection apart
/// from a connection that never completed.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub status_code: u16,
    pub body: Value,
    pub headers: HashMap<String, String>,
}

impl SendOutcome {
    /// SendGrid acknowledges accepted mail with 202.
    pub fn accepted(&self) -> bool {
        self.status_code == 202
    }
}

/// Mail provider trait for the outbound provider calls
#[async_trait]
pub trait MailProvider: Send + Sync {
    /// Register a sender domain. The parsed JSON body is returned verbatim,
    /// whatever the HTTP status; interpreting success belongs to the caller.
    async fn register_domain(&self, domain: &str) -> Result<Value, GatewayError>;

    /// Trigger DNS validation for a registered domain. Same verbatim-body
    /// contract as [`MailProvider::register_domain`].
    async fn validate_domain(&self, domain_id: i64) -> Result<Value, GatewayError>;

    /// Submit a single message.
    async fn send(&self, email: &SendEmailRequest) -> Result<SendOutcome, GatewayError>;
}
