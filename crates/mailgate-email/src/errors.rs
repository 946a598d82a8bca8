//! Error types for the gateway

use serde_json::Value;
use thiserror::Error;

/// Failures a gateway operation can surface.
///
/// Transport-level failures and provider rejections are kept apart so the
/// HTTP boundary can answer 502 for the former and 400 for the latter.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The HTTP exchange with SendGrid never completed.
    #[error("SendGrid transport error: {0}")]
    Transport(String),

    /// SendGrid answered, but the body could not be parsed as JSON.
    #[error("Invalid SendGrid response: {0}")]
    InvalidResponse(String),

    /// SendGrid accepted the call but returned no usable domain identifier.
    #[error("Error adding domain to SendGrid: {0}")]
    BadRegistration(Value),

    /// SendGrid reports the domain's DNS records as not valid.
    #[error("Domain verification failed: {0}")]
    VerificationFailed(Value),

    /// SendGrid refused the mail-send call with a non-202 status.
    #[error("Error sending email: {body}")]
    SendFailed { status_code: u16, body: Value },
}

impl GatewayError {
    /// Whether the failure happened on the way to the provider rather than
    /// being a provider-side rejection of the caller's input.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            GatewayError::Transport(_) | GatewayError::InvalidResponse(_)
        )
    }
}
