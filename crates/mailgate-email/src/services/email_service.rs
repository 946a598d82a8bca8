//! Email sending through the mail provider

use std::sync::Arc;

use tracing::{debug, error};

use crate::errors::GatewayError;
use crate::providers::{MailProvider, SendEmailRequest};

/// Service for submitting single messages
#[derive(Clone)]
pub struct EmailService {
    provider: Arc<dyn MailProvider>,
}

/// Confirmation of an accepted send
#[derive(Debug, Clone)]
pub struct SendConfirmation {
    pub status_code: u16,
}

impl EmailService {
    pub fn new(provider: Arc<dyn MailProvider>) -> Self {
        Self { provider }
    }

    /// Submit one message; success is strictly a 202 from the provider.
    pub async fn send(&self, request: SendEmailRequest) -> Result<SendConfirmation, GatewayError> {
        debug!(
            "Sending email from {} to {}",
            request.from_email, request.to_email
        );

        let outcome = self.provider.send(&request).await?;

        if outcome.accepted() {
            Ok(SendConfirmation {
                status_code: outcome.status_code,
            })
        } else {
            error!(
                "SendGrid refused email send with status {}",
                outcome.status_code
            );
            Err(GatewayError::SendFailed {
                status_code: outcome.status_code,
                body: outcome.body,
            })
        }
    }
}
