//! Handler types for the gateway

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dns::DnsRecord;
use crate::services::{DomainService, EmailService};

/// Application state for gateway handlers
pub struct AppState {
    pub domain_service: Arc<DomainService>,
    pub email_service: Arc<EmailService>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddDomainRequest {
    /// Sender domain to register
    #[schema(example = "example.com")]
    pub domain: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AddDomainResponse {
    /// Raw SendGrid domain payload
    #[schema(value_type = Object)]
    pub domain_info: serde_json::Value,
    /// DNS records the caller must publish
    pub dns_records: Vec<DnsRecord>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyDomainResponse {
    #[schema(example = "Domain verification successful!")]
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendEmailRequestBody {
    /// Sender email address
    #[schema(example = "noreply@example.com")]
    pub from_email: String,
    /// Recipient email address
    #[schema(example = "user@example.com")]
    pub to_email: String,
    #[schema(example = "Welcome")]
    pub subject: String,
    /// HTML body content
    #[schema(example = "<p>Hello</p>")]
    pub content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendEmailResponseBody {
    #[schema(example = "Email sent successfully!")]
    pub message: String,
    /// Status code returned by the provider (always 202 on success)
    #[schema(example = 202)]
    pub status_code: u16,
}
