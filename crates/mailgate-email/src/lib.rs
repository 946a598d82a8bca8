//! SendGrid gateway for Mailgate
//!
//! This crate proxies three SendGrid operations behind a local HTTP interface:
//! - sender domain registration, reshaping the returned DNS entries into a
//!   flat record list the caller can publish
//! - domain DNS verification
//! - single email sending
//!
//! Every request performs exactly one outbound provider call and keeps no
//! state across requests.

pub mod dns;
pub mod errors;
pub mod handlers;
pub mod providers;
pub mod services;

// Re-export main types
pub use dns::DnsRecord;
pub use errors::GatewayError;
pub use providers::{MailProvider, SendEmailRequest, SendGridProvider, SendOutcome};
pub use services::{DomainService, EmailService, RegisteredDomain, SendConfirmation};
