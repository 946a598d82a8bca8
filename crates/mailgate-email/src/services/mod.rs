//! Gateway services bridging handlers and the mail provider

mod domain_service;
mod email_service;

pub use domain_service::{DomainService, RegisteredDomain};
pub use email_service::{EmailService, SendConfirmation};
