//! Domain registration and verification against the mail provider

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error};

use crate::dns::{extract_dns_records, DnsRecord};
use crate::errors::GatewayError;
use crate::providers::MailProvider;

/// Service for registering and verifying sender domains
#[derive(Clone)]
pub struct DomainService {
    provider: Arc<dyn MailProvider>,
}

/// Raw provider payload plus the reshaped DNS records
#[derive(Debug, Clone)]
pub struct RegisteredDomain {
    pub domain_info: Value,
    pub dns_records: Vec<DnsRecord>,
}

impl DomainService {
    pub fn new(provider: Arc<dyn MailProvider>) -> Self {
        Self { provider }
    }

    /// Register a sender domain and derive the DNS records to publish.
    ///
    /// An empty record list is a valid success; only a response without an
    /// `id` counts as a rejected registration.
    pub async fn add_domain(&self, domain: &str) -> Result<RegisteredDomain, GatewayError> {
        debug!("Adding domain: {}", domain);

        let domain_info = self.provider.register_domain(domain).await?;

        // A body without an id is a rejection, whatever the HTTP status was.
        if domain_info.get("id").is_none() {
            error!("SendGrid rejected domain registration for {}", domain);
            return Err(GatewayError::BadRegistration(domain_info));
        }

        let dns_records = extract_dns_records(&domain_info)?;

        Ok(RegisteredDomain {
            domain_info,
            dns_records,
        })
    }

    /// Ask the provider to validate the domain's published DNS records.
    ///
    /// Single point-in-time check; propagation polling is the caller's
    /// problem.
    pub async fn verify_domain(&self, domain_id: i64) -> Result<(), GatewayError> {
        debug!("Verifying domain id: {}", domain_id);

        let result = self.provider.validate_domain(domain_id).await?;

        let valid = result
            .get("valid")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if valid {
            Ok(())
        } else {
            error!("SendGrid reports domain id {} as not valid", domain_id);
            Err(GatewayError::VerificationFailed(result))
        }
    }
}
