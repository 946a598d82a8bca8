//! Mock mail provider for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::traits::{MailProvider, SendEmailRequest, SendOutcome};
use crate::errors::GatewayError;

/// Mock mail provider with configurable canned responses
#[derive(Debug, Clone)]
pub struct MockMailProvider {
    /// Counters for tracking calls
    pub register_count: Arc<AtomicUsize>,
    pub validate_count: Arc<AtomicUsize>,
    pub send_count: Arc<AtomicUsize>,

    /// Configurable responses
    pub register_response: Value,
    pub validate_response: Value,
    pub send_status: u16,
    pub send_body: Value,
    pub fail_transport: bool,
}

impl Default for MockMailProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMailProvider {
    pub fn new() -> Self {
        Self {
            register_count: Arc::new(AtomicUsize::new(0)),
            validate_count: Arc::new(AtomicUsize::new(0)),
            send_count: Arc::new(AtomicUsize::new(0)),
            register_response: json!({
                "id": 1,
                "domain": "example.com",
                "dns": {
                    "mail_cname": {
                        "type": "cname",
                        "host": "em1.example.com",
                        "data": "u1.sendgrid.net"
                    }
                }
            }),
            validate_response: json!({"id": 1, "valid": true}),
            send_status: 202,
            send_body: Value::Null,
            fail_transport: false,
        }
    }

    pub fn with_register_response(mut self, response: Value) -> Self {
        self.register_response = response;
        self
    }

    pub fn with_validate_response(mut self, response: Value) -> Self {
        self.validate_response = response;
        self
    }

    pub fn with_send_result(mut self, status: u16, body: Value) -> Self {
        self.send_status = status;
        self.send_body = body;
        self
    }

    pub fn with_transport_failure(mut self) -> Self {
        self.fail_transport = true;
        self
    }

    pub fn register_call_count(&self) -> usize {
        self.register_count.load(Ordering::SeqCst)
    }

    pub fn validate_call_count(&self) -> usize {
        self.validate_count.load(Ordering::SeqCst)
    }

    pub fn send_call_count(&self) -> usize {
        self.send_count.load(Ordering::SeqCst)
    }

    fn transport_error() -> GatewayError {
        GatewayError::Transport("connection refused".to_string())
    }
}

#[async_trait]
impl MailProvider for MockMailProvider {
    async fn register_domain(&self, _domain: &str) -> Result<Value, GatewayError> {
        self.register_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_transport {
            return Err(Self::transport_error());
        }
        Ok(self.register_response.clone())
    }

    async fn validate_domain(&self, _domain_id: i64) -> Result<Value, GatewayError> {
        self.validate_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_transport {
            return Err(Self::transport_error());
        }
        Ok(self.validate_response.clone())
    }

    async fn send(&self, _email: &SendEmailRequest) -> Result<SendOutcome, GatewayError> {
        self.send_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_transport {
            return Err(Self::transport_error());
        }
        Ok(SendOutcome {
            status_code: self.send_status,
            body: self.send_body.clone(),
            headers: HashMap::new(),
        })
    }
}
