use std::collections::HashMap;

use axum::http::StatusCode;
use serde::Serialize;

use crate::problemdetails;

pub struct ErrorBuilder {
    status: StatusCode,
    type_: String,
    title: String,
    detail: String,
    instance: String,
    values: HashMap<String, serde_json::Value>,
}

impl ErrorBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            type_: String::new(),
            title: String::new(),
            detail: String::new(),
            instance: String::new(),
            values: HashMap::new(),
        }
    }

    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = type_.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    pub fn instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = instance.into();
        self
    }

    pub fn value<T: Serialize>(mut self, key: &str, value: T) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.values.insert(key.to_string(), value);
        }
        self
    }

    pub fn build(self) -> problemdetails::Problem {
        let mut problem = problemdetails::new(self.status)
            .with_type(self.type_)
            .with_title(self.title)
            .with_detail(self.detail)
            .with_instance(self.instance)
            .with_value("timestamp", chrono::Utc::now().to_rfc3339());

        for (key, value) in self.values {
            problem = problem.with_value(&key, value);
        }

        problem
    }
}

// Common error builders
pub fn bad_request() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::BAD_REQUEST)
        .type_("https://mailgate.dev/probs/bad-request")
        .title("Bad Request")
        .detail("The request was malformed or invalid")
        .instance("/error/bad-request")
        .value("error_code", "BAD_REQUEST")
}

pub fn bad_gateway() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::BAD_GATEWAY)
        .type_("https://mailgate.dev/probs/bad-gateway")
        .title("Bad Gateway")
        .detail("An upstream provider call failed")
        .instance("/error/bad-gateway")
        .value("error_code", "BAD_GATEWAY")
}

pub fn not_found() -> ErrorBuilder {
    ErrorBuilder::new(StatusCode::NOT_FOUND)
        .type_("https://mailgate.dev/probs/not-found")
        .title("Resource Not Found")
        .instance("/error/not-found")
        .value("error_code", "NOT_FOUND")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_defaults() {
        let problem = bad_request().build();
        assert_eq!(problem.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(problem.body["title"], "Bad Request");
        assert_eq!(problem.body["error_code"], "BAD_REQUEST");
        assert!(problem.body.contains_key("timestamp"));
    }

    #[test]
    fn detail_overrides_default() {
        let problem = bad_gateway().detail("SendGrid unreachable").build();
        assert_eq!(problem.status_code, StatusCode::BAD_GATEWAY);
        assert_eq!(problem.body["detail"], "SendGrid unreachable");
    }

    #[test]
    fn extra_values_survive_build() {
        let problem = not_found().value("resource", "domain").build();
        assert_eq!(problem.body["resource"], "domain");
    }
}
