//! HTTP handlers for the gateway

mod domains;
mod emails;
mod types;

pub use types::AppState;

use std::sync::Arc;

use axum::Router;
use mailgate_core::error_builder::{bad_gateway, bad_request};
use mailgate_core::problemdetails::Problem;
use utoipa::OpenApi;

use crate::errors::GatewayError;

/// Configure gateway routes
pub fn configure_routes() -> Router<Arc<AppState>> {
    Router::new().merge(domains::routes()).merge(emails::routes())
}

/// Map a gateway error onto a problem response.
///
/// Provider rejections of the caller's input answer 400; failures on the way
/// to the provider answer 502. The detail string carries the raw provider
/// payload for diagnostics.
pub(crate) fn problem_from(err: GatewayError) -> Problem {
    if err.is_upstream() {
        bad_gateway().detail(err.to_string()).build()
    } else {
        bad_request().detail(err.to_string()).build()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(domains::add_domain, domains::verify_domain, emails::send_email),
    components(schemas(
        types::AddDomainRequest,
        types::AddDomainResponse,
        types::VerifyDomainResponse,
        types::SendEmailRequestBody,
        types::SendEmailResponseBody,
        crate::dns::DnsRecord,
        mailgate_core::ProblemDetails,
    )),
    tags(
        (name = "Domains", description = "Sender domain registration and verification"),
        (name = "Emails", description = "Email sending")
    )
)]
pub struct GatewayApiDoc;
