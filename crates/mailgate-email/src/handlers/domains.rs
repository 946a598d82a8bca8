//! Domain registration and verification handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use mailgate_core::problemdetails::Problem;
use tracing::error;

use super::types::{AddDomainRequest, AddDomainResponse, AppState, VerifyDomainResponse};

/// Configure domain routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add-domain", post(add_domain))
        .route("/verify-domain/{domain_id}", post(verify_domain))
}

/// Register a sender domain with SendGrid
#[utoipa::path(
    tag = "Domains",
    post,
    path = "/add-domain",
    request_body = AddDomainRequest,
    responses(
        (status = 200, description = "Domain registered; DNS records to publish", body = AddDomainResponse),
        (status = 400, description = "SendGrid rejected the domain", body = mailgate_core::ProblemDetails),
        (status = 502, description = "SendGrid could not be reached", body = mailgate_core::ProblemDetails)
    )
)]
pub async fn add_domain(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddDomainRequest>,
) -> Result<impl IntoResponse, Problem> {
    let result = state
        .domain_service
        .add_domain(&request.domain)
        .await
        .map_err(|e| {
            error!("Failed to add domain: {}", e);
            super::problem_from(e)
        })?;

    Ok(Json(AddDomainResponse {
        domain_info: result.domain_info,
        dns_records: result.dns_records,
    }))
}

/// Trigger DNS verification for a registered domain
#[utoipa::path(
    tag = "Domains",
    post,
    path = "/verify-domain/{domain_id}",
    params(
        ("domain_id" = i64, Path, description = "SendGrid domain ID")
    ),
    responses(
        (status = 200, description = "Domain verified", body = VerifyDomainResponse),
        (status = 400, description = "SendGrid reports the domain as not valid", body = mailgate_core::ProblemDetails),
        (status = 502, description = "SendGrid could not be reached", body = mailgate_core::ProblemDetails)
    )
)]
pub async fn verify_domain(
    State(state): State<Arc<AppState>>,
    Path(domain_id): Path<i64>,
) -> Result<impl IntoResponse, Problem> {
    state
        .domain_service
        .verify_domain(domain_id)
        .await
        .map_err(|e| {
            error!("Failed to verify domain {}: {}", domain_id, e);
            super::problem_from(e)
        })?;

    Ok(Json(VerifyDomainResponse {
        message: "Domain verification successful!".to_string(),
    }))
}
