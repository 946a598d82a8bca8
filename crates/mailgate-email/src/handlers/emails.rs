//! Email sending handlers

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use mailgate_core::problemdetails::Problem;
use tracing::error;

use super::types::{AppState, SendEmailRequestBody, SendEmailResponseBody};
use crate::providers::SendEmailRequest;

/// Configure email routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/send-email", post(send_email))
}

/// Send a single HTML email through SendGrid
#[utoipa::path(
    tag = "Emails",
    post,
    path = "/send-email",
    request_body = SendEmailRequestBody,
    responses(
        (status = 200, description = "Email accepted by SendGrid", body = SendEmailResponseBody),
        (status = 400, description = "SendGrid refused the message", body = mailgate_core::ProblemDetails),
        (status = 502, description = "SendGrid could not be reached", body = mailgate_core::ProblemDetails)
    )
)]
pub async fn send_email(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendEmailRequestBody>,
) -> Result<impl IntoResponse, Problem> {
    let send_request = SendEmailRequest {
        from_email: request.from_email,
        to_email: request.to_email,
        subject: request.subject,
        content: request.content,
    };

    let confirmation = state
        .email_service
        .send(send_request)
        .await
        .map_err(|e| {
            error!("Failed to send email: {}", e);
            super::problem_from(e)
        })?;

    Ok(Json(SendEmailResponseBody {
        message: "Email sent successfully!".to_string(),
        status_code: confirmation.status_code,
    }))
}
