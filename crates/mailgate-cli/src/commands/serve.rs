//! Serve command: bind the HTTP listener and run the gateway

use std::sync::Arc;

use clap::Args;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use mailgate_email::handlers::{self, AppState, GatewayApiDoc};
use mailgate_email::providers::{MailProvider, SendGridProvider};
use mailgate_email::services::{DomainService, EmailService};

#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1:8000", env = "MAILGATE_ADDRESS")]
    pub address: String,

    /// SendGrid API key; startup fails when absent
    #[arg(long, env = "SENDGRID_API_KEY", hide_env_values = true)]
    pub sendgrid_api_key: String,
}

impl ServeCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run())
    }

    async fn run(self) -> anyhow::Result<()> {
        let provider: Arc<dyn MailProvider> = Arc::new(SendGridProvider::new(self.sendgrid_api_key));

        let state = Arc::new(AppState {
            domain_service: Arc::new(DomainService::new(provider.clone())),
            email_service: Arc::new(EmailService::new(provider)),
        });

        let app = handlers::configure_routes()
            .with_state(state)
            .merge(
                SwaggerUi::new("/swagger-ui")
                    .url("/api-docs/openapi.json", GatewayApiDoc::openapi()),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let listener = TcpListener::bind(&self.address).await?;
        info!("Mailgate listening on {}", self.address);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
