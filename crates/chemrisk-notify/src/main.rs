//! ChemRisk notification dispatch service.
//!
//! Accepts `POST /notifications` with `{type, userEmail, userName, planName}`,
//! renders the canned template for the type and hands delivery to the
//! configured email provider.

mod config;
mod error;
mod routes;
mod sender;
mod templates;

use config::NotifyConfig;
use routes::AppState;
use sender::HttpEmailSender;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = NotifyConfig::from_env()?;

    let state = AppState {
        sender: Arc::new(HttpEmailSender::new(&config)),
    };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "chemrisk-notify listening");
    axum::serve(listener, app).await?;

    Ok(())
}
