use crate::error::NotifyError;
use crate::sender::EmailSender;
use crate::templates::{self, NotificationKind};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub sender: Arc<dyn EmailSender>,
}

/// Build the service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/notifications", post(handle_notification))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Wire shape of a dispatch request. All fields optional so that missing
/// values map to 400 instead of a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationRequest {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    user_email: Option<String>,
    #[serde(default)]
    user_name: Option<String>,
    #[serde(default)]
    plan_name: Option<String>,
}

async fn handle_notification(
    State(state): State<AppState>,
    Json(request): Json<NotificationRequest>,
) -> Result<Response, NotifyError> {
    let kind_str = request
        .kind
        .filter(|s| !s.trim().is_empty())
        .ok_or(NotifyError::MissingField("type"))?;
    let user_email = request
        .user_email
        .filter(|s| !s.trim().is_empty())
        .ok_or(NotifyError::MissingField("userEmail"))?;

    let kind =
        NotificationKind::parse(&kind_str).ok_or_else(|| NotifyError::UnknownType(kind_str))?;

    let message = templates::render(
        kind,
        request.user_name.as_deref(),
        request.plan_name.as_deref(),
    );

    if let Err(e) = state.sender.send(&user_email, &message).await {
        error!(kind = kind.as_str(), "email delivery failed: {e}");
        return Err(e);
    }

    info!(kind = kind.as_str(), "notification dispatched");

    let body = serde_json::json!({ "success": true, "type": kind.as_str() });
    Ok(Json(body).into_response())
}

async fn handle_health() -> Response {
    Json(serde_json::json!({ "status": "ok" })).into_response()
}
