//! Telegram webhook endpoint.
//!
//! Receives one `Update` per user message. The bot token is part of the
//! webhook path and acts as a shared secret: updates arriving under any
//! other path value are rejected. The endpoint itself always answers
//! quickly; processing failures are logged, not surfaced, so Telegram
//! does not redeliver the update.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};

use crate::application::{IncomingMessage, ProcessMessageHandler};
use crate::domain::conversation::ChatId;

use super::dto::Update;

/// Shared state of the webhook route.
#[derive(Clone)]
pub struct WebhookState {
    handler: Arc<ProcessMessageHandler>,
    /// Expected value of the path's token segment.
    path_token: Arc<str>,
}

impl WebhookState {
    pub fn new(handler: Arc<ProcessMessageHandler>, path_token: impl Into<Arc<str>>) -> Self {
        Self {
            handler,
            path_token: path_token.into(),
        }
    }
}

/// Creates the webhook router.
pub fn webhook_routes(state: WebhookState) -> Router {
    Router::new()
        .route("/webhook/:token", post(receive_update))
        .with_state(state)
}

/// POST /webhook/:token - one Telegram update
async fn receive_update(
    State(state): State<WebhookState>,
    Path(token): Path<String>,
    Json(update): Json<Update>,
) -> StatusCode {
    if token != *state.path_token {
        tracing::warn!(update_id = update.update_id, "update with wrong path token");
        return StatusCode::NOT_FOUND;
    }

    let Some(message) = update.message else {
        tracing::debug!(update_id = update.update_id, "update without message, skipped");
        return StatusCode::OK;
    };
    let Some(text) = message.text else {
        tracing::debug!(chat_id = message.chat.id, "non-text message, skipped");
        return StatusCode::OK;
    };

    let incoming = IncomingMessage {
        chat_id: ChatId(message.chat.id),
        text,
    };
    if let Err(e) = state.handler.handle(incoming).await {
        tracing::error!(chat_id = message.chat.id, error = %e, "failed to process update");
    }
    StatusCode::OK
}
