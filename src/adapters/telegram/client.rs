//! Telegram Bot API client.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::domain::conversation::{ChatId, OutboundMessage};
use crate::ports::{Messenger, MessengerError};

use super::dto::ApiResponse;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// `Messenger` backed by the Telegram Bot API.
pub struct TelegramClient {
    token: SecretString,
    api_base: String,
    http: reqwest::Client,
}

impl TelegramClient {
    pub fn new(token: SecretString) -> Self {
        Self {
            token,
            api_base: DEFAULT_API_BASE.to_string(),
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Point at a different API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    /// Registers the webhook endpoint with Telegram.
    ///
    /// Called once at startup; Telegram delivers all updates to `url`
    /// from then on.
    pub async fn set_webhook(&self, url: &str) -> Result<(), MessengerError> {
        self.call("setWebhook", json!({ "url": url })).await?;
        tracing::info!(url, "webhook registered");
        Ok(())
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_base,
            self.token.expose_secret(),
            method
        )
    }

    async fn call(&self, method: &str, body: Value) -> Result<(), MessengerError> {
        let response = self
            .http
            .post(self.method_url(method))
            .json(&body)
            .send()
            .await
            .map_err(|e| MessengerError::Transport(e.to_string()))?;

        let api: ApiResponse = response
            .json()
            .await
            .map_err(|e| MessengerError::Transport(e.to_string()))?;

        if !api.ok {
            return Err(MessengerError::Api(
                api.description
                    .unwrap_or_else(|| format!("{method} returned ok=false")),
            ));
        }
        Ok(())
    }
}

/// Builds the `sendMessage` payload, honoring the Markdown hint.
fn send_message_body(chat_id: ChatId, message: &OutboundMessage) -> Value {
    let mut body = json!({
        "chat_id": chat_id.0,
        "text": message.text,
    });
    if message.markdown {
        body["parse_mode"] = json!("Markdown");
    }
    body
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send(&self, chat_id: ChatId, message: &OutboundMessage) -> Result<(), MessengerError> {
        self.call("sendMessage", send_message_body(chat_id, message))
            .await
    }
}
