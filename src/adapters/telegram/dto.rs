//! Telegram Bot API wire types.
//!
//! Only the fields the bot reads are deserialized; everything else in
//! the update payload is ignored.

use serde::Deserialize;

/// One incoming update delivered to the webhook.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<TelegramMessage>,
}

/// A user message inside an update.
#[derive(Debug, Deserialize)]
pub struct TelegramMessage {
    pub chat: Chat,
    /// Absent for stickers, photos and other non-text content.
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Envelope of every Bot API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    pub description: Option<String>,
}
