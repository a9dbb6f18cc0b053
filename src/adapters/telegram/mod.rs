//! Telegram adapter: Bot API client, wire types and the webhook route.

mod client;
mod dto;
mod webhook;

pub use client::TelegramClient;
pub use dto::{ApiResponse, Chat, TelegramMessage, Update};
pub use webhook::{webhook_routes, WebhookState};
