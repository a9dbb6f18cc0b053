//! Outbound messaging port.

use async_trait::async_trait;

use crate::domain::conversation::{ChatId, OutboundMessage};

/// Port for delivering messages back to a chat.
///
/// The message carries a rendering hint (`markdown`) that transports may
/// honor or ignore; only the review summary sets it.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends one message to a chat.
    async fn send(&self, chat_id: ChatId, message: &OutboundMessage) -> Result<(), MessengerError>;
}

/// Errors that can occur while sending a message.
#[derive(Debug, thiserror::Error)]
pub enum MessengerError {
    /// The messaging API rejected the request.
    #[error("messaging API error: {0}")]
    Api(String),

    /// The messaging API could not be reached.
    #[error("messaging transport error: {0}")]
    Transport(String),
}
