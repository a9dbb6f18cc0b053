//! ProcessMessageHandler - drives one session per inbound chat message.
//!
//! This is the orchestration seam between the transport and the domain:
//! look up the session, advance the dialogue, and on a confirmed
//! submission hand the record to the sink. The session is reset to idle
//! after a submission attempt whether or not the sink succeeded; only
//! the acknowledgment differs.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::conversation::{
    Advance, ChatId, ConversationController, OutboundMessage, SUBMIT_FAILED, SUBMIT_OK,
};
use crate::domain::event::EventRecord;
use crate::ports::{Messenger, MessengerError, RecordSink, SessionStore};

/// One inbound message from the transport.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub chat_id: ChatId,
    pub text: String,
}

/// Handler for inbound chat messages.
pub struct ProcessMessageHandler {
    sessions: Arc<dyn SessionStore>,
    sink: Arc<dyn RecordSink>,
    messenger: Arc<dyn Messenger>,
}

impl ProcessMessageHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        sink: Arc<dyn RecordSink>,
        messenger: Arc<dyn Messenger>,
    ) -> Self {
        Self {
            sessions,
            sink,
            messenger,
        }
    }

    /// Processes one message and sends the resulting replies.
    ///
    /// The session lock is held across the whole step, including the
    /// sink call on submission, so concurrent messages for the same chat
    /// cannot interleave. Other chats proceed independently.
    pub async fn handle(&self, msg: IncomingMessage) -> Result<(), MessengerError> {
        let handle = self.sessions.get_or_create(msg.chat_id).await;
        let mut session = handle.lock().await;

        let replies = if is_restart_command(&msg.text) {
            vec![ConversationController::start(&mut session)]
        } else {
            match ConversationController::advance(&mut session, &msg.text) {
                Advance::Reply(replies) => replies,
                Advance::Submit => {
                    let record = EventRecord::from_session(&session, Utc::now());
                    let ack = match self.sink.append(&record).await {
                        Ok(()) => SUBMIT_OK,
                        Err(e) => {
                            tracing::error!(chat_id = %msg.chat_id, error = %e, "record append failed");
                            SUBMIT_FAILED
                        }
                    };
                    session.reset();
                    vec![OutboundMessage::plain(ack)]
                }
            }
        };

        tracing::debug!(
            chat_id = %msg.chat_id,
            step = ?session.current_step(),
            replies = replies.len(),
            "processed message"
        );
        drop(session);

        for reply in &replies {
            self.messenger.send(msg.chat_id, reply).await?;
        }
        Ok(())
    }
}

/// Recognizes the restart command, with or without a bot mention
/// (`/start`, `/start@SomeBot`).
fn is_restart_command(text: &str) -> bool {
    text.trim()
        .split_whitespace()
        .next()
        .map(|token| token == "/start" || token.starts_with("/start@"))
        .unwrap_or(false)
}
