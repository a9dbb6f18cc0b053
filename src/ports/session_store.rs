//! Session store port.
//!
//! A keyed mapping from chat id to dialogue session. The store hands out
//! per-session handles guarded by a `tokio::sync::Mutex`, so concurrent
//! messages for the same chat serialize their read-modify-write while
//! different chats never block each other.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::conversation::{ChatId, Session};

/// Shared, per-session-locked handle to one dialogue session.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Port for per-chat session state.
///
/// The store never fails: sessions are plain in-memory records created
/// on demand and reset in place.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for a chat, creating an idle one on first use.
    async fn get_or_create(&self, chat_id: ChatId) -> SessionHandle;

    /// Resets a chat's session to idle without removing its key, so
    /// later messages still route to the same handle.
    async fn clear(&self, chat_id: ChatId);
}
