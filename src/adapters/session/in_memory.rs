//! In-memory session store.
//!
//! A `HashMap` of per-chat handles behind an `RwLock`. The outer lock is
//! held only for lookup/insert; dialogue mutation happens under each
//! session's own `Mutex`, so slow work for one chat (such as a sink
//! append) never blocks another chat's messages.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::conversation::{ChatId, Session};
use crate::ports::{SessionHandle, SessionStore};

/// Session store for a single-process deployment.
///
/// Sessions are short-lived and few; no eviction is performed. A process
/// restart drops all in-flight dialogues.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<ChatId, SessionHandle>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Number of sessions currently tracked (idle ones included).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, chat_id: ChatId) -> SessionHandle {
        // Fast path: the session already exists.
        if let Some(handle) = self.sessions.read().await.get(&chat_id) {
            return handle.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(chat_id)
            .or_insert_with(|| Arc::new(Mutex::new(Session::new(chat_id))))
            .clone()
    }

    async fn clear(&self, chat_id: ChatId) {
        // Reset in place; the key stays so existing handles remain valid.
        if let Some(handle) = self.sessions.read().await.get(&chat_id) {
            handle.lock().await.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{Field, Step};

    #[tokio::test]
    async fn creates_idle_session_on_first_use() {
        let store = InMemorySessionStore::new();
        let handle = store.get_or_create(ChatId(1)).await;
        assert!(handle.lock().await.is_idle());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn returns_the_same_handle_for_the_same_chat() {
        let store = InMemorySessionStore::new();
        let first = store.get_or_create(ChatId(1)).await;
        first.lock().await.set_step(Step::Date);

        let second = store.get_or_create(ChatId(1)).await;
        assert_eq!(second.lock().await.current_step(), Step::Date);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn different_chats_get_independent_sessions() {
        let store = InMemorySessionStore::new();
        let a = store.get_or_create(ChatId(1)).await;
        a.lock().await.set_field(Field::Name, "EventX");

        let b = store.get_or_create(ChatId(2)).await;
        assert_eq!(b.lock().await.field(Field::Name), None);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn clear_resets_without_removing_the_key() {
        let store = InMemorySessionStore::new();
        let handle = store.get_or_create(ChatId(1)).await;
        {
            let mut session = handle.lock().await;
            session.set_step(Step::Confirm);
            session.set_field(Field::Name, "EventX");
        }

        store.clear(ChatId(1)).await;

        assert_eq!(store.len().await, 1);
        let session = handle.lock().await;
        assert!(session.is_idle());
        assert_eq!(session.field_count(), 0);
    }

    #[tokio::test]
    async fn clear_of_unknown_chat_is_a_no_op() {
        let store = InMemorySessionStore::new();
        store.clear(ChatId(404)).await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn concurrent_messages_for_one_chat_serialize() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut tasks = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                let handle = store.get_or_create(ChatId(1)).await;
                let mut session = handle.lock().await;
                let count: u32 = session
                    .field(Field::Name)
                    .map(|v| v.parse().unwrap())
                    .unwrap_or(0);
                // Yield while holding the lock to provoke interleaving.
                tokio::task::yield_now().await;
                session.set_field(Field::Name, (count + 1).to_string());
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        // Read-modify-write under the per-session lock loses no update.
        let handle = store.get_or_create(ChatId(1)).await;
        assert_eq!(handle.lock().await.field(Field::Name), Some("32"));
    }
}
