//! Per-chat dialogue session state.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::step::{Field, Step};

/// Identifier of a Telegram chat, used as the session key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user's in-progress intake dialogue.
///
/// Holds the current step and the answers collected so far. `fields`
/// only ever contains entries for steps the dialogue has completed;
/// an answer is stored the moment its step advances.
///
/// Sessions live in memory only. A process restart drops all in-flight
/// dialogues, which is acceptable: they are short-lived and the user
/// simply starts over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    chat_id: ChatId,
    current_step: Step,
    fields: HashMap<Field, String>,
}

impl Session {
    /// Creates an idle session for a chat.
    pub fn new(chat_id: ChatId) -> Self {
        Self {
            chat_id,
            current_step: Step::Idle,
            fields: HashMap::new(),
        }
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn set_step(&mut self, step: Step) {
        self.current_step = step;
    }

    /// Returns the stored answer for a field, if one was collected.
    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Stores an answer verbatim, overwriting any previous value.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// Number of answers collected so far.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Drops all answers and returns the session to `Idle`.
    ///
    /// Used on the restart command and after a submission attempt,
    /// successful or not.
    pub fn reset(&mut self) {
        self.fields.clear();
        self.current_step = Step::Idle;
    }

    pub fn is_idle(&self) -> bool {
        self.current_step == Step::Idle
    }
}
