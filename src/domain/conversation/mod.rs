//! The intake dialogue: steps, per-chat session state and the controller
//! that advances a session one inbound message at a time.

mod controller;
mod session;
mod step;

pub use controller::{
    Advance, ConversationController, OutboundMessage, CONFIRM_HINT, DESCRIPTION_TOO_LONG,
    EDIT_NOT_UNDERSTOOD, SUBMIT_FAILED, SUBMIT_OK, WELCOME,
};
pub use session::{ChatId, Session};
pub use step::{Field, Step, EDIT_KEYWORDS, MAX_DESCRIPTION_CHARS};
