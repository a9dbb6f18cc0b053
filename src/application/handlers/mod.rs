//! Application command handlers.

mod process_message;

pub use process_message::{IncomingMessage, ProcessMessageHandler};
