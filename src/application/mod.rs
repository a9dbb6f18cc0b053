//! Application layer - handlers orchestrating domain operations over ports.

pub mod handlers;

pub use handlers::{IncomingMessage, ProcessMessageHandler};
