//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Per-chat dialogue state with per-key locking
//! - `RecordSink` - The external tabular store (one append per record)
//! - `Messenger` - Outbound message delivery to the chat transport

mod messenger;
mod record_sink;
mod session_store;

pub use messenger::{Messenger, MessengerError};
pub use record_sink::{RecordSink, SinkError};
pub use session_store::{SessionHandle, SessionStore};
