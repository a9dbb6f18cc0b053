//! Record sink port for persisting confirmed event records.
//!
//! The sink is a black box to the rest of the system: one append per
//! confirmed record, no retry on failure. A failed append is reported
//! upward and the record is lost by design.

use async_trait::async_trait;

use crate::domain::event::EventRecord;

/// Port for the external tabular store.
///
/// Implementations should be thread-safe; appends for different sessions
/// may run concurrently.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Appends one record as a single row.
    async fn append(&self, record: &EventRecord) -> Result<(), SinkError>;
}

/// Errors that can occur while appending a record.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Could not obtain or refresh credentials for the store.
    #[error("sink authorization failed: {0}")]
    Unauthorized(String),

    /// The store rejected the request.
    #[error("sink rejected append (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The store could not be reached.
    #[error("sink transport error: {0}")]
    Transport(String),
}
