//! Event record domain types.

mod record;

pub use record::{EventRecord, TIMESTAMP_FORMAT};
