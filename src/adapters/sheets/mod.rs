//! Google Sheets adapter: record sink, service-account auth and a mock.

mod auth;
mod mock;
mod sink;

pub use auth::{KeyError, ServiceAccountKey, TokenProvider};
pub use mock::MockRecordSink;
pub use sink::GoogleSheetsSink;
