//! Mock record sink for tests and local development.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::event::EventRecord;
use crate::ports::{RecordSink, SinkError};

/// In-memory `RecordSink` that records every append.
///
/// Can be configured to fail, for exercising the failure acknowledgment
/// path without a real spreadsheet.
#[derive(Debug, Default)]
pub struct MockRecordSink {
    appended: Mutex<Vec<EventRecord>>,
    fail_append: bool,
}

impl MockRecordSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every append fails.
    pub fn failing() -> Self {
        Self {
            appended: Mutex::new(Vec::new()),
            fail_append: true,
        }
    }

    /// Records appended so far.
    pub fn appended(&self) -> Vec<EventRecord> {
        self.appended.lock().unwrap().clone()
    }

    pub fn append_count(&self) -> usize {
        self.appended.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordSink for MockRecordSink {
    async fn append(&self, record: &EventRecord) -> Result<(), SinkError> {
        if self.fail_append {
            return Err(SinkError::Transport("simulated outage".to_string()));
        }
        self.appended.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::domain::conversation::{ChatId, Session};

    #[tokio::test]
    async fn records_appends_in_order() {
        let sink = MockRecordSink::new();
        let record = EventRecord::from_session(&Session::new(ChatId(1)), Utc::now());

        sink.append(&record).await.unwrap();
        sink.append(&record).await.unwrap();

        assert_eq!(sink.append_count(), 2);
    }

    #[tokio::test]
    async fn failing_sink_records_nothing() {
        let sink = MockRecordSink::failing();
        let record = EventRecord::from_session(&Session::new(ChatId(1)), Utc::now());

        let result = sink.append(&record).await;

        assert!(matches!(result, Err(SinkError::Transport(_))));
        assert_eq!(sink.append_count(), 0);
    }
}
