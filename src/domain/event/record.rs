//! The finalized event record appended to the tabular store.

use chrono::{DateTime, Utc};

use crate::domain::conversation::{Field, Session};

/// Rendering of the submission timestamp in the appended row.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

/// The six collected answers plus the server-stamped submission time.
///
/// Produced exactly once per confirmed dialogue and immutable from then
/// on; persisted as one ordered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub name: String,
    pub date: String,
    pub time: String,
    pub region: String,
    pub description: String,
    pub participation: String,
    pub submitted_at: DateTime<Utc>,
}

impl EventRecord {
    /// Builds a record from a session's collected answers.
    ///
    /// Missing answers become empty strings, mirroring how the row was
    /// always assembled; a completed dialogue has all six.
    pub fn from_session(session: &Session, submitted_at: DateTime<Utc>) -> Self {
        let value = |field: Field| session.field(field).unwrap_or_default().to_string();
        Self {
            name: value(Field::Name),
            date: value(Field::Date),
            time: value(Field::Time),
            region: value(Field::Region),
            description: value(Field::Description),
            participation: value(Field::Participation),
            submitted_at,
        }
    }

    /// The ordered 7-tuple row form expected by the record sink.
    pub fn to_row(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.date.clone(),
            self.time.clone(),
            self.region.clone(),
            self.description.clone(),
            self.participation.clone(),
            self.submitted_at.format(TIMESTAMP_FORMAT).to_string(),
        ]
    }
}
