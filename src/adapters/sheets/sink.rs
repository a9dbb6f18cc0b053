//! Google Sheets record sink.
//!
//! Appends each confirmed record as one row via the Sheets
//! `values:append` endpoint with the RAW input option, matching how the
//! rows were always written. No retry: a failed append is reported
//! upward and the record is lost.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::event::EventRecord;
use crate::ports::{RecordSink, SinkError};

use super::auth::{ServiceAccountKey, TokenProvider};

const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

/// `RecordSink` backed by one worksheet of a Google spreadsheet.
pub struct GoogleSheetsSink {
    spreadsheet_id: String,
    /// A1-notation range the append is anchored to; `A1` targets the
    /// first worksheet's data table.
    range: String,
    api_base: String,
    tokens: TokenProvider,
    http: reqwest::Client,
}

impl GoogleSheetsSink {
    pub fn new(key: ServiceAccountKey, spreadsheet_id: impl Into<String>) -> Self {
        let http = reqwest::Client::new();
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            range: "A1".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            tokens: TokenProvider::new(key, http.clone()),
            http,
        }
    }

    /// Anchor appends to a different range (e.g. a named worksheet).
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    /// Point at a different API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base = url.into();
        self
    }

    fn append_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.api_base, self.spreadsheet_id, self.range
        )
    }
}

#[async_trait]
impl RecordSink for GoogleSheetsSink {
    async fn append(&self, record: &EventRecord) -> Result<(), SinkError> {
        let token = self.tokens.access_token().await?;
        let body = json!({ "values": [record.to_row()] });

        let response = self
            .http
            .post(self.append_url())
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SinkError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!(spreadsheet_id = %self.spreadsheet_id, "record appended");
        Ok(())
    }
}
