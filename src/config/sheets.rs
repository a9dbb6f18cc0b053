//! Google Sheets configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;

/// Google Sheets configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    /// Spreadsheet the records are appended to
    pub spreadsheet_id: String,

    /// Service-account key JSON, inline (takes precedence over the file)
    pub credentials: Option<SecretString>,

    /// Key file used when no inline credentials are set (local runs)
    #[serde(default = "default_credentials_file")]
    pub credentials_file: String,

    /// A1-notation range appends are anchored to
    #[serde(default = "default_range")]
    pub range: String,
}

impl SheetsConfig {
    /// Validate Sheets configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.spreadsheet_id.is_empty() {
            return Err(ValidationError::MissingSpreadsheetId);
        }
        if self.range.is_empty() {
            return Err(ValidationError::MissingRange);
        }
        Ok(())
    }
}

fn default_credentials_file() -> String {
    "credentials.json".to_string()
}

fn default_range() -> String {
    "A1".to_string()
}
