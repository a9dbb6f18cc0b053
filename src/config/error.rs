//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Telegram bot token must not be empty")]
    MissingBotToken,

    #[error("Public URL must use HTTPS")]
    PublicUrlMustBeHttps,

    #[error("Spreadsheet id must not be empty")]
    MissingSpreadsheetId,

    #[error("Append range must not be empty")]
    MissingRange,
}
