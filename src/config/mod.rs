//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `EVENT_INTAKE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use event_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod server;
mod sheets;
mod telegram;

pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;
pub use sheets::SheetsConfig;
pub use telegram::TelegramConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Telegram configuration (bot token, public webhook URL)
    pub telegram: TelegramConfig,

    /// Google Sheets configuration (spreadsheet, credentials)
    pub sheets: SheetsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `EVENT_INTAKE` prefix, using `__`
    /// (double underscore) to separate nested values:
    ///
    /// - `EVENT_INTAKE__TELEGRAM__BOT_TOKEN=...` -> `telegram.bot_token`
    /// - `EVENT_INTAKE__SHEETS__SPREADSHEET_ID=...` -> `sheets.spreadsheet_id`
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EVENT_INTAKE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.telegram.validate()?;
        self.sheets.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("EVENT_INTAKE__TELEGRAM__BOT_TOKEN", "123:abc");
        env::set_var(
            "EVENT_INTAKE__TELEGRAM__PUBLIC_URL",
            "https://bot.example.com",
        );
        env::set_var("EVENT_INTAKE__SHEETS__SPREADSHEET_ID", "sheet-123");
    }

    fn clear_env() {
        for key in [
            "EVENT_INTAKE__TELEGRAM__BOT_TOKEN",
            "EVENT_INTAKE__TELEGRAM__PUBLIC_URL",
            "EVENT_INTAKE__SHEETS__SPREADSHEET_ID",
            "EVENT_INTAKE__SERVER__PORT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn loads_minimal_configuration_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();

        let config = AppConfig::load().unwrap();
        assert_eq!(config.telegram.bot_token.expose_secret(), "123:abc");
        assert_eq!(config.sheets.spreadsheet_id, "sheet-123");
        assert_eq!(config.server.port, 10000);
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    fn server_section_is_overridable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("EVENT_INTAKE__SERVER__PORT", "8080");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.server.port, 8080);

        clear_env();
    }

    #[test]
    fn missing_required_sections_fail_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        assert!(AppConfig::load().is_err());
    }
}
