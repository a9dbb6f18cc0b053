//! Telegram configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token issued by BotFather
    pub bot_token: SecretString,

    /// Public HTTPS base URL the webhook is reachable under
    pub public_url: String,
}

impl TelegramConfig {
    /// Webhook path; the token segment doubles as a shared secret.
    pub fn webhook_path(&self) -> String {
        format!("/webhook/{}", self.bot_token.expose_secret())
    }

    /// Full webhook URL registered with Telegram.
    pub fn webhook_url(&self) -> String {
        format!(
            "{}{}",
            self.public_url.trim_end_matches('/'),
            self.webhook_path()
        )
    }

    /// Expected value of the webhook path's token segment.
    pub fn path_token(&self) -> String {
        self.bot_token.expose_secret().to_string()
    }

    /// Validate Telegram configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bot_token.expose_secret().is_empty() {
            return Err(ValidationError::MissingBotToken);
        }
        if !self.public_url.starts_with("https://") {
            return Err(ValidationError::PublicUrlMustBeHttps);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(public_url: &str) -> TelegramConfig {
        TelegramConfig {
            bot_token: SecretString::new("123:abc".to_string()),
            public_url: public_url.to_string(),
        }
    }

    #[test]
    fn webhook_url_joins_base_and_token_path() {
        let config = config("https://bot.example.com");
        assert_eq!(
            config.webhook_url(),
            "https://bot.example.com/webhook/123:abc"
        );
    }

    #[test]
    fn trailing_slash_in_public_url_is_tolerated() {
        let config = config("https://bot.example.com/");
        assert_eq!(
            config.webhook_url(),
            "https://bot.example.com/webhook/123:abc"
        );
    }

    #[test]
    fn http_public_url_fails_validation() {
        assert!(config("http://bot.example.com").validate().is_err());
    }

    #[test]
    fn empty_token_fails_validation() {
        let config = TelegramConfig {
            bot_token: SecretString::new(String::new()),
            public_url: "https://bot.example.com".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingBotToken)
        ));
    }
}
