//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `session` - In-memory session store
//! - `sheets` - Google Sheets record sink (and a mock)
//! - `telegram` - Telegram Bot API client and webhook endpoint

pub mod session;
pub mod sheets;
pub mod telegram;
