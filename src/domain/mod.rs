//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `conversation` - Dialogue steps, per-chat sessions and the controller
//! - `event` - The finalized event record and its row form

pub mod conversation;
pub mod event;
