//! Event Intake - Telegram bot for collecting event announcements
//!
//! This crate implements a guided question-and-answer dialogue that
//! collects six pieces of event data, lets the user review and edit the
//! answers, and appends each confirmed record to a Google spreadsheet.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
