//! Core types, enrollment storage, and configuration for roster.
//!
//! This crate provides the foundational data structures used across all roster crates:
//! - [`types`] — Student/Subject records and error types
//! - [`store`] — The [`RosterStore`](store::RosterStore) trait for enrollment persistence
//! - [`sqlite`] — SQLite-backed implementation of `RosterStore`
//! - [`config`] — Configuration loading from `.roster/roster.json`

pub mod config;
pub mod sqlite;
pub mod sqlite_helpers;
pub mod sqlite_queries;
pub mod store;
pub mod types;
