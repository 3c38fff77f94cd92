//! # Phonedir Architecture
//!
//! Phonedir is a **contact directory library** with a command-line client on top.
//! The library validates, stores, searches and pages contact records; the binary
//! only parses arguments, prompts, and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts for input, formats output      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory directory                             │
//! │  - Converts 1-based user indexes to positions               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, edit, display, search, config                       │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core: validation.rs, model.rs, query.rs, page.rs           │
//! │  Storage: store/ (DataStore over a raw StorageBackend)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records are always valid
//!
//! A [`model::Record`] can only be built through validating constructors, and
//! editing one returns a new value. Anything read from disk or typed by a user
//! arrives as [`model::RecordData`] and must pass [`validation`] first.
//!
//! ## Logging is injected
//!
//! Store, query and command code report problems through a
//! [`logging::EventLog`] they are handed, never through global state. The
//! binary decides where those events go.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: `Record`, `RecordData`, `Field` and the field lookup table
//! - [`validation`]: Name and phone patterns
//! - [`query`]: Search query parsing and matching
//! - [`page`]: Display indexes and pagination
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`logging`]: Event log collaborator and file logger setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod page;
pub mod query;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
