//! # Bookshelf Architecture
//!
//! Bookshelf is a **UI-agnostic book catalog library** with an interactive menu
//! as its first client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, runs the numbered menu, renders results    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Facade (catalog.rs)                                │
//! │  - Owns the record sequence, loads once, saves per mutation │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over the in-memory records                    │
//! │  - Returns `CmdResult` (records + messages)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! Read-all on open, write-all after each add, delete, or status change. Fine
//! for small catalogs; every mutation costs a full rewrite.
//!
//! ## Ids
//!
//! By default a new record gets `count + 1`, which can repeat an existing id
//! after a deletion. [`model::IdPolicy::Monotonic`] opts into ids that are
//! never reused.
//!
//! ## Module Overview
//!
//! - [`catalog`]: The facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record`, `Status`, `IdPolicy`
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
