//! # leadz Architecture
//!
//! leadz is a **UI-agnostic lead tracker**: a library for keeping a short list of
//! sales prospects, with a command-line client on top. The same core could back a
//! TUI, a web form or a browser extension.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders tables, logs setup    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Session              │
//! │  - Normalizes inputs (selectors, filters)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate → load → mutate → save, returns CmdResult       │
//! │  - Pure functions: validation.rs, query.rs                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - LeadStore: whole-list JSON load/save that never fails    │
//! │  - StorageSlot: FileSlot (production), MemorySlot (testing) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Whole-list persistence
//!
//! All leads live as one JSON array under one key. Every mutation reloads the
//! array, changes it and writes all of it back. Storage problems never reach the
//! caller: a broken slot reads as an empty list and a failed write is dropped,
//! both with a `tracing` event. Validation problems, on the other hand, are
//! always reported in full, one message per failing field.
//!
//! ## Concurrency
//!
//! None. Two processes writing the same data directory race, and the last
//! write wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Storage slot abstraction and the lead store
//! - [`model`]: `Lead` and `LeadForm`
//! - [`validation`]: Per-field form checks
//! - [`query`]: Search + status filtering
//! - [`session`]: Form mode and pending delete
//! - [`index`]: 1-based display indexes
//! - [`config`]: Allowed sources and statuses
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompts and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod query;
pub mod session;
pub mod store;
pub mod validation;
