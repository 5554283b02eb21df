//! # Textsep Architecture
//!
//! Textsep takes a blob of pasted text, splits it into separate items
//! (numbered lists, bullets, steps, or explicit delimiters) and keeps those
//! items in folders where they can be copied, edited, moved and pruned.
//!
//! Like any library-first tool it is layered so that the core never touches
//! a terminal:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (textsep-cli crate)                                    │
//! │  - Parses arguments, renders results, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Facade over commands, holds session state                │
//! │  - Recomputes folder counts after each mutation             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user intent, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain + Storage (detect/, store/, folders.rs, ...)        │
//! │  - Splitting, item lists, folder registry, pagination       │
//! │  - KeyValueStore trait: FsBackend (prod), MemBackend (test) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout or stderr and never
//! exits the process. Diagnostics go through `tracing`; what the user should
//! see comes back as [`commands::CmdMessage`]s.
//!
//! ## Testing
//!
//! Command and store logic is tested in place against
//! [`store::mem_backend::MemBackend`] and [`clipboard::MemoryClipboard`].
//! The filesystem backend is covered by the integration tests under
//! `tests/`, and the binary by the CLI crate's own tests.
//!
//! ## Module Overview
//!
//! - [`api`]: entry point for all operations
//! - [`commands`]: logic for each user intent
//! - [`detect`]: the content splitter
//! - [`store`]: key-value storage and the item lists
//! - [`folders`]: folder registry
//! - [`pagination`]: page math and view state
//! - [`clipboard`]: system and in-memory clipboards
//! - [`config`] / [`settings`]: file config and stored preferences
//! - [`init`]: data directory resolution
//! - [`model`], [`error`]: core types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod folders;
pub mod init;
pub mod model;
pub mod pagination;
pub mod settings;
pub mod store;
