//! # CLI Behavior
//!
//! One possible client for textsep. It is the only place that knows about
//! stdin, stdout, exit codes and colours.
//!
//! ## Naked execution
//!
//! `textsep` with no command lists the first page of "saved".
//!
//! ## Adding text
//!
//! `textsep add "1. one 2. two"` processes the argument. Without an argument
//! the text is read from stdin, so `pbpaste | textsep add` works.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: logging setup, context wiring and per-command handlers
//! - `render`: output formatting
//! - `styles`: terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
