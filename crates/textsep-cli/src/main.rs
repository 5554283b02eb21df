//! # Textsep CLI
//!
//! The binary is deliberately thin: everything lives in `src/cli/`, and this
//! file only calls `cli::run()` and turns an error into an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/textsep-cli/src/cli/)                    │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, context wiring and dispatch (commands.rs)       │
//! │  - Terminal rendering with `console` (render.rs)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/textsep/src/api.rs)                      │
//! │  - Dispatches to command modules, returns `CmdResult`       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Indexes typed by the user are 1-based; the conversion to the library's
//! 0-based positions happens in `commands.rs` and nowhere else.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
