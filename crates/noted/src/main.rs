//! # Noted CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/notedapp/` - Core library with UI-agnostic business logic
//! - `crates/noted/` - This CLI tool, depends on the `notedapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/noted/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs, handlers.rs)     │
//! │  - Terminal rendering with console styles (render.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/notedapp/src/api.rs)                     │
//! │  - Dispatches to command modules                            │
//! │  - Doubles as the reorder endpoint for the controller       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/notedapp/src/commands/*)             │
//! │  - Pure business logic + data access                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI layer owns argument parsing,
//! configuration and logging setup, error reporting and rendering.
//!
//! ## Testing Approach
//!
//! - Library behavior is tested in `notedapp` (unit tests + `tests/`).
//! - Rendering helpers have unit tests in `render.rs`.
//! - `tests/cli.rs` drives the real binary against a temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
