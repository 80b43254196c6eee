//! # CLI Behavior
//!
//! This is **one possible UI client** for noted, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`noted`)
//!
//! Running `noted` with no arguments defaults to `noted list`.
//!
//! ## Drag and Drop From the Terminal
//!
//! `noted move <active> <over>` is the terminal version of dropping one note onto another:
//! it loads the listing into a `ReorderController`, applies the move optimistically and
//! settles it against the API. A failed write is reported and nothing changes on disk.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup (config, logging, store) and dispatch
//! - `handlers`: One function per subcommand, calling the API and rendering
//! - `render`: Output formatting (note rows, categories, messages, JSON)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling

mod commands;
mod handlers;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
