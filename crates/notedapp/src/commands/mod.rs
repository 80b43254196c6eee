//! # Command Layer
//!
//! This module contains the **core business logic** of noted. Each command lives in its
//! own submodule and implements plain Rust functions over a [`DataStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on `Note`, `Category` and the reorder types
//! - Return structured `CmdResult` with affected notes and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any terminal I/O**: No stdout, stderr, or formatting
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! They do emit `tracing` events; installing a subscriber is up to the binary.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` (see `store::memory::fixtures`) and cover every branch,
//! error conditions included.
//!
//! ## Command Modules
//!
//! - [`create`]: Create notes at the end of the global order
//! - [`get`]: Active / pinned / archived listings
//! - [`update`]: Partial updates
//! - [`pinning`]: Pin/unpin (section changes, `order` untouched)
//! - [`archive`]: Archive/unarchive, single and bulk
//! - [`delete`]: Delete, single and bulk
//! - [`duplicate`]: Copy a note to the end of the order
//! - [`reorder`]: The reorder endpoint (batch of `order` point writes)
//! - [`categories`]: Category CRUD and default seeding

use crate::model::{Category, Note};
use serde::Serialize;

pub mod archive;
pub mod categories;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod get;
pub mod pinning;
pub mod reorder;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub categories: Vec<Category>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }
}
