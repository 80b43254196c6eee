//! # Storage Layer
//!
//! This module defines the storage abstraction for noted. The [`DataStore`] trait
//! allows the application to work with different storage backends.
//!
//! ## Store vs Backend
//!
//! Storage is split in two:
//! 1. **Backend** ([`backend::StorageBackend`]): raw table I/O. Loads and saves whole tables.
//! 2. **Store** ([`note_store::NoteStore`]): the row-level semantics on top of a backend
//!    (id assignment, lookups by id, not-found errors, point updates of `order`).
//!
//! ## Point Updates
//!
//! [`DataStore::update_orders`] is the persistence half of the reorder endpoint. Each
//! `(id, order)` pair is an independent write keyed by id:
//! - ids that exist get their `order` replaced,
//! - ids that do not exist are skipped and reported back, never turned into an error,
//! - no other field is touched (`updated_at` included).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON tables on disk (`notes.json`, `categories.json`).
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── notes.json        # Notes table (array of notes, camelCase)
//! └── categories.json   # Categories table
//! ```

use crate::error::Result;
use crate::model::{Category, CategoryId, Note, NoteId, NoteOrder};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod note_store;

/// Abstract interface for note and category storage.
pub trait DataStore {
    /// Save a note (create or update, keyed by id)
    fn save_note(&mut self, note: &Note) -> Result<()>;

    /// Get a note by ID
    fn get_note(&self, id: NoteId) -> Result<Note>;

    /// List every note, archived ones included, in id order
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// Delete a note permanently
    fn delete_note(&mut self, id: NoteId) -> Result<()>;

    /// The id the next inserted note should get
    fn next_note_id(&self) -> Result<NoteId>;

    /// Maximum `order` over all notes, any section, archived included
    fn max_order(&self) -> Result<Option<f64>>;

    /// Apply `order` point writes. Returns the ids that matched no note.
    fn update_orders(&mut self, orders: &[NoteOrder]) -> Result<Vec<NoteId>>;

    fn save_category(&mut self, category: &Category) -> Result<()>;

    fn get_category(&self, id: CategoryId) -> Result<Category>;

    fn list_categories(&self) -> Result<Vec<Category>>;

    /// Clear `category_id` on every note filed under `id`, in one table write.
    /// Returns the detached note ids.
    fn detach_category(&mut self, id: CategoryId) -> Result<Vec<NoteId>>;

    fn delete_category(&mut self, id: CategoryId) -> Result<()>;

    fn next_category_id(&self) -> Result<CategoryId>;
}
