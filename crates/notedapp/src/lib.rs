//! # notedapp
//!
//! Library behind the `noted` CLI: notes with a pinned section, categories, archiving and
//! drag-and-drop ordering with optimistic updates.
//!
//! ## Architecture
//!
//! ```text
//! UI (CLI, web...)
//!   │
//!   ├── client::ReorderController ── optimistic moves over client::NotesState
//!   │        │
//!   │        └── client::ReorderEndpoint (implemented by NotedApi)
//!   ▼
//! api::NotedApi ── thin facade, dispatch only
//!   ▼
//! commands::* ── business logic, one module per operation
//!   ▼
//! store::DataStore ── NoteStore<B> over a StorageBackend (JSON files / memory)
//! ```
//!
//! [`ordering`] is shared by the commands (listing order) and the client (allocation and
//! dense re-ranking of a section).

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod ordering;
pub mod store;
