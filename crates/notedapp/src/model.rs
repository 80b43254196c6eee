//! # Domain Model: Notes, Categories and Sections
//!
//! This module defines the data structures shared by the store, the command layer and the
//! client-side controller: [`Note`], [`Category`], [`Section`] and the reorder wire types
//! [`NoteOrder`] / [`ReorderRequest`].
//!
//! ## Wire Format
//!
//! Everything here serializes in camelCase (`isPinned`, `listItems`, `categoryId`, ...) so the
//! same types are used for the JSON store on disk and for the reorder request body:
//!
//! ```text
//! { "notes": [ { "id": 3, "order": 0 }, { "id": 1, "order": 1 } ] }
//! ```
//!
//! ## Sections
//!
//! A [`Section`] is not persisted. It is the partition of the active (non-archived) notes by
//! `is_pinned`. The `order` field is only ever compared between notes of the same section.
//!
//! ## The `order` Field
//!
//! `order` is an `f64`. Between a drag-and-drop move and the following reconcile it may hold
//! a fractional midpoint; after every reconcile the section is rewritten to dense integer
//! ranks `0..k-1`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type NoteId = u64;
pub type CategoryId = u64;

pub const DEFAULT_NOTE_COLOR: &str = "transparent";
pub const DEFAULT_CATEGORY_ICON: &str = "folder";
pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    #[default]
    Text,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

impl ListItem {
    /// An unchecked item with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "type", default)]
    pub note_type: NoteType,
    #[serde(default)]
    pub list_items: Option<Vec<ListItem>>,
    #[serde(default = "default_note_color")]
    pub color: String,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub order: f64,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_note_color() -> String {
    DEFAULT_NOTE_COLOR.to_string()
}

impl Note {
    /// Builds a note from a create payload. The store assigns `id`; the caller assigns `order`.
    pub fn new(id: NoteId, draft: NewNote, order: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: draft.title,
            content: draft.content,
            note_type: draft.note_type.unwrap_or_default(),
            list_items: draft.list_items,
            color: draft.color.unwrap_or_else(default_note_color),
            is_pinned: false,
            is_archived: false,
            order,
            category_id: draft.category_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn section(&self) -> Section {
        Section::from(self.is_pinned)
    }
}

/// Create payload. Only the title is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "type", default)]
    pub note_type: Option<NoteType>,
    #[serde(default)]
    pub list_items: Option<Vec<ListItem>>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl NewNote {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub note_type: Option<NoteType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_items: Option<Vec<ListItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl NoteUpdate {
    pub fn pinned(is_pinned: bool) -> Self {
        Self {
            is_pinned: Some(is_pinned),
            ..Default::default()
        }
    }

    pub fn archived(is_archived: bool) -> Self {
        Self {
            is_archived: Some(is_archived),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the set fields into `note`. Does not touch `updated_at`.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = Some(content.clone());
        }
        if let Some(note_type) = self.note_type {
            note.note_type = note_type;
        }
        if let Some(items) = &self.list_items {
            note.list_items = Some(items.clone());
        }
        if let Some(color) = &self.color {
            note.color = color.clone();
        }
        if let Some(is_pinned) = self.is_pinned {
            note.is_pinned = is_pinned;
        }
        if let Some(is_archived) = self.is_archived {
            note.is_archived = is_archived;
        }
        if let Some(order) = self.order {
            note.order = order;
        }
        if let Some(category_id) = self.category_id {
            note.category_id = Some(category_id);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default = "default_category_icon")]
    pub icon: String,
    #[serde(default = "default_category_color")]
    pub color: String,
}

fn default_category_icon() -> String {
    DEFAULT_CATEGORY_ICON.to_string()
}

fn default_category_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Category {
    pub fn new(id: CategoryId, draft: NewCategory) -> Self {
        Self {
            id,
            name: draft.name,
            icon: draft.icon.unwrap_or_else(default_category_icon),
            color: draft.color.unwrap_or_else(default_category_color),
        }
    }
}

/// The pinned/unpinned partition of the active notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Pinned,
    Other,
}

impl Section {
    pub fn is_pinned(self) -> bool {
        matches!(self, Section::Pinned)
    }

    pub fn contains(self, note: &Note) -> bool {
        note.is_pinned == self.is_pinned()
    }
}

impl From<bool> for Section {
    fn from(is_pinned: bool) -> Self {
        if is_pinned {
            Section::Pinned
        } else {
            Section::Other
        }
    }
}

/// One element of a reorder batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteOrder {
    pub id: NoteId,
    pub order: f64,
}

/// Body of `PATCH /notes/reorder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub notes: Vec<NoteOrder>,
}
