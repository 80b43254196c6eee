use super::backend::StorageBackend;
use crate::error::{NotedError, Result};
use crate::model::{Category, Note};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const NOTES_FILE: &str = "notes.json";
const CATEGORIES_FILE: &str = "categories.json";

/// JSON-file backend. Each table is one pretty-printed array under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotedError::Io)?;
        }
        Ok(())
    }

    fn read_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(NotedError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<T> = serde_json::from_str(&content).map_err(NotedError::Serialization)?;
        Ok(rows)
    }

    fn write_table<T: Serialize>(&self, file: &str, rows: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(rows).map_err(NotedError::Serialization)?;

        // Atomic write: tmp file then rename over the table
        let tmp_file = self.root.join(format!(".{}-{}.tmp", file, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(NotedError::Io)?;
        fs::rename(&tmp_file, self.root.join(file)).map_err(NotedError::Io)?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_notes(&self) -> Result<Vec<Note>> {
        self.read_table(NOTES_FILE)
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.write_table(NOTES_FILE, notes)
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        self.read_table(CATEGORIES_FILE)
    }

    fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.write_table(CATEGORIES_FILE, categories)
    }
}
