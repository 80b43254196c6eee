use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{NotedError, Result};
use crate::model::{Category, CategoryId, Note, NoteId, NoteOrder};
use std::collections::HashMap;

pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> DataStore for NoteStore<B> {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        let mut notes = self.backend.load_notes()?;
        match notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => *existing = note.clone(),
            None => notes.push(note.clone()),
        }
        notes.sort_by_key(|n| n.id);
        self.backend.save_notes(&notes)
    }

    fn get_note(&self, id: NoteId) -> Result<Note> {
        self.backend
            .load_notes()?
            .into_iter()
            .find(|n| n.id == id)
            .ok_or(NotedError::NoteNotFound(id))
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        let mut notes = self.backend.load_notes()?;
        notes.sort_by_key(|n| n.id);
        Ok(notes)
    }

    fn delete_note(&mut self, id: NoteId) -> Result<()> {
        let mut notes = self.backend.load_notes()?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(NotedError::NoteNotFound(id));
        }
        self.backend.save_notes(&notes)
    }

    fn next_note_id(&self) -> Result<NoteId> {
        let notes = self.backend.load_notes()?;
        Ok(notes.iter().map(|n| n.id).max().unwrap_or(0) + 1)
    }

    fn max_order(&self) -> Result<Option<f64>> {
        let notes = self.backend.load_notes()?;
        Ok(notes.iter().map(|n| n.order).reduce(f64::max))
    }

    fn update_orders(&mut self, orders: &[NoteOrder]) -> Result<Vec<NoteId>> {
        let mut notes = self.backend.load_notes()?;
        let positions: HashMap<NoteId, usize> =
            notes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();

        let mut missing = Vec::new();
        for pair in orders {
            match positions.get(&pair.id) {
                Some(&i) => notes[i].order = pair.order,
                None => missing.push(pair.id),
            }
        }

        // Nothing matched: leave the table untouched
        if missing.len() < orders.len() {
            self.backend.save_notes(&notes)?;
        }
        Ok(missing)
    }

    fn save_category(&mut self, category: &Category) -> Result<()> {
        let mut categories = self.backend.load_categories()?;
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category.clone(),
            None => categories.push(category.clone()),
        }
        categories.sort_by_key(|c| c.id);
        self.backend.save_categories(&categories)
    }

    fn get_category(&self, id: CategoryId) -> Result<Category> {
        self.backend
            .load_categories()?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or(NotedError::CategoryNotFound(id))
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        self.backend.load_categories()
    }

    fn detach_category(&mut self, id: CategoryId) -> Result<Vec<NoteId>> {
        let mut notes = self.backend.load_notes()?;
        let mut detached = Vec::new();
        for note in notes.iter_mut().filter(|n| n.category_id == Some(id)) {
            note.category_id = None;
            detached.push(note.id);
        }
        if !detached.is_empty() {
            self.backend.save_notes(&notes)?;
        }
        Ok(detached)
    }

    fn delete_category(&mut self, id: CategoryId) -> Result<()> {
        let mut categories = self.backend.load_categories()?;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(NotedError::CategoryNotFound(id));
        }
        self.backend.save_categories(&categories)
    }

    fn next_category_id(&self) -> Result<CategoryId> {
        let categories = self.backend.load_categories()?;
        Ok(categories.iter().map(|c| c.id).max().unwrap_or(0) + 1)
    }
}
