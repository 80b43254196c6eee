use super::backend::StorageBackend;
use crate::error::{NotedError, Result};
use crate::model::{Category, Note};
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the app is single-threaded.
/// This keeps `StorageBackend` on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    notes: RefCell<Vec<Note>>,
    categories: RefCell<Vec<Category>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(NotedError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.borrow().clone())
    }

    fn save_notes(&self, notes: &[Note]) -> Result<()> {
        self.check_writable()?;
        *self.notes.borrow_mut() = notes.to_vec();
        Ok(())
    }

    fn load_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.borrow().clone())
    }

    fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.check_writable()?;
        *self.categories.borrow_mut() = categories.to_vec();
        Ok(())
    }
}
