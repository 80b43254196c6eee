use super::mem_backend::MemBackend;
use super::note_store::NoteStore;

pub type InMemoryStore = NoteStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        NoteStore::with_backend(MemBackend::new())
    }

    /// Make every following write fail, for exercising error paths.
    pub fn fail_writes(&self, fail: bool) {
        self.backend.set_simulate_write_error(fail);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{NewNote, Note, NoteId};
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(&mut self, title: &str, order: f64, is_pinned: bool, is_archived: bool) -> NoteId {
            let id = self.store.next_note_id().unwrap();
            let mut note = Note::new(id, NewNote::titled(title), order);
            note.is_pinned = is_pinned;
            note.is_archived = is_archived;
            self.store.save_note(&note).unwrap();
            id
        }

        /// Adds `count` unpinned notes with orders `0..count`.
        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.push(&format!("Test Note {}", i + 1), i as f64, false, false);
            }
            self
        }

        pub fn with_note(mut self, title: &str, order: f64) -> Self {
            self.push(title, order, false, false);
            self
        }

        pub fn with_pinned_note(mut self, title: &str, order: f64) -> Self {
            self.push(title, order, true, false);
            self
        }

        pub fn with_archived_note(mut self, title: &str, order: f64) -> Self {
            self.push(title, order, false, true);
            self
        }

        pub fn id_of(&self, title: &str) -> NoteId {
            self.store
                .list_notes()
                .unwrap()
                .into_iter()
                .find(|n| n.title == title)
                .map(|n| n.id)
                .unwrap_or_else(|| panic!("no note titled {title}"))
        }
    }
}
