use crate::error::Result;
use crate::model::{Category, Note};

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore handles the "what" (id assignment, lookups, point updates).
pub trait StorageBackend {
    // --- Notes table ---

    /// Load every stored note, archived ones included.
    fn load_notes(&self) -> Result<Vec<Note>>;

    /// Replace the notes table.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_notes(&self, notes: &[Note]) -> Result<()>;

    // --- Categories table ---

    fn load_categories(&self) -> Result<Vec<Category>>;

    fn save_categories(&self, categories: &[Category]) -> Result<()>;
}
