use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotedError, Result};
use crate::model::{NoteId, NoteUpdate};
use crate::store::DataStore;
use chrono::Utc;

/// Merges `update` into the note and bumps `updated_at`.
pub fn run<S: DataStore>(store: &mut S, id: NoteId, update: &NoteUpdate) -> Result<CmdResult> {
    tracing::debug!(id, ?update, "updating note");

    if let Some(order) = update.order.filter(|o| !o.is_finite()) {
        return Err(NotedError::Validation(format!(
            "order for note {} must be a finite number, got {}",
            id, order
        )));
    }

    let mut note = store.get_note(id)?;
    if let Some(category_id) = update.category_id {
        store.get_category(category_id)?;
    }
    update.apply_to(&mut note);
    note.updated_at = Utc::now();
    store.save_note(&note)?;

    // Re-read so callers always get the stored row
    let saved = store.get_note(id)?;
    tracing::info!(id, is_pinned = saved.is_pinned, "updated note");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note updated: {}", saved.title)));
    result.affected_notes.push(saved);
    Ok(result)
}
