use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: NoteId) -> Result<CmdResult> {
    let note = store.get_note(id)?;
    store.delete_note(id)?;
    tracing::info!(id, "deleted note");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note deleted: {}", note.title)));
    result.affected_notes.push(note);
    Ok(result)
}

/// Deletes every listed note. Unknown ids are skipped.
pub fn bulk<S: DataStore>(store: &mut S, ids: &[NoteId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for note in store.list_notes()?.into_iter().filter(|n| ids.contains(&n.id)) {
        store.delete_note(note.id)?;
        result.affected_notes.push(note);
    }

    tracing::info!(
        requested = ids.len(),
        deleted = result.affected_notes.len(),
        "bulk delete"
    );
    result.add_message(CmdMessage::success(format!(
        "{} note(s) deleted",
        result.affected_notes.len()
    )));
    Ok(result)
}
