use crate::commands::{update, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NoteId, NoteUpdate};
use crate::store::DataStore;

pub fn pin<S: DataStore>(store: &mut S, id: NoteId) -> Result<CmdResult> {
    pin_state(store, id, true)
}

pub fn unpin<S: DataStore>(store: &mut S, id: NoteId) -> Result<CmdResult> {
    pin_state(store, id, false)
}

// Moves the note to the other section; its `order` key is carried over as-is.
fn pin_state<S: DataStore>(store: &mut S, id: NoteId, is_pinned: bool) -> Result<CmdResult> {
    let updated = update::run(store, id, &NoteUpdate::pinned(is_pinned))?;

    let mut result = CmdResult::default();
    for note in updated.affected_notes {
        let verb = if is_pinned { "pinned" } else { "unpinned" };
        result.add_message(CmdMessage::success(format!(
            "Note {} ({}): {}",
            verb, note.id, note.title
        )));
        result.affected_notes.push(note);
    }
    Ok(result)
}
