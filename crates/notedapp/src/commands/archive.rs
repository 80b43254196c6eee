use crate::commands::{update, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NoteId, NoteUpdate};
use crate::store::DataStore;
use chrono::Utc;

pub fn archive<S: DataStore>(store: &mut S, id: NoteId) -> Result<CmdResult> {
    let mut result = update::run(store, id, &NoteUpdate::archived(true))?;
    result.messages = vec![CmdMessage::success(format!("Note archived ({})", id))];
    Ok(result)
}

pub fn unarchive<S: DataStore>(store: &mut S, id: NoteId) -> Result<CmdResult> {
    let mut result = update::run(store, id, &NoteUpdate::archived(false))?;
    result.messages = vec![CmdMessage::success(format!("Note restored ({})", id))];
    Ok(result)
}

/// Archives every listed note. Unknown ids are skipped.
pub fn bulk_archive<S: DataStore>(store: &mut S, ids: &[NoteId]) -> Result<CmdResult> {
    let mut notes = store.list_notes()?;
    let now = Utc::now();
    let mut result = CmdResult::default();

    for note in notes.iter_mut().filter(|n| ids.contains(&n.id)) {
        note.is_archived = true;
        note.updated_at = now;
        store.save_note(note)?;
        result.affected_notes.push(note.clone());
    }

    tracing::info!(
        requested = ids.len(),
        archived = result.affected_notes.len(),
        "bulk archive"
    );
    result.add_message(CmdMessage::success(format!(
        "{} note(s) archived",
        result.affected_notes.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::error::NotedError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn archive_hides_from_active_listing() {
        let mut fixture = StoreFixture::new().with_notes(2);
        archive(&mut fixture.store, 1).unwrap();
        let active = get::active(&fixture.store, None).unwrap().listed_notes;
        assert_eq!(active.len(), 1);
        let archived = get::archived(&fixture.store).unwrap().listed_notes;
        assert_eq!(archived[0].id, 1);
    }

    #[test]
    fn unarchive_keeps_order_and_pin() {
        let mut fixture = StoreFixture::new().with_pinned_note("P", 4.0);
        archive(&mut fixture.store, 1).unwrap();
        let result = unarchive(&mut fixture.store, 1).unwrap();
        let note = &result.affected_notes[0];
        assert!(!note.is_archived);
        assert!(note.is_pinned);
        assert_eq!(note.order, 4.0);
    }

    #[test]
    fn archive_unknown_is_not_found() {
        let mut fixture = StoreFixture::new();
        assert!(matches!(
            archive(&mut fixture.store, 5),
            Err(NotedError::NoteNotFound(5))
        ));
    }

    #[test]
    fn bulk_archive_skips_unknown_ids() {
        let mut fixture = StoreFixture::new().with_notes(3);
        let result = bulk_archive(&mut fixture.store, &[1, 3, 99]).unwrap();
        assert_eq!(result.affected_notes.len(), 2);
        let active = get::active(&fixture.store, None).unwrap().listed_notes;
        assert_eq!(active.iter().map(|n| n.id).collect::<Vec<_>>(), vec![2]);
    }
}
