use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotedError, Result};
use crate::model::{NewNote, Note};
use crate::store::DataStore;

/// Creates a note ranked after every existing note.
///
/// The new `order` is the maximum over ALL notes (any section, archived too) plus one, so a
/// new note is last in whichever section it lands in.
pub fn run<S: DataStore>(store: &mut S, draft: NewNote) -> Result<CmdResult> {
    if draft.title.trim().is_empty() {
        return Err(NotedError::Validation("title must not be empty".to_string()));
    }
    if let Some(category_id) = draft.category_id {
        store.get_category(category_id)?;
    }

    let order = next_order(store)?;
    let note = Note::new(store.next_note_id()?, draft, order);
    store.save_note(&note)?;
    tracing::info!(id = note.id, order, "created note");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note created: {}", note.title)));
    result.affected_notes.push(note);
    Ok(result)
}

/// `max(order) + 1`, treating an empty table as max 0.
pub(crate) fn next_order<S: DataStore>(store: &S) -> Result<f64> {
    Ok(store.max_order()?.unwrap_or(0.0) + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::get;
    use crate::model::Section;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn first_note_gets_order_one() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, NewNote::titled("First")).unwrap();
        assert_eq!(result.affected_notes[0].order, 1.0);
        assert_eq!(result.affected_notes[0].id, 1);
    }

    #[test]
    fn new_note_follows_global_max() {
        // Global max is 5 (in the pinned section); the unpinned section is empty.
        let mut fixture = StoreFixture::new()
            .with_pinned_note("P1", 2.0)
            .with_pinned_note("P2", 5.0);

        let result = run(&mut fixture.store, NewNote::titled("Fresh")).unwrap();
        let created = &result.affected_notes[0];
        assert_eq!(created.order, 6.0);
        assert_eq!(created.section(), Section::Other);

        let listed = get::active(&fixture.store, None).unwrap().listed_notes;
        assert_eq!(listed.last().unwrap().id, created.id);
    }

    #[test]
    fn archived_notes_count_towards_max() {
        let mut fixture = StoreFixture::new()
            .with_note("A", 0.0)
            .with_archived_note("Old", 9.0);
        let result = run(&mut fixture.store, NewNote::titled("New")).unwrap();
        assert_eq!(result.affected_notes[0].order, 10.0);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, NewNote::titled("   ")),
            Err(NotedError::Validation(_))
        ));
        assert_eq!(store.list_notes().unwrap().len(), 0);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut store = InMemoryStore::new();
        let draft = NewNote {
            category_id: Some(3),
            ..NewNote::titled("Filed")
        };
        assert!(matches!(
            run(&mut store, draft),
            Err(NotedError::CategoryNotFound(3))
        ));
    }
}
