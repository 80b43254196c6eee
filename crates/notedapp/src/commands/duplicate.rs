use crate::commands::create::next_order;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NoteId, NewNote, Note};
use crate::store::DataStore;

/// Copies a note to the end of the global order. The copy is never pinned or archived.
pub fn run<S: DataStore>(store: &mut S, id: NoteId) -> Result<CmdResult> {
    let original = store.get_note(id)?;

    let draft = NewNote {
        title: format!("{} (Copy)", original.title),
        content: original.content.clone(),
        note_type: Some(original.note_type),
        list_items: original.list_items.clone(),
        color: Some(original.color.clone()),
        category_id: original.category_id,
    };
    let copy = Note::new(store.next_note_id()?, draft, next_order(store)?);
    store.save_note(&copy)?;
    tracing::info!(source = id, id = copy.id, "duplicated note");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note duplicated: {}", copy.title)));
    result.affected_notes.push(copy);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotedError;
    use crate::model::{ListItem, NoteType};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn duplicate_copies_content_unpinned_at_end() {
        let mut fixture = StoreFixture::new()
            .with_pinned_note("Shopping", 0.0)
            .with_note("Other", 3.0);
        let mut original = fixture.store.get_note(1).unwrap();
        original.note_type = NoteType::List;
        original.list_items = Some(vec![ListItem {
            id: "a".into(),
            text: "milk".into(),
            completed: true,
        }]);
        fixture.store.save_note(&original).unwrap();

        let result = run(&mut fixture.store, 1).unwrap();
        let copy = &result.affected_notes[0];
        assert_eq!(copy.title, "Shopping (Copy)");
        assert_eq!(copy.id, 3);
        assert_eq!(copy.order, 4.0);
        assert!(!copy.is_pinned);
        assert_eq!(copy.note_type, NoteType::List);
        assert_eq!(copy.list_items, original.list_items);
    }

    #[test]
    fn duplicate_unknown_is_not_found() {
        let mut fixture = StoreFixture::new();
        assert!(matches!(
            run(&mut fixture.store, 1),
            Err(NotedError::NoteNotFound(1))
        ));
    }
}
