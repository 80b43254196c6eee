use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{CategoryId, Note, Section};
use crate::ordering::{listing_cmp, section_cmp};
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteStatusFilter {
    #[default]
    Active,
    Pinned,
    Archived,
}

#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub status: NoteStatusFilter,
    /// Only meaningful for `Active`.
    pub category_id: Option<CategoryId>,
}

pub fn run<S: DataStore>(store: &S, filter: NoteFilter) -> Result<CmdResult> {
    match filter.status {
        NoteStatusFilter::Active => active(store, filter.category_id),
        NoteStatusFilter::Pinned => pinned(store),
        NoteStatusFilter::Archived => archived(store),
    }
}

/// Non-archived notes, sorted `(is_pinned DESC, order ASC, created_at DESC)`.
pub fn active<S: DataStore>(store: &S, category_id: Option<CategoryId>) -> Result<CmdResult> {
    let mut notes: Vec<Note> = store
        .list_notes()?
        .into_iter()
        .filter(|n| !n.is_archived)
        .filter(|n| category_id.is_none() || n.category_id == category_id)
        .collect();
    notes.sort_by(listing_cmp);
    Ok(CmdResult::default().with_listed_notes(notes))
}

/// Non-archived pinned notes, sorted `(order ASC, created_at DESC)`.
pub fn pinned<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut notes: Vec<Note> = store
        .list_notes()?
        .into_iter()
        .filter(|n| !n.is_archived && Section::Pinned.contains(n))
        .collect();
    notes.sort_by(section_cmp);
    Ok(CmdResult::default().with_listed_notes(notes))
}

/// Archived notes, most recently updated first.
pub fn archived<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut notes: Vec<Note> = store
        .list_notes()?
        .into_iter()
        .filter(|n| n.is_archived)
        .collect();
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(CmdResult::default().with_listed_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::{Duration, Utc};

    fn titles(result: &CmdResult) -> Vec<&str> {
        result.listed_notes.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn active_listing_order() {
        let fixture = StoreFixture::new()
            .with_note("other-b", 1.0)
            .with_pinned_note("pinned-b", 4.0)
            .with_note("other-a", 0.0)
            .with_pinned_note("pinned-a", 2.0)
            .with_archived_note("gone", -5.0);

        let result = run(&fixture.store, NoteFilter::default()).unwrap();
        assert_eq!(
            titles(&result),
            vec!["pinned-a", "pinned-b", "other-a", "other-b"]
        );
    }

    #[test]
    fn category_filter() {
        let mut fixture = StoreFixture::new().with_note("a", 0.0).with_note("b", 1.0);
        let mut b = fixture.store.get_note(2).unwrap();
        b.category_id = Some(1);
        fixture.store.save_note(&b).unwrap();

        let result = run(
            &fixture.store,
            NoteFilter {
                status: NoteStatusFilter::Active,
                category_id: Some(1),
            },
        )
        .unwrap();
        assert_eq!(titles(&result), vec!["b"]);
    }

    #[test]
    fn pinned_listing_only_pinned() {
        let fixture = StoreFixture::new()
            .with_pinned_note("p2", 1.0)
            .with_note("o", 0.0)
            .with_pinned_note("p1", 0.0);
        let result = pinned(&fixture.store).unwrap();
        assert_eq!(titles(&result), vec!["p1", "p2"]);
    }

    #[test]
    fn archived_listing_most_recent_first() {
        let mut fixture = StoreFixture::new()
            .with_archived_note("older", 0.0)
            .with_archived_note("newer", 1.0);
        let mut older = fixture.store.get_note(1).unwrap();
        older.updated_at = Utc::now() - Duration::days(1);
        fixture.store.save_note(&older).unwrap();

        let result = archived(&fixture.store).unwrap();
        assert_eq!(titles(&result), vec!["newer", "older"]);
    }
}
