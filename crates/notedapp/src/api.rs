//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all noted operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing a raw reorder body)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `NotedApi<S: DataStore>` is generic over the storage backend:
//! - Production: `NotedApi<FileStore>`
//! - Testing: `NotedApi<InMemoryStore>`
//!
//! It also implements [`ReorderEndpoint`], so the optimistic reorder controller can be
//! driven against it directly.
//!
//! ## Testing Strategy
//!
//! API tests verify dispatch and argument handling only. Command logic is tested in the
//! command modules, storage behavior in the store modules.

use crate::client::ReorderEndpoint;
use crate::commands;
use crate::commands::get::{NoteFilter, NoteStatusFilter};
use crate::commands::reorder::ReorderOutcome;
use crate::error::Result;
use crate::model::{CategoryId, NewCategory, NewNote, NoteId, NoteOrder, NoteUpdate, ReorderRequest};
use crate::store::DataStore;

/// The main API facade for noted operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct NotedApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> NotedApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_note(&mut self, draft: NewNote) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn get_notes(&self, filter: NoteFilter) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, filter)
    }

    pub fn active_notes(&self, category_id: Option<CategoryId>) -> Result<commands::CmdResult> {
        self.get_notes(NoteFilter {
            status: NoteStatusFilter::Active,
            category_id,
        })
    }

    pub fn update_note(&mut self, id: NoteId, update: &NoteUpdate) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn pin_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::pinning::pin(&mut self.store, id)
    }

    pub fn unpin_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::pinning::unpin(&mut self.store, id)
    }

    pub fn archive_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::archive::archive(&mut self.store, id)
    }

    pub fn unarchive_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::archive::unarchive(&mut self.store, id)
    }

    pub fn archive_notes(&mut self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::archive::bulk_archive(&mut self.store, ids)
    }

    pub fn duplicate_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::duplicate::run(&mut self.store, id)
    }

    pub fn delete_note(&mut self, id: NoteId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn delete_notes(&mut self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::delete::bulk(&mut self.store, ids)
    }

    pub fn reorder_notes(&mut self, request: &ReorderRequest) -> Result<commands::CmdResult> {
        commands::reorder::run(&mut self.store, request)
    }

    /// Reorder from a raw JSON body, as received on the wire.
    pub fn reorder_body(&mut self, body: &str) -> Result<commands::CmdResult> {
        let request = commands::reorder::parse_body(body)?;
        self.reorder_notes(&request)
    }

    pub fn list_categories(&self) -> Result<commands::CmdResult> {
        commands::categories::list(&self.store)
    }

    pub fn get_category(&self, id: CategoryId) -> Result<commands::CmdResult> {
        commands::categories::get(&self.store, id)
    }

    pub fn create_category(&mut self, draft: NewCategory) -> Result<commands::CmdResult> {
        commands::categories::create(&mut self.store, draft)
    }

    pub fn delete_category(&mut self, id: CategoryId) -> Result<commands::CmdResult> {
        commands::categories::remove(&mut self.store, id)
    }

    pub fn seed_categories(&mut self) -> Result<commands::CmdResult> {
        commands::categories::seed(&mut self.store)
    }

    fn apply_reorder(&mut self, batch: &[NoteOrder]) -> Result<ReorderOutcome> {
        let request = ReorderRequest {
            notes: batch.to_vec(),
        };
        commands::reorder::apply(&mut self.store, &request)
    }
}

impl<S: DataStore> ReorderEndpoint for NotedApi<S> {
    fn reorder(&mut self, batch: &[NoteOrder]) -> Result<()> {
        self.apply_reorder(batch).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{NotesState, ReorderController, Settlement};
    use crate::error::NotedError;
    use crate::model::Section;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with(fixture: StoreFixture) -> NotedApi<InMemoryStore> {
        NotedApi::new(fixture.store)
    }

    fn listed_ids(api: &NotedApi<InMemoryStore>) -> Vec<NoteId> {
        api.active_notes(None)
            .unwrap()
            .listed_notes
            .iter()
            .map(|n| n.id)
            .collect()
    }

    #[test]
    fn create_then_list() {
        let mut api = NotedApi::new(InMemoryStore::new());
        api.create_note(NewNote::titled("first")).unwrap();
        api.create_note(NewNote::titled("second")).unwrap();
        let listed = api.active_notes(None).unwrap().listed_notes;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "first");
    }

    #[test]
    fn pin_moves_note_to_top_of_listing() {
        let fixture = StoreFixture::new().with_notes(3);
        let mut api = api_with(fixture);
        let last = *listed_ids(&api).last().unwrap();
        api.pin_note(last).unwrap();
        assert_eq!(listed_ids(&api)[0], last);
    }

    #[test]
    fn archive_filter_dispatch() {
        let fixture = StoreFixture::new().with_notes(2);
        let mut api = api_with(fixture);
        let first = listed_ids(&api)[0];
        api.archive_note(first).unwrap();

        let archived = api
            .get_notes(NoteFilter {
                status: NoteStatusFilter::Archived,
                category_id: None,
            })
            .unwrap();
        assert_eq!(archived.listed_notes.len(), 1);
        assert_eq!(listed_ids(&api).len(), 1);
    }

    #[test]
    fn reorder_body_parses_and_applies() {
        let fixture = StoreFixture::new().with_notes(2);
        let mut api = api_with(fixture);
        let ids = listed_ids(&api);
        let body = format!(
            r#"{{"notes":[{{"id":{},"order":1}},{{"id":{},"order":0}}]}}"#,
            ids[0], ids[1]
        );
        api.reorder_body(&body).unwrap();
        assert_eq!(listed_ids(&api), vec![ids[1], ids[0]]);
    }

    #[test]
    fn reorder_body_rejects_garbage() {
        let mut api = NotedApi::new(InMemoryStore::new());
        let err = api.reorder_body("{\"notes\": 3}").unwrap_err();
        assert!(matches!(err, NotedError::Validation(_)));
    }

    #[test]
    fn controller_round_trip_through_api() {
        let fixture = StoreFixture::new()
            .with_pinned_note("A", 0.0)
            .with_pinned_note("B", 1.0)
            .with_pinned_note("C", 2.0);
        let (a, b, c) = (fixture.id_of("A"), fixture.id_of("B"), fixture.id_of("C"));
        let mut api = api_with(fixture);

        let notes = api.active_notes(None).unwrap().listed_notes;
        let mut controller = ReorderController::new(NotesState::new(notes));
        let outcome = controller.run_move(&mut api, c, a, Section::Pinned);
        assert_eq!(outcome, Some(Settlement::Committed));

        assert_eq!(listed_ids(&api), vec![c, a, b]);
        let stored: Vec<f64> = api
            .active_notes(None)
            .unwrap()
            .listed_notes
            .iter()
            .map(|n| n.order)
            .collect();
        assert_eq!(stored, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn controller_rolls_back_when_store_fails() {
        let fixture = StoreFixture::new().with_notes(3);
        let mut api = api_with(fixture);
        let before = api.active_notes(None).unwrap().listed_notes;
        let ids: Vec<NoteId> = before.iter().map(|n| n.id).collect();

        let mut controller = ReorderController::new(NotesState::new(before.clone()));
        api.store().fail_writes(true);
        let outcome = controller.run_move(&mut api, ids[2], ids[0], Section::Other);

        assert_eq!(outcome, Some(Settlement::RolledBack));
        assert_eq!(controller.state().notes(), before.as_slice());
        assert_eq!(controller.take_notices().len(), 1);
    }

    #[test]
    fn category_dispatch() {
        let mut api = NotedApi::new(InMemoryStore::new());
        api.seed_categories().unwrap();
        let listed = api.list_categories().unwrap().categories;
        assert_eq!(listed.len(), 5);
        let id = listed[0].id;
        assert_eq!(api.get_category(id).unwrap().categories[0].id, id);
        api.delete_category(id).unwrap();
        assert_eq!(api.list_categories().unwrap().categories.len(), 4);
    }
}
