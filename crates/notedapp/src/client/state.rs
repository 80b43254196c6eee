//! Client-side note list as an explicit store with pure transitions.
//!
//! Every change to the list the UI renders goes through [`NotesState::reduce`], which never
//! mutates in place: it returns the next state. This is what makes a rollback a plain
//! assignment of an earlier value.

use crate::model::{Note, NoteId, NoteOrder, Section};
use crate::ordering::section_keys;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum NotesAction {
    /// Replace the whole list (initial load, re-fetch, rollback).
    Set(Vec<Note>),
    /// Put a new note at the front of the list.
    Insert(Note),
    /// Replace the note with the same id. Unknown ids are ignored.
    Merge(Note),
    /// Overwrite `order` for each listed id. Unknown ids are ignored.
    MergeOrders(Vec<NoteOrder>),
    /// Drop the listed ids.
    Remove(Vec<NoteId>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotesState {
    notes: Vec<Note>,
}

impl NotesState {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// `(id, order)` keys of one section in display order.
    pub fn section_keys(&self, section: Section) -> Vec<NoteOrder> {
        section_keys(&self.notes, section)
    }

    pub fn reduce(&self, action: NotesAction) -> NotesState {
        let notes = match action {
            NotesAction::Set(notes) => notes,
            NotesAction::Insert(note) => {
                let mut notes = Vec::with_capacity(self.notes.len() + 1);
                notes.push(note);
                notes.extend(self.notes.iter().cloned());
                notes
            }
            NotesAction::Merge(updated) => self
                .notes
                .iter()
                .map(|n| {
                    if n.id == updated.id {
                        updated.clone()
                    } else {
                        n.clone()
                    }
                })
                .collect(),
            NotesAction::MergeOrders(orders) => {
                let by_id: HashMap<NoteId, f64> =
                    orders.iter().map(|p| (p.id, p.order)).collect();
                self.notes
                    .iter()
                    .map(|n| match by_id.get(&n.id) {
                        Some(&order) => Note { order, ..n.clone() },
                        None => n.clone(),
                    })
                    .collect()
            }
            NotesAction::Remove(ids) => self
                .notes
                .iter()
                .filter(|n| !ids.contains(&n.id))
                .cloned()
                .collect(),
        };
        NotesState { notes }
    }
}
