//! Optimistic reordering.
//!
//! A drag-and-drop move is applied to the local [`NotesState`] immediately and confirmed or
//! rolled back once the reorder endpoint answers:
//!
//! ```text
//! Idle ── begin_move ──▶ Applying ── settle(Ok)  ──▶ Committed ──▶ Idle
//!                                 └─ settle(Err) ──▶ RolledBack ─▶ Idle
//! ```
//!
//! 1. snapshot the current list,
//! 2. give the moved note its allocated fractional key,
//! 3. re-sort its section and re-rank it densely (the batch),
//! 4. send the batch,
//! 5. on success write the dense ranks into local state,
//! 6. on failure restore the section's rows from the snapshot and queue a [`Notice`].
//!    Nothing is retried.
//!
//! ## Overlapping moves
//!
//! A second move can start before the first one settles; it works from the optimistic state.
//! Every move gets a sequence number, and responses are applied per section in sequence:
//!
//! - while a newer move on the same section is still in flight, an older response is
//!   deferred to it. A success hands its confirmed batch to the newer move; a failure hands
//!   over its snapshot, so a later rollback goes back to before both moves.
//! - once a newer move on the same section has committed, older responses are ignored.
//!
//! [`Settlement::Superseded`] reports both cases.

use super::state::{NotesAction, NotesState};
use super::ReorderEndpoint;
use crate::error::Result;
use crate::model::{NoteId, NoteOrder, Section};
use crate::ordering::{allocate_order, reindex_section, resolve_move};
use std::collections::{BTreeMap, HashMap};

/// A move that has been applied locally and is waiting for the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReorder {
    pub seq: u64,
    pub section: Section,
    pub note_id: NoteId,
    /// The allocated fractional key shown while the request is in flight.
    pub provisional_order: f64,
    /// Dense ranks for the whole section, as sent to the endpoint.
    pub batch: Vec<NoteOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderPhase {
    Idle,
    Applying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Committed,
    RolledBack,
    Superseded,
}

/// Non-blocking failure notification for the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub message: String,
}

#[derive(Debug)]
struct InFlight {
    section: Section,
    previous: NotesState,
    confirmed: Option<Vec<NoteOrder>>,
}

#[derive(Debug, Default)]
pub struct ReorderController {
    state: NotesState,
    next_seq: u64,
    in_flight: BTreeMap<u64, InFlight>,
    committed: HashMap<Section, u64>,
    notices: Vec<Notice>,
}

impl ReorderController {
    pub fn new(state: NotesState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &NotesState {
        &self.state
    }

    pub fn phase(&self) -> ReorderPhase {
        if self.in_flight.is_empty() {
            ReorderPhase::Idle
        } else {
            ReorderPhase::Applying
        }
    }

    /// Applies a non-reorder transition (load, pin toggle, delete...).
    pub fn dispatch(&mut self, action: NotesAction) {
        self.state = self.state.reduce(action);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Steps 1-3: applies `active` dropped over `over` within `section` locally.
    ///
    /// Returns `None` (and changes nothing) when the gesture is a no-op or malformed.
    pub fn begin_move(
        &mut self,
        active: NoteId,
        over: NoteId,
        section: Section,
    ) -> Option<PendingReorder> {
        let keys = self.state.section_keys(section);
        let mv = resolve_move(&keys, active, over)?;
        let provisional_order = allocate_order(&keys, mv.old_index, mv.new_index)?;

        let previous = self.state.clone();
        self.state = self.state.reduce(NotesAction::MergeOrders(vec![NoteOrder {
            id: active,
            order: provisional_order,
        }]));
        let batch = reindex_section(self.state.notes(), section, None);

        self.next_seq += 1;
        let seq = self.next_seq;
        self.in_flight.insert(
            seq,
            InFlight {
                section,
                previous,
                confirmed: None,
            },
        );
        tracing::debug!(
            seq,
            note = active,
            from = mv.old_index,
            to = mv.new_index,
            provisional_order,
            "optimistic reorder applied"
        );

        Some(PendingReorder {
            seq,
            section,
            note_id: active,
            provisional_order,
            batch,
        })
    }

    /// Steps 5-6: folds the endpoint's answer for `pending` into local state.
    pub fn settle(&mut self, pending: PendingReorder, response: Result<()>) -> Settlement {
        let Some(entry) = self.in_flight.remove(&pending.seq) else {
            tracing::warn!(seq = pending.seq, "reorder settled twice");
            return Settlement::Superseded;
        };

        let successor = self
            .in_flight
            .range_mut(pending.seq + 1..)
            .find(|(_, f)| f.section == entry.section)
            .map(|(_, f)| f);

        if let Some(next) = successor {
            let failure = match response {
                Ok(()) => {
                    next.confirmed = Some(pending.batch);
                    None
                }
                Err(e) => {
                    next.previous = entry.previous;
                    next.confirmed = entry.confirmed;
                    Some(e)
                }
            };
            if let Some(e) = failure {
                self.notify(pending.seq, &e.to_string());
            }
            return Settlement::Superseded;
        }

        if self
            .committed
            .get(&entry.section)
            .is_some_and(|&seq| seq > pending.seq)
        {
            if let Err(e) = response {
                self.notify(pending.seq, &e.to_string());
            }
            return Settlement::Superseded;
        }

        match response {
            Ok(()) => {
                self.state = self.state.reduce(NotesAction::MergeOrders(pending.batch));
                self.committed.insert(entry.section, pending.seq);
                tracing::debug!(seq = pending.seq, "reorder committed");
                Settlement::Committed
            }
            Err(e) => {
                self.notify(pending.seq, &e.to_string());
                // Only this section's rows
                let restored = self.state.reduce(NotesAction::MergeOrders(
                    entry.previous.section_keys(entry.section),
                ));
                self.state = match entry.confirmed {
                    Some(batch) => restored.reduce(NotesAction::MergeOrders(batch)),
                    None => restored,
                };
                Settlement::RolledBack
            }
        }
    }

    /// [`begin_move`](Self::begin_move), one endpoint call, then [`settle`](Self::settle).
    pub fn run_move<E: ReorderEndpoint>(
        &mut self,
        endpoint: &mut E,
        active: NoteId,
        over: NoteId,
        section: Section,
    ) -> Option<Settlement> {
        let pending = self.begin_move(active, over, section)?;
        let response = endpoint.reorder(&pending.batch);
        Some(self.settle(pending, response))
    }

    fn notify(&mut self, seq: u64, reason: &str) {
        tracing::warn!(seq, reason, "failed to reorder note, rolling back");
        self.notices.push(Notice {
            seq,
            message: "Failed to reorder note".to_string(),
        });
    }
}
