//! # Ordering Protocol
//!
//! Manual ordering of notes is section-local: the pinned notes and the other notes are each
//! ranked by their `order` key, and a drag-and-drop move only ever rewrites one section.
//!
//! A move goes through two steps, shared by the client controller and the store:
//!
//! 1. **Allocate** ([`allocator`]): compute one fractional key for the moved note so that a
//!    re-sort puts it at the target slot. Pure, never fails on well-formed input.
//! 2. **Reconcile** ([`reconcile`]): re-sort the section with the provisional key, then
//!    rewrite every member to its dense rank `0..k-1`. The dense batch is what gets persisted.
//!
//! Normalizing after every move is what keeps the keys healthy. An `f64` midpoint between
//! two neighbours loses a bit of headroom per insertion; see [`MIDPOINT_DEPTH_LIMIT`].
//!
//! ## Listing Order
//!
//! The store hands out active notes sorted by `(is_pinned DESC, order ASC, created_at DESC)`
//! ([`listing_cmp`]). Everything here assumes that order and re-derives section sequences by
//! filtering on `is_pinned`.

use crate::model::{Note, NoteOrder, Section};
use std::cmp::Ordering;

pub mod allocator;
pub mod reconcile;

pub use allocator::{allocate_order, resolve_move, Move};
pub use reconcile::{normalize, reindex_section, section_sequence};

/// Number of midpoint insertions into the same integer gap that an `f64` key survives before
/// two neighbours collapse onto the same value. Reconciling after each move resets the gap.
pub const MIDPOINT_DEPTH_LIMIT: u32 = 52;

/// Section-local comparison: `order` ascending, newest first on ties, then id.
pub fn section_cmp(a: &Note, b: &Note) -> Ordering {
    a.order
        .total_cmp(&b.order)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Full listing comparison: pinned first, then [`section_cmp`].
pub fn listing_cmp(a: &Note, b: &Note) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then_with(|| section_cmp(a, b))
}

/// The active notes of one section, sorted by [`section_cmp`].
pub fn section_notes<'a>(notes: &'a [Note], section: Section) -> Vec<&'a Note> {
    let mut members: Vec<&Note> = notes
        .iter()
        .filter(|n| !n.is_archived && section.contains(n))
        .collect();
    members.sort_by(|a, b| section_cmp(a, b));
    members
}

/// `(id, order)` keys of one section, in display order.
pub fn section_keys(notes: &[Note], section: Section) -> Vec<NoteOrder> {
    section_notes(notes, section)
        .into_iter()
        .map(|n| NoteOrder {
            id: n.id,
            order: n.order,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewNote;
    use chrono::{Duration, Utc};

    fn note(id: u64, order: f64, pinned: bool) -> Note {
        let mut n = Note::new(id, NewNote::titled(format!("n{id}")), order);
        n.is_pinned = pinned;
        n
    }

    #[test]
    fn listing_puts_pinned_first_then_order() {
        let mut notes = vec![
            note(1, 0.0, false),
            note(2, 5.0, true),
            note(3, 1.0, true),
            note(4, -1.0, false),
        ];
        notes.sort_by(listing_cmp);
        let ids: Vec<_> = notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[test]
    fn ties_break_newest_first() {
        let mut older = note(1, 2.0, false);
        older.created_at = Utc::now() - Duration::hours(1);
        let newer = note(2, 2.0, false);
        let notes = vec![older, newer];
        let ids: Vec<_> = section_notes(&notes, Section::Other)
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn section_filter_skips_archived_and_other_section() {
        let mut archived = note(3, 0.0, true);
        archived.is_archived = true;
        let notes = vec![note(1, 1.0, true), note(2, 0.0, false), archived];
        let keys = section_keys(&notes, Section::Pinned);
        assert_eq!(keys, vec![NoteOrder { id: 1, order: 1.0 }]);
    }
}
