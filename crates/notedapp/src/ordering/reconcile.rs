//! Dense re-ranking of a section after a move.
//!
//! The reconciled batch always covers the whole section, so applying it is enough to make
//! the persisted keys match the displayed sequence no matter what the keys were before.

use super::section_notes;
use crate::model::{Note, NoteId, NoteOrder, Section};

/// Ids of one section in display order, with `moved` (if any) re-keyed before sorting.
pub fn section_sequence(
    notes: &[Note],
    section: Section,
    moved: Option<(NoteId, f64)>,
) -> Vec<NoteId> {
    let rekeyed: Vec<Note> = notes
        .iter()
        .map(|n| match moved {
            Some((id, order)) if n.id == id => Note {
                order,
                ..n.clone()
            },
            _ => n.clone(),
        })
        .collect();

    section_notes(&rekeyed, section)
        .into_iter()
        .map(|n| n.id)
        .collect()
}

/// Assigns `order = index` to each id, preserving the sequence.
pub fn normalize(sequence: &[NoteId]) -> Vec<NoteOrder> {
    sequence
        .iter()
        .enumerate()
        .map(|(index, &id)| NoteOrder {
            id,
            order: index as f64,
        })
        .collect()
}

/// [`section_sequence`] followed by [`normalize`]: the batch sent to the reorder endpoint.
pub fn reindex_section(
    notes: &[Note],
    section: Section,
    moved: Option<(NoteId, f64)>,
) -> Vec<NoteOrder> {
    normalize(&section_sequence(notes, section, moved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewNote;
    use proptest::prelude::*;

    fn note(id: NoteId, order: f64, pinned: bool) -> Note {
        let mut n = Note::new(id, NewNote::titled(format!("n{id}")), order);
        n.is_pinned = pinned;
        n
    }

    #[test]
    fn drag_to_top_reconciles_densely() {
        // A(0) B(1) C(2) pinned; C dragged to the top gets -1 from the allocator.
        let notes = vec![note(1, 0.0, true), note(2, 1.0, true), note(3, 2.0, true)];
        let batch = reindex_section(&notes, Section::Pinned, Some((3, -1.0)));
        assert_eq!(
            batch,
            vec![
                NoteOrder { id: 3, order: 0.0 },
                NoteOrder { id: 1, order: 1.0 },
                NoteOrder { id: 2, order: 2.0 },
            ]
        );
    }

    #[test]
    fn other_section_is_left_out() {
        let notes = vec![note(1, 0.0, true), note(2, 7.0, false), note(3, 3.0, false)];
        let batch = reindex_section(&notes, Section::Other, None);
        assert_eq!(
            batch,
            vec![
                NoteOrder { id: 3, order: 0.0 },
                NoteOrder { id: 2, order: 1.0 },
            ]
        );
    }

    #[test]
    fn fractional_keys_become_integers() {
        let notes = vec![note(1, 0.25, false), note(2, 0.5, false), note(3, -4.0, false)];
        let batch = reindex_section(&notes, Section::Other, None);
        let orders: Vec<f64> = batch.iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![0.0, 1.0, 2.0]);
        assert_eq!(batch[0].id, 3);
    }

    #[test]
    fn empty_section_gives_empty_batch() {
        let notes = vec![note(1, 0.0, true)];
        assert!(reindex_section(&notes, Section::Other, None).is_empty());
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(orders in prop::collection::vec(-50.0f64..50.0, 0..30)) {
            let notes: Vec<Note> = orders
                .iter()
                .enumerate()
                .map(|(i, &o)| note(i as NoteId + 1, o, false))
                .collect();

            let first = reindex_section(&notes, Section::Other, None);

            let mut applied = notes.clone();
            for pair in &first {
                if let Some(n) = applied.iter_mut().find(|n| n.id == pair.id) {
                    n.order = pair.order;
                }
            }
            let second = reindex_section(&applied, Section::Other, None);
            prop_assert_eq!(&first, &second);

            // Dense, strictly increasing, no duplicates.
            for (i, pair) in second.iter().enumerate() {
                prop_assert_eq!(pair.order, i as f64);
            }
        }
    }
}
