//! Order-key allocation for a single drag-and-drop move.
//!
//! Indices are 0-based positions in the section as it is displayed *before* the move, with
//! the moved note still at `old_index`. `new_index` is the slot the note should end up in.
//!
//! | target                | new key                                        |
//! |-----------------------|------------------------------------------------|
//! | `new_index == 0`      | `first - 1`                                    |
//! | `new_index == len-1`  | `last + 1`                                     |
//! | moving down           | midpoint of `keys[new]` and `keys[new + 1]`    |
//! | moving up             | midpoint of `keys[new]` and `keys[new - 1]`    |

use crate::model::{NoteId, NoteOrder};

/// A resolved move inside one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub old_index: usize,
    pub new_index: usize,
}

/// Turns a drag gesture (`active` dropped over `over`) into section indices.
///
/// Returns `None` when the gesture is a no-op: dropped on itself, or either id is not part
/// of the section.
pub fn resolve_move(section: &[NoteOrder], active: NoteId, over: NoteId) -> Option<Move> {
    if active == over {
        return None;
    }
    let old_index = section.iter().position(|k| k.id == active)?;
    let new_index = section.iter().position(|k| k.id == over)?;
    Some(Move {
        old_index,
        new_index,
    })
}

/// Computes the new `order` for the note at `old_index` moved to `new_index`.
///
/// Returns `None` when either index is out of bounds.
pub fn allocate_order(section: &[NoteOrder], old_index: usize, new_index: usize) -> Option<f64> {
    let len = section.len();
    if old_index >= len || new_index >= len {
        return None;
    }

    if new_index == 0 {
        return Some(section[0].order - 1.0);
    }
    if new_index == len - 1 {
        return Some(section[len - 1].order + 1.0);
    }

    let after = section[new_index].order;
    let before = if new_index > old_index {
        section
            .get(new_index + 1)
            .map_or(after + 2.0, |k| k.order)
    } else {
        section
            .get(new_index - 1)
            .map_or(after - 2.0, |k| k.order)
    };
    Some((after + before) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn keys(orders: &[f64]) -> Vec<NoteOrder> {
        orders
            .iter()
            .enumerate()
            .map(|(i, &order)| NoteOrder {
                id: i as NoteId + 1,
                order,
            })
            .collect()
    }

    /// Re-sorts the section with the moved key replaced and returns the moved note's slot.
    fn landing_slot(section: &[NoteOrder], old_index: usize, new_order: f64) -> usize {
        let moved = section[old_index].id;
        let mut resorted: Vec<NoteOrder> = section.to_vec();
        resorted[old_index].order = new_order;
        resorted.sort_by(|a, b| a.order.total_cmp(&b.order));
        resorted.iter().position(|k| k.id == moved).unwrap()
    }

    #[test]
    fn drag_last_to_top() {
        let section = keys(&[0.0, 1.0, 2.0]);
        assert_eq!(allocate_order(&section, 2, 0), Some(-1.0));
    }

    #[test]
    fn drag_first_to_bottom() {
        let section = keys(&[0.0, 1.0, 2.0]);
        assert_eq!(allocate_order(&section, 0, 2), Some(3.0));
    }

    #[test]
    fn moving_down_takes_midpoint_below_target() {
        let section = keys(&[0.0, 1.0, 2.0, 3.0]);
        let order = allocate_order(&section, 1, 2).unwrap();
        assert_eq!(order, 2.5);
        assert!(order > 2.0 && order < 3.0);
        assert_eq!(landing_slot(&section, 1, order), 2);
    }

    #[test]
    fn moving_up_takes_midpoint_above_target() {
        let section = keys(&[0.0, 1.0, 2.0, 3.0]);
        let order = allocate_order(&section, 3, 1).unwrap();
        assert_eq!(order, 0.5);
        assert_eq!(landing_slot(&section, 3, order), 1);
    }

    #[test]
    fn single_note_section() {
        let section = keys(&[4.0]);
        assert_eq!(allocate_order(&section, 0, 0), Some(3.0));
    }

    #[test]
    fn out_of_bounds_is_none() {
        let section = keys(&[0.0, 1.0]);
        assert_eq!(allocate_order(&section, 2, 0), None);
        assert_eq!(allocate_order(&section, 0, 5), None);
        assert_eq!(allocate_order(&[], 0, 0), None);
    }

    #[test]
    fn resolve_move_rejects_noops() {
        let section = keys(&[0.0, 1.0, 2.0]);
        assert_eq!(resolve_move(&section, 2, 2), None);
        assert_eq!(resolve_move(&section, 2, 99), None);
        assert_eq!(resolve_move(&section, 99, 1), None);
        assert_eq!(
            resolve_move(&section, 3, 1),
            Some(Move {
                old_index: 2,
                new_index: 0
            })
        );
    }

    #[test]
    fn repeated_midpoints_eventually_collapse() {
        // Keep inserting just above 1.0 without normalizing.
        let mut low = 1.0_f64;
        let high = 2.0_f64;
        let mut depth = 0;
        loop {
            let mid = (low + high) / 2.0;
            if mid <= low || mid >= high {
                break;
            }
            low = mid;
            depth += 1;
        }
        assert!(depth >= super::super::MIDPOINT_DEPTH_LIMIT);
        assert!(depth < 64);
    }

    proptest! {
        #[test]
        fn moved_note_lands_on_target(
            len in 2usize..24,
            from in 0usize..24,
            to in 0usize..24,
        ) {
            let from = from % len;
            let to = to % len;
            prop_assume!(from != to);
            let section = keys(&(0..len).map(|i| i as f64).collect::<Vec<_>>());
            let order = allocate_order(&section, from, to).unwrap();
            prop_assert_eq!(landing_slot(&section, from, order), to);
        }

        #[test]
        fn boundary_moves_escape_the_range(
            orders in prop::collection::vec(-1000i32..1000, 2..20),
            from in 0usize..20,
        ) {
            let mut orders: Vec<f64> = orders.into_iter().map(f64::from).collect();
            orders.sort_by(f64::total_cmp);
            let section = keys(&orders);
            let from = from % section.len();
            let min = orders[0];
            let max = orders[orders.len() - 1];

            prop_assert!(allocate_order(&section, from, 0).unwrap() < min);
            let last = section.len() - 1;
            prop_assert!(allocate_order(&section, from, last).unwrap() > max);
        }
    }
}
