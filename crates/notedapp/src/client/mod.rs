//! # Client Side
//!
//! What a UI holds on to: the rendered note list ([`state`]) and the optimistic reorder
//! flow on top of it ([`controller`]). Nothing here touches storage directly; the
//! controller talks to a [`ReorderEndpoint`], which is the API facade in-process or a
//! remote call in a networked frontend.

use crate::error::Result;
use crate::model::NoteOrder;

pub mod controller;
pub mod state;

pub use controller::{Notice, PendingReorder, ReorderController, ReorderPhase, Settlement};
pub use state::{NotesAction, NotesState};

/// Receiver of reorder batches. `Ok(())` means the batch was persisted.
pub trait ReorderEndpoint {
    fn reorder(&mut self, batch: &[NoteOrder]) -> Result<()>;
}
