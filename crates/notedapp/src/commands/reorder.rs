//! The reorder endpoint: `PATCH /notes/reorder` with `{ "notes": [{ "id", "order" }] }`.
//!
//! Each pair is an independent point write keyed by id. The endpoint trusts the caller's
//! sequence and does not re-derive ranks. Ids that match no note are skipped without failing
//! the batch; this mirrors the persistence layer and is reported back in [`ReorderOutcome`]
//! for logging only. The wire response stays "success, empty body".

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotedError, Result};
use crate::model::{NoteId, ReorderRequest};
use crate::store::DataStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderOutcome {
    pub applied: usize,
    pub ignored: Vec<NoteId>,
}

/// Parses and validates a raw request body.
pub fn parse_body(body: &str) -> Result<ReorderRequest> {
    let request: ReorderRequest = serde_json::from_str(body)
        .map_err(|e| NotedError::Validation(format!("malformed reorder body: {}", e)))?;
    validate(&request)?;
    Ok(request)
}

pub fn validate(request: &ReorderRequest) -> Result<()> {
    if let Some(bad) = request.notes.iter().find(|p| !p.order.is_finite()) {
        return Err(NotedError::Validation(format!(
            "order for note {} must be a finite number",
            bad.id
        )));
    }
    Ok(())
}

pub fn apply<S: DataStore>(store: &mut S, request: &ReorderRequest) -> Result<ReorderOutcome> {
    validate(request)?;
    tracing::debug!(batch = ?request.notes, "reorder batch");

    let ignored = store.update_orders(&request.notes)?;
    if !ignored.is_empty() {
        tracing::debug!(?ignored, "reorder skipped unknown note ids");
    }

    let outcome = ReorderOutcome {
        applied: request.notes.len() - ignored.len(),
        ignored,
    };
    tracing::info!(applied = outcome.applied, "reordered notes");
    Ok(outcome)
}

pub fn run<S: DataStore>(store: &mut S, request: &ReorderRequest) -> Result<CmdResult> {
    let outcome = apply(store, request)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Reordered {} note(s)",
        outcome.applied
    )));
    Ok(result)
}
