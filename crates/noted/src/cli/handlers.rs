//! Command handlers for the noted CLI.
//!
//! Each handler calls the API, then renders the result. Handlers that only need to show a
//! `CmdResult` go through [`print_result`].

use super::render::{print_categories, print_json, print_messages, print_notes};
use super::setup::NoteAttrs;
use anyhow::bail;
use notedapp::api::NotedApi;
use notedapp::client::{NotesState, ReorderController, Settlement};
use notedapp::commands::get::{NoteFilter, NoteStatusFilter};
use notedapp::commands::{CmdMessage, CmdResult};
use notedapp::model::{ListItem, NewCategory, NewNote, NoteId, NoteType, NoteUpdate};
use notedapp::store::fs::FileStore;
use notedapp::store::DataStore;

type Api = NotedApi<FileStore>;

/// Messages first, then whatever notes or categories the command touched.
pub fn print_result(result: CmdResult) -> anyhow::Result<()> {
    print_messages(&result.messages);
    if !result.listed_notes.is_empty() {
        print_notes(&result.listed_notes);
    }
    if !result.categories.is_empty() {
        print_categories(&result.categories);
    }
    Ok(())
}

pub fn list(
    api: &Api,
    pinned: bool,
    archived: bool,
    category: Option<u64>,
    json: bool,
) -> anyhow::Result<()> {
    let status = if archived {
        NoteStatusFilter::Archived
    } else if pinned {
        NoteStatusFilter::Pinned
    } else {
        NoteStatusFilter::Active
    };
    let result = api.get_notes(NoteFilter {
        status,
        category_id: category,
    })?;

    if json {
        print_json(&result.listed_notes)?;
    } else {
        print_notes(&result.listed_notes);
    }
    Ok(())
}

pub fn create(
    api: &mut Api,
    title: String,
    content: Option<String>,
    attrs: NoteAttrs,
    list: bool,
    items: Vec<String>,
) -> anyhow::Result<()> {
    let is_list = list || !items.is_empty();
    let draft = NewNote {
        title,
        content,
        note_type: Some(if is_list {
            NoteType::List
        } else {
            NoteType::Text
        }),
        list_items: is_list.then(|| items.into_iter().map(ListItem::new).collect()),
        color: attrs.color,
        category_id: attrs.category,
    };
    print_result(api.create_note(draft)?)
}

pub fn update(
    api: &mut Api,
    id: NoteId,
    title: Option<String>,
    content: Option<String>,
    attrs: NoteAttrs,
) -> anyhow::Result<()> {
    let update = NoteUpdate {
        title,
        content,
        color: attrs.color,
        category_id: attrs.category,
        ..Default::default()
    };
    if update.is_empty() {
        bail!("nothing to update, pass at least one of --title, --content, --color, --category");
    }
    print_result(api.update_note(id, &update)?)
}

/// Drag-and-drop from the terminal: drop `active` onto the slot of `over`.
pub fn move_note(api: &mut Api, active: NoteId, over: NoteId) -> anyhow::Result<()> {
    let section = api.store().get_note(active)?.section();
    api.store().get_note(over)?;

    let listing = api.active_notes(None)?.listed_notes;
    let mut controller = ReorderController::new(NotesState::new(listing));

    match controller.run_move(api, active, over, section) {
        None => {
            print_messages(&[CmdMessage::warning(format!(
                "Nothing to move: notes {} and {} are not distinct active notes of the same section",
                active, over
            ))]);
            Ok(())
        }
        Some(Settlement::Committed) => {
            print_messages(&[CmdMessage::success(format!("Moved note {}", active))]);
            print_notes(&api.active_notes(None)?.listed_notes);
            Ok(())
        }
        Some(_) => {
            let reason = controller
                .take_notices()
                .into_iter()
                .map(|n| n.message)
                .next()
                .unwrap_or_else(|| "Failed to reorder note".to_string());
            bail!(reason)
        }
    }
}

pub fn list_categories(api: &Api, json: bool) -> anyhow::Result<()> {
    let categories = api.list_categories()?.categories;
    if json {
        print_json(&categories)?;
    } else {
        print_categories(&categories);
    }
    Ok(())
}

pub fn add_category(
    api: &mut Api,
    name: String,
    icon: Option<String>,
    color: Option<String>,
) -> anyhow::Result<()> {
    print_result(api.create_category(NewCategory { name, icon, color })?)
}
