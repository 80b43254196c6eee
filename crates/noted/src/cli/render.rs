//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal lines. Row builders return `String`s so they can be
//! unit tested; the `print_*` functions only write them out.
//!
//! ## Table Layout
//!
//! Each note row has:
//! - `pin` (2 chars): pin marker or empty
//! - `id` (6 chars): note id, right-aligned
//! - `title` (fill): title plus a content preview, truncated to fit
//! - `time_ago` (14 chars, right-aligned): time since the last update
//!
//! Pinned and other notes are printed as two blocks, mirroring the two sections.

use super::styles;
use chrono::{DateTime, Utc};
use notedapp::commands::{CmdMessage, MessageLevel};
use notedapp::model::{Category, Note, NoteType};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const PIN_MARKER: &str = "⚲";

const COL_PIN: usize = 2;
const COL_ID: usize = 6;
const COL_TIME: usize = 14;
const PREVIEW_CHARS: usize = 50;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", render_message(message));
    }
}

pub fn render_message(message: &CmdMessage) -> String {
    let style = match message.level {
        MessageLevel::Info => styles::info(),
        MessageLevel::Success => styles::success(),
        MessageLevel::Warning => styles::warning(),
        MessageLevel::Error => styles::error(),
    };
    style.apply_to(&message.content).to_string()
}

pub fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    let has_pinned = notes.iter().any(|n| n.is_pinned && !n.is_archived);
    let mut last_was_pinned = has_pinned;
    if has_pinned {
        println!("{}", styles::section_header().apply_to("Pinned"));
    }
    for note in notes {
        let pinned_entry = note.is_pinned && !note.is_archived;
        if last_was_pinned && !pinned_entry {
            println!();
            println!("{}", styles::section_header().apply_to("Others"));
        }
        last_was_pinned = pinned_entry;
        println!("{}", render_note_line(note, Utc::now()));
    }
}

pub fn render_note_line(note: &Note, now: DateTime<Utc>) -> String {
    let pin = if note.is_pinned {
        format!("{} ", PIN_MARKER)
    } else {
        " ".repeat(COL_PIN)
    };
    let id = format!("{:>width$} ", note.id, width = COL_ID - 1);

    let available = LINE_WIDTH.saturating_sub(COL_PIN + COL_ID + COL_TIME);
    let title = truncate_to_width(&title_with_preview(note), available);
    let padding = available.saturating_sub(title.width());

    let title_styled = if note.is_archived {
        styles::archived().apply_to(title)
    } else {
        styles::title().apply_to(title)
    };

    format!(
        "{}{}{}{}{}",
        styles::pinned().apply_to(pin),
        styles::id().apply_to(id),
        title_styled,
        " ".repeat(padding),
        styles::time().apply_to(format_time_ago(note.updated_at, now))
    )
}

fn title_with_preview(note: &Note) -> String {
    let preview: String = match note.note_type {
        NoteType::List => note
            .list_items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|item| {
                let mark = if item.completed { "[x]" } else { "[ ]" };
                format!("{} {}", mark, item.text)
            })
            .collect::<Vec<_>>()
            .join(" "),
        NoteType::Text => note.content.clone().unwrap_or_default(),
    };
    let preview: String = preview
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();

    if preview.is_empty() {
        note.title.clone()
    } else {
        format!("{} {}", note.title, preview)
    }
}

pub fn print_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("No categories.");
        return;
    }
    for category in categories {
        println!("{}", render_category_line(category));
    }
}

pub fn render_category_line(category: &Category) -> String {
    format!(
        "{} {} {}",
        styles::id().apply_to(format!("{:>width$}", category.id, width = COL_ID - 1)),
        styles::title().apply_to(&category.name),
        styles::info().apply_to(format!("({}, {})", category.icon, category.color))
    )
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = COL_TIME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use notedapp::model::{ListItem, NewNote};

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    fn note(title: &str) -> Note {
        Note::new(7, NewNote::titled(title), 0.0)
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn test_time_ago_is_right_aligned() {
        let now = Utc::now();
        let rendered = format_time_ago(now - Duration::hours(2), now);
        assert_eq!(rendered.width(), COL_TIME);
        assert!(rendered.trim_start().starts_with("2 hours"));
    }

    #[test]
    fn test_note_line_fills_the_width() {
        let n = note("Groceries");
        let line = plain(&render_note_line(&n, n.updated_at));
        assert_eq!(line.width(), LINE_WIDTH);
        assert!(line.contains("Groceries"));
        assert!(!line.contains(PIN_MARKER));
    }

    #[test]
    fn test_pinned_note_shows_marker() {
        let mut n = note("Pinned one");
        n.is_pinned = true;
        let line = plain(&render_note_line(&n, n.updated_at));
        assert!(line.starts_with(PIN_MARKER));
    }

    #[test]
    fn test_long_title_is_truncated() {
        let n = note(&"x".repeat(300));
        let line = plain(&render_note_line(&n, n.updated_at));
        assert!(line.contains('…'));
        assert_eq!(line.width(), LINE_WIDTH);
    }

    #[test]
    fn test_list_preview_shows_checkboxes() {
        let mut n = note("Shopping");
        n.note_type = NoteType::List;
        let mut done = ListItem::new("milk");
        done.completed = true;
        n.list_items = Some(vec![done, ListItem::new("eggs")]);
        assert_eq!(title_with_preview(&n), "Shopping [x] milk [ ] eggs");
    }

    #[test]
    fn test_content_preview_flattens_newlines() {
        let mut n = note("Title");
        n.content = Some("line one\nline two".to_string());
        assert_eq!(title_with_preview(&n), "Title line one line two");
    }

    #[test]
    fn test_message_keeps_content() {
        let rendered = render_message(&CmdMessage::success("Note created: A"));
        assert_eq!(plain(&rendered), "Note created: A");
    }
}
