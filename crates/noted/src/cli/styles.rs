//! Styles for the noted CLI.
//!
//! Code works with semantic names (a pinned marker, a timestamp, a success message); the
//! concrete colors live here only.

use console::Style;

pub fn pinned() -> Style {
    Style::new().yellow()
}

pub fn id() -> Style {
    Style::new().dim()
}

pub fn title() -> Style {
    Style::new().bold()
}

pub fn time() -> Style {
    Style::new().color256(246).italic()
}

pub fn archived() -> Style {
    Style::new().dim().strikethrough()
}

pub fn section_header() -> Style {
    Style::new().dim().underlined()
}

pub fn info() -> Style {
    Style::new().dim()
}

pub fn success() -> Style {
    Style::new().green()
}

pub fn warning() -> Style {
    Style::new().yellow()
}

pub fn error() -> Style {
    Style::new().red()
}
