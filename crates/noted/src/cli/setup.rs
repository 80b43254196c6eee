use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "noted",
    bin_name = "noted",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Pinned, reorderable notes for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes.json and categories.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes (pinned first, then by manual order)
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only pinned notes
        #[arg(long, conflicts_with = "archived")]
        pinned: bool,

        /// Only archived notes, most recently updated first
        #[arg(long)]
        archived: bool,

        /// Only notes in this category
        #[arg(long, value_name = "ID", conflicts_with_all = ["pinned", "archived"])]
        category: Option<u64>,

        /// Print the notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note at the end of the order
    #[command(alias = "n", display_order = 2)]
    Create {
        title: String,

        /// Body text
        content: Option<String>,

        #[command(flatten)]
        attrs: NoteAttrs,

        /// Make it a checklist note
        #[arg(long)]
        list: bool,

        /// Checklist item (repeatable, implies --list)
        #[arg(long = "item", value_name = "TEXT")]
        items: Vec<String>,
    },

    /// Update fields of a note
    #[command(display_order = 3)]
    Update {
        id: u64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[command(flatten)]
        attrs: NoteAttrs,
    },

    /// Pin a note
    #[command(alias = "p", display_order = 10)]
    Pin { id: u64 },

    /// Unpin a note
    #[command(alias = "u", display_order = 11)]
    Unpin { id: u64 },

    /// Archive a note
    #[command(display_order = 12)]
    Archive { id: u64 },

    /// Bring an archived note back
    #[command(display_order = 13)]
    Unarchive { id: u64 },

    /// Copy a note to the end of the order
    #[command(alias = "dup", display_order = 14)]
    Duplicate { id: u64 },

    /// Delete notes permanently (unknown ids are skipped)
    #[command(alias = "rm", display_order = 15)]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Archive several notes at once (unknown ids are skipped)
    #[command(display_order = 16)]
    ArchiveBulk {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Drop note ACTIVE onto the slot of note OVER (same section)
    #[command(alias = "mv", display_order = 20)]
    Move { active: u64, over: u64 },

    /// Apply a raw reorder body: '{"notes":[{"id":1,"order":0}]}'
    #[command(display_order = 21)]
    Reorder { body: String },

    /// Manage categories
    #[command(display_order = 30)]
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },
}

#[derive(Args, Debug, Default)]
pub struct NoteAttrs {
    /// Color (e.g. "#fde68a")
    #[arg(long)]
    pub color: Option<String>,

    /// Category id
    #[arg(long, value_name = "ID")]
    pub category: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories by name
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        json: bool,
    },

    /// Add a category
    Add {
        name: String,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        color: Option<String>,
    },

    /// Remove a category (its notes are kept, uncategorized)
    Rm { id: u64 },

    /// Add the default categories that are missing
    Seed,
}
