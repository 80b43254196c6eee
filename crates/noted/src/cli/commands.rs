//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a `tracing` subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load [`NotedConfig`], resolve the data directory, open the store
//! 3. **Dispatch**: Route commands to handlers
//! 4. **Error Handling**: Errors bubble up to `main`, which prints them and exits 1

use super::handlers;
use super::setup::{CategoryCommands, Cli, Commands};
use anyhow::Context;
use clap::Parser;
use notedapp::api::NotedApi;
use notedapp::config::NotedConfig;
use notedapp::store::fs::FileStore;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = NotedConfig::load(&cwd).context("failed to load configuration")?;
    init_logging(&config, cli.verbose);

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    tracing::debug!(data_dir = %data_dir.display(), "opening store");
    let mut api = NotedApi::new(FileStore::new(data_dir));

    dispatch(&mut api, cli.command)
}

/// stderr subscriber. `--verbose` wins over the configured filter.
fn init_logging(config: &NotedConfig, verbose: bool) {
    let directive = if verbose { "debug" } else { config.log.as_str() };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (only possible in tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn dispatch(api: &mut NotedApi<FileStore>, command: Option<Commands>) -> anyhow::Result<()> {
    let Some(command) = command else {
        return handlers::list(api, false, false, None, false);
    };

    match command {
        Commands::List {
            pinned,
            archived,
            category,
            json,
        } => handlers::list(api, pinned, archived, category, json),
        Commands::Create {
            title,
            content,
            attrs,
            list,
            items,
        } => handlers::create(api, title, content, attrs, list, items),
        Commands::Update {
            id,
            title,
            content,
            attrs,
        } => handlers::update(api, id, title, content, attrs),
        Commands::Pin { id } => handlers::print_result(api.pin_note(id)?),
        Commands::Unpin { id } => handlers::print_result(api.unpin_note(id)?),
        Commands::Archive { id } => handlers::print_result(api.archive_note(id)?),
        Commands::Unarchive { id } => handlers::print_result(api.unarchive_note(id)?),
        Commands::Duplicate { id } => handlers::print_result(api.duplicate_note(id)?),
        Commands::Delete { ids } => handlers::print_result(api.delete_notes(&ids)?),
        Commands::ArchiveBulk { ids } => handlers::print_result(api.archive_notes(&ids)?),
        Commands::Move { active, over } => handlers::move_note(api, active, over),
        Commands::Reorder { body } => handlers::print_result(api.reorder_body(&body)?),
        Commands::Category { action } => match action {
            CategoryCommands::List { json } => handlers::list_categories(api, json),
            CategoryCommands::Add { name, icon, color } => {
                handlers::add_category(api, name, icon, color)
            }
            CategoryCommands::Rm { id } => handlers::print_result(api.delete_category(id)?),
            CategoryCommands::Seed => handlers::print_result(api.seed_categories()?),
        },
    }
}
