use crate::model::{CategoryId, NoteId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotedError {
    #[error("Note with ID {0} not found")]
    NoteNotFound(NoteId),

    #[error("Category with ID {0} not found")]
    CategoryNotFound(CategoryId),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NotedError>;
