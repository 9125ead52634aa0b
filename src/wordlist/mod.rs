// src/wordlist/mod.rs
use thiserror::Error;

pub mod standard;
pub mod store;
pub mod transfer;

pub use standard::{merge_sources, standard_options};
pub use store::WordListStore;
pub use transfer::{export_options, import_options, validate_options};

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Persist error: {0}")]
    PersistError(#[from] tempfile::PersistError),

    #[error("Word list must be a JSON array")]
    NotAnArray,

    #[error("Invalid word list entry at index {0}: {1}")]
    InvalidOption(usize, String),

    #[error("No words to export")]
    NothingToExport,

    #[error("Could not determine a data directory")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, WordListError>;
