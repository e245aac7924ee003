use std::path::PathBuf;

use rp_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no books selected")]
    EmptySelection,

    #[error("book {0:?} is not in the catalog")]
    UnknownBook(String),

    #[error("catalog has no book with code {0}")]
    UnknownCode(String),

    #[error("malformed cache file {path}: {reason}")]
    CacheFormat { path: PathBuf, reason: String },

    #[error("book list parse error: {0}")]
    Parse(String),

    #[error("invalid book: {0}")]
    Book(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
