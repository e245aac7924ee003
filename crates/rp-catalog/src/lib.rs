//! `rp-catalog` — where books and their chapter counts come from.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`canon`]    | `BookCode`, `BookRef`, `Canon` (bundled 66-book listing)   |
//! | [`source`]   | `MetaSource` trait, `BookCounts`                           |
//! | [`store`]    | `MetaStore` trait, `CachedMeta`, `MemoryStore`, `FileStore` |
//! | [`resolve`]  | `Catalog` — selection → `Vec<Book>` via store then source  |
//! | [`loader`]   | `load_books_csv`, `load_books_reader`                      |
//! | [`error`]    | `CatalogError`, `CatalogResult<T>`                         |
//!
//! # Resolution order
//!
//! ```text
//! source.list_books()            canonical order, names + codes
//!   └─ keep selected names       selection order is ignored
//!        └─ store.get(code)      unless forced
//!             └─ source.fetch_counts(book) → store.put(code, meta)
//! ```
//!
//! A remote catalog service plugs in as another [`MetaSource`]; the bundled
//! [`Canon`] is the offline default.

pub mod canon;
pub mod error;
pub mod loader;
pub mod resolve;
pub mod source;
pub mod store;


pub use canon::{BookCode, BookRef, Canon};
pub use error::{CatalogError, CatalogResult};
pub use loader::{load_books_csv, load_books_reader};
pub use resolve::Catalog;
pub use source::{BookCounts, MetaSource};
pub use store::{CachedMeta, FileStore, MemoryStore, MetaStore};
