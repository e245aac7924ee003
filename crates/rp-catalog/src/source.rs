//! `MetaSource` — the catalog service boundary.

use crate::{BookRef, CatalogResult};

/// Chapter and verse totals for one book.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BookCounts {
    pub chapters: u32,
    pub verses:   u32,
}

/// A provider of book listings and per-book counts.
///
/// Implementations may be remote and slow; [`Catalog`][crate::Catalog] puts a
/// [`MetaStore`][crate::MetaStore] in front so `fetch_counts` is only called
/// on a cache miss.
pub trait MetaSource {
    /// Every book the source knows, in canonical reading order.
    fn list_books(&self) -> CatalogResult<Vec<BookRef>>;

    /// Count the chapters and verses of `book`.
    ///
    /// Introductory sections that are not numbered chapters are not counted.
    fn fetch_counts(&self, book: &BookRef) -> CatalogResult<BookCounts>;
}

impl<S: MetaSource + ?Sized> MetaSource for &S {
    fn list_books(&self) -> CatalogResult<Vec<BookRef>> {
        (**self).list_books()
    }

    fn fetch_counts(&self, book: &BookRef) -> CatalogResult<BookCounts> {
        (**self).fetch_counts(book)
    }
}
