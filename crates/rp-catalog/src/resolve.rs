//! `Catalog` — resolve a selection of book names into schedulable `Book`s.

use std::collections::HashSet;

use rp_core::Book;
use tracing::{debug, info};

use crate::{BookCounts, BookRef, CachedMeta, CatalogError, CatalogResult, MetaSource, MetaStore};

/// A [`MetaSource`] fronted by a [`MetaStore`].
pub struct Catalog<S: MetaSource, C: MetaStore> {
    source: S,
    store:  C,
}

impl<S: MetaSource, C: MetaStore> Catalog<S, C> {
    pub fn new(source: S, store: C) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &C {
        &self.store
    }

    pub fn into_store(self) -> C {
        self.store
    }

    /// Resolve `selection` into books, in the source's canonical order.
    ///
    /// Counts come from the store when present; otherwise, or whenever
    /// `force` is set, they are fetched from the source and written back.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptySelection`] if `selection` is empty
    /// - [`CatalogError::UnknownBook`] for the first selected name the
    ///   source does not list
    pub fn resolve<N: AsRef<str>>(&mut self, selection: &[N], force: bool) -> CatalogResult<Vec<Book>> {
        if selection.is_empty() {
            return Err(CatalogError::EmptySelection);
        }

        let listed = self.source.list_books()?;
        let known: HashSet<&str> = listed.iter().map(|b| b.name.as_str()).collect();
        let wanted: HashSet<&str> = selection.iter().map(|n| n.as_ref().trim()).collect();

        if let Some(missing) = selection
            .iter()
            .map(|n| n.as_ref().trim())
            .find(|n| !known.contains(n))
        {
            return Err(CatalogError::UnknownBook(missing.to_owned()));
        }

        listed
            .iter()
            .filter(|b| wanted.contains(b.name.as_str()))
            .map(|b| -> CatalogResult<Book> {
                let counts = self.counts_for(b, force)?;
                Ok(Book::try_new(b.name.clone(), counts.chapters, counts.verses)?)
            })
            .collect()
    }

    fn counts_for(&mut self, book: &BookRef, force: bool) -> CatalogResult<BookCounts> {
        if !force {
            if let Some(meta) = self.store.get(&book.code)? {
                debug!(code = %book.code, name = %book.name, "metadata cache hit");
                return Ok(BookCounts { chapters: meta.chapters, verses: meta.verses });
            }
            debug!(code = %book.code, name = %book.name, "metadata cache miss");
        }

        info!("Gathering statistics for {}...", book.name);
        let counts = self.source.fetch_counts(book)?;
        self.store.put(
            &book.code,
            &CachedMeta {
                name:     book.name.clone(),
                chapters: counts.chapters,
                verses:   counts.verses,
            },
        )?;
        Ok(counts)
    }
}
