//! `Book` — the container the scheduler walks through.
//!
//! A book is a named run of chapters numbered `1..=chapters`.  The verse count
//! rides along for plan statistics and never influences scheduling.

use crate::{CoreError, CoreResult};

/// One named container of chapters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub name:     String,
    /// Capacity in chapters.  Always > 0.
    pub chapters: u32,
    pub verses:   u32,
}

impl Book {
    /// Construct a book with no verse information.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `chapters == 0`.
    pub fn new(name: impl Into<String>, chapters: u32) -> Self {
        debug_assert!(chapters > 0, "a book must have at least one chapter");
        Self { name: name.into(), chapters, verses: 0 }
    }

    /// Checked constructor for data read from files or remote catalogs.
    pub fn try_new(name: impl Into<String>, chapters: u32, verses: u32) -> CoreResult<Self> {
        let name = name.into();
        if chapters == 0 {
            return Err(CoreError::EmptyBook(name));
        }
        Ok(Self { name, chapters, verses })
    }

    pub fn with_verses(mut self, verses: u32) -> Self {
        self.verses = verses;
        self
    }
}

/// Sum of chapter counts, i.e. the total schedulable units.
pub fn total_chapters(books: &[Book]) -> u64 {
    books.iter().map(|b| b.chapters as u64).sum()
}

pub fn total_verses(books: &[Book]) -> u64 {
    books.iter().map(|b| b.verses as u64).sum()
}
