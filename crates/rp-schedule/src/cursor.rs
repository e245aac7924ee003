//! The reading position carried from one day to the next.

use rp_core::{Book, BookIndex};

use crate::{ScheduleError, ScheduleResult};

/// Where the next day's reading begins.
///
/// `chapter` is 1-based and stays within `1..=books[book].chapters` between
/// days.  The cursor only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub book:    BookIndex,
    pub chapter: u32,
}

impl Cursor {
    /// Chapter 1 of the first book.
    pub const START: Cursor = Cursor { book: BookIndex(0), chapter: 1 };

    /// Move forward `chapters` chapters, rolling into following books.
    ///
    /// Landing exactly one past a book's last chapter moves to chapter 1 of
    /// the next book.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::PastLastBook`] if the move runs off the end of `books`,
    /// [`ScheduleError::EmptyBook`] if it crosses a book with no chapters.
    pub fn advance(&mut self, books: &[Book], chapters: u32) -> ScheduleResult<()> {
        let mut chapter = self.chapter as u64 + chapters as u64;
        let mut book = self.book;

        loop {
            let capacity = books
                .get(book.index())
                .ok_or(ScheduleError::PastLastBook { book })?
                .chapters as u64;
            if capacity == 0 {
                return Err(ScheduleError::EmptyBook { book });
            }
            if chapter <= capacity {
                break;
            }
            chapter -= capacity;
            book = book.next();
        }

        self.book = book;
        self.chapter = chapter as u32;
        Ok(())
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::START
    }
}
