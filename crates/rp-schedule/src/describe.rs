//! Range text for a single day.

use std::fmt::Write;

use rp_core::Book;

use crate::{Cursor, ScheduleError, ScheduleResult};

/// Describe reading `remaining` chapters starting at `cursor`.
///
/// Each book touched contributes one segment and segments are joined with
/// `"; "`:
///
/// | Segment           | When                                        |
/// |-------------------|---------------------------------------------|
/// | `Genesis 4`       | a single chapter                            |
/// | `Genesis 4-7`     | a run inside one book                       |
/// | `Genesis 48-50`   | a run cut off by the end of the book        |
/// | `Genesis 50`      | only the last chapter before rolling over   |
///
/// `cursor` is not modified.  Reading that ends exactly on a book's last
/// chapter stays in that book.
///
/// # Errors
///
/// - [`ScheduleError::PastLastBook`] if the books run out before `remaining`
///   chapters are covered.
/// - [`ScheduleError::EmptyBook`] if the walk reaches a book with no chapters.
/// - [`ScheduleError::CursorOutOfRange`] if `cursor.chapter` is not a chapter
///   of its book.
pub fn describe(books: &[Book], cursor: Cursor, remaining: u32) -> ScheduleResult<String> {
    debug_assert!(remaining > 0, "a day reads at least one chapter");

    if let Some(start) = books.get(cursor.book.index()) {
        if cursor.chapter == 0 || cursor.chapter > start.chapters {
            return Err(ScheduleError::CursorOutOfRange { cursor });
        }
    }

    let mut text = String::new();
    let mut book = cursor.book;
    let mut chapter = cursor.chapter;
    let mut remaining = remaining;

    loop {
        let current = books
            .get(book.index())
            .ok_or(ScheduleError::PastLastBook { book })?;
        let last = current.chapters;
        if last == 0 {
            return Err(ScheduleError::EmptyBook { book });
        }

        if !text.is_empty() {
            text.push_str("; ");
        }

        // u64 so that a huge quota cannot overflow the end-chapter sum.
        if chapter as u64 + remaining as u64 - 1 <= last as u64 {
            if remaining == 1 {
                let _ = write!(text, "{} {}", current.name, chapter);
            } else {
                let _ = write!(text, "{} {}-{}", current.name, chapter, chapter + remaining - 1);
            }
            return Ok(text);
        }

        if chapter != last {
            let _ = write!(text, "{} {}-{}", current.name, chapter, last);
        } else {
            let _ = write!(text, "{} {}", current.name, last);
        }

        remaining -= last - chapter + 1;
        book = book.next();
        chapter = 1;
    }
}
