//! Render a whole plan: one `DayEntry` per quota.

use rp_core::{Book, BookIndex, DayIndex, PlanDate, total_chapters};
use tracing::{debug, trace};

use crate::{Cursor, ScheduleError, ScheduleResult, describe};

/// One day of a rendered plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayEntry {
    pub day:      DayIndex,
    pub date:     PlanDate,
    /// Number of chapters assigned to this day (its quota).
    pub chapters: u32,
    /// Human-readable ranges, e.g. `"Genesis 48-50; Exodus 1-2"`.
    pub text:     String,
}

/// The ordered day entries of a rendered plan.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    days:          Vec<DayEntry>,
    chapters_read: u64,
}

impl Schedule {
    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    pub fn into_days(self) -> Vec<DayEntry> {
        self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total chapters covered by all days.
    pub fn chapters_read(&self) -> u64 {
        self.chapters_read
    }

    /// Date of the final day, if any.
    pub fn end_date(&self) -> Option<PlanDate> {
        self.days.last().map(|d| d.date)
    }
}

/// Walk `books` in order, assigning `quotas[i]` chapters to day `i`.
///
/// Day 0 is dated `start`.  With `advance_calendar` each following day is one
/// calendar day later; without it every entry carries `start`.
///
/// # Errors
///
/// Inputs are checked before any day is rendered:
///
/// - [`ScheduleError::NoBooks`] / [`ScheduleError::NoDays`] for empty inputs
/// - [`ScheduleError::EmptyBook`] for a book with zero chapters
/// - [`ScheduleError::ZeroQuota`] for a day with nothing to read
/// - [`ScheduleError::Overrun`] if the quotas need more chapters than
///   `books` hold
pub fn render(
    books: &[Book],
    quotas: &[u32],
    start: PlanDate,
    advance_calendar: bool,
) -> ScheduleResult<Schedule> {
    if books.is_empty() {
        return Err(ScheduleError::NoBooks);
    }
    if let Some(i) = books.iter().position(|b| b.chapters == 0) {
        return Err(ScheduleError::EmptyBook { book: BookIndex(i as u32) });
    }
    if quotas.is_empty() {
        return Err(ScheduleError::NoDays);
    }
    if let Some(i) = quotas.iter().position(|&q| q == 0) {
        return Err(ScheduleError::ZeroQuota { day: DayIndex(i as u32) });
    }

    let requested: u64 = quotas.iter().map(|&q| q as u64).sum();
    let available = total_chapters(books);
    if requested > available {
        return Err(ScheduleError::Overrun { requested, available });
    }

    let mut days = Vec::with_capacity(quotas.len());
    let mut cursor = Cursor::START;
    let mut date = start;
    let mut day = DayIndex(0);

    for (i, &quota) in quotas.iter().enumerate() {
        let text = describe(books, cursor, quota)?;
        trace!(%day, %date, quota, %text, "rendered day");
        days.push(DayEntry { day, date, chapters: quota, text });

        if i + 1 < quotas.len() {
            if advance_calendar {
                date = date.succ()?;
            }
            cursor.advance(books, quota)?;
            day = day.next();
        }
    }

    debug!(
        days = days.len(),
        chapters = requested,
        books = books.len(),
        "schedule rendered"
    );

    Ok(Schedule { days, chapters_read: requested })
}
