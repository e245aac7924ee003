//! `Plan` — a rendered schedule plus the figures reported alongside it.

use rp_core::{Book, PlanDate, total_chapters, total_verses};
use rp_schedule::{DayEntry, Schedule};

/// Chapter and verse totals for a set of books.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlanStats {
    pub chapters: u64,
    pub verses:   u64,
}

impl PlanStats {
    pub fn of(books: &[Book]) -> Self {
        Self { chapters: total_chapters(books), verses: total_verses(books) }
    }

    /// Average chapters per day over `days` days.
    pub fn chapters_per_day(&self, days: u32) -> f64 {
        self.chapters as f64 / days as f64
    }

    pub fn verses_per_day(&self, days: u32) -> f64 {
        self.verses as f64 / days as f64
    }
}

/// A finished reading plan.
#[derive(Clone, Debug)]
pub struct Plan {
    pub(crate) books:          Vec<Book>,
    pub(crate) quotas:         Vec<u32>,
    pub(crate) schedule:       Schedule,
    pub(crate) requested_days: u32,
    pub(crate) degraded:       bool,
}

impl Plan {
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Chapters assigned to each day, in day order.
    pub fn quotas(&self) -> &[u32] {
        &self.quotas
    }

    pub fn days(&self) -> &[DayEntry] {
        self.schedule.days()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The day count that was asked for.  Differs from `days().len()` only
    /// when the plan is [`degraded`][Self::degraded].
    pub fn requested_days(&self) -> u32 {
        self.requested_days
    }

    /// `true` when more days were requested than there are chapters, so the
    /// plan fell back to one chapter per day.
    pub fn degraded(&self) -> bool {
        self.degraded
    }

    pub fn stats(&self) -> PlanStats {
        PlanStats::of(&self.books)
    }

    pub fn total_chapters(&self) -> u64 {
        total_chapters(&self.books)
    }

    pub fn total_verses(&self) -> u64 {
        total_verses(&self.books)
    }

    /// Chapters per requested day.
    pub fn chapters_per_day(&self) -> f64 {
        self.stats().chapters_per_day(self.requested_days)
    }

    /// Verses per requested day.
    pub fn verses_per_day(&self) -> f64 {
        self.stats().verses_per_day(self.requested_days)
    }

    pub fn start_date(&self) -> Option<PlanDate> {
        self.days().first().map(|d| d.date)
    }

    pub fn end_date(&self) -> Option<PlanDate> {
        self.schedule.end_date()
    }
}
