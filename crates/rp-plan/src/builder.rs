//! Fluent builder for constructing a [`Plan`].

use rp_core::{Book, PlanDate, total_chapters};
use rp_partition::{GcdInterleave, InterleaveStrategy, PartitionError, partition_with};
use rp_schedule::render;
use tracing::{info, warn};

use crate::{Plan, PlanError, PlanResult, PlanStats};

/// Fluent builder for [`Plan`].
///
/// # Required inputs
///
/// - the ordered `Vec<Book>` to read through (constructor)
/// - `.days(n)` — how many days the plan should take
/// - `.start(date)` — the date of day 0
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default          |
/// |--------------------------|------------------|
/// | `.advance_calendar(b)`   | `true`           |
/// | `.interleave(s)`         | [`GcdInterleave`] |
pub struct PlanBuilder {
    books:            Vec<Book>,
    days:             Option<u32>,
    start:            Option<PlanDate>,
    advance_calendar: bool,
    interleave:       Box<dyn InterleaveStrategy>,
}

impl PlanBuilder {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            days:             None,
            start:            None,
            advance_calendar: true,
            interleave:       Box::new(GcdInterleave),
        }
    }

    pub fn days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }

    pub fn start(mut self, start: PlanDate) -> Self {
        self.start = Some(start);
        self
    }

    /// If `false`, every day is dated with the start date.
    pub fn advance_calendar(mut self, advance: bool) -> Self {
        self.advance_calendar = advance;
        self
    }

    /// Replace the quota ordering.  Any strategy other than
    /// [`GcdInterleave`] produces plans that differ from published ones.
    pub fn interleave<S: InterleaveStrategy + 'static>(mut self, strategy: S) -> Self {
        self.interleave = Box::new(strategy);
        self
    }

    /// Totals for the configured books, without scheduling anything.
    pub fn stats(&self) -> PlanStats {
        PlanStats::of(&self.books)
    }

    /// Partition the chapter total over the requested days and render them.
    ///
    /// Asking for more days than there are chapters is not an error: the plan
    /// is degraded to one chapter a day (see [`Plan::degraded`]).
    pub fn build(self) -> PlanResult<Plan> {
        if self.books.is_empty() {
            return Err(PlanError::NoBooks);
        }
        let days = self
            .days
            .ok_or_else(|| PlanError::Config("day count not set".into()))?;
        let start = self
            .start
            .ok_or_else(|| PlanError::Config("start date not set".into()))?;

        let total = total_chapters(&self.books);
        let total = u32::try_from(total).map_err(|_| PlanError::TooManyChapters(total))?;

        let (quotas, degraded) = match partition_with(total, days, self.interleave.as_ref()) {
            Ok(quotas) => (quotas, false),
            Err(PartitionError::Infeasible { total, parts }) => {
                warn!(
                    chapters = total,
                    days = parts,
                    "more days than chapters; falling back to one chapter per day"
                );
                (vec![1; total as usize], true)
            }
            Err(e) => return Err(e.into()),
        };

        let schedule = render(&self.books, &quotas, start, self.advance_calendar)?;

        info!(
            books = self.books.len(),
            chapters = total,
            days = schedule.len(),
            start = %start,
            degraded,
            "reading plan generated"
        );

        Ok(Plan {
            books: self.books,
            quotas,
            schedule,
            requested_days: days,
            degraded,
        })
    }
}
