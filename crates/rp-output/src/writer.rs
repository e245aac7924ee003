//! The `PlanWriter` trait implemented by all backend writers.

use rp_plan::Plan;

use crate::{DayRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
pub trait PlanWriter {
    /// Append a batch of days, in order.
    fn write_days(&mut self, rows: &[DayRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every day of `plan` to `writer` and finish it.
pub fn write_plan<W: PlanWriter + ?Sized>(writer: &mut W, plan: &Plan) -> OutputResult<()> {
    let rows: Vec<DayRow> = plan.days().iter().map(DayRow::from).collect();
    writer.write_days(&rows)?;
    writer.finish()
}
