//! Plain data row written by output backends.

use rp_schedule::DayEntry;

/// One day of a plan, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub day:      u32,
    /// `MM/DD/YYYY`.
    pub date:     String,
    pub reading:  String,
    pub chapters: u32,
}

impl From<&DayEntry> for DayRow {
    fn from(entry: &DayEntry) -> Self {
        Self {
            day:      entry.day.0,
            date:     entry.date.to_output_string(),
            reading:  entry.text.clone(),
            chapters: entry.chapters,
        }
    }
}
