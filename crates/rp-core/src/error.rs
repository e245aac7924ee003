//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` with
//! `#[from]` where a core operation can fail on their behalf.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("book {0:?} has no chapters")]
    EmptyBook(String),

    #[error("invalid date {input:?} (expected format {format:?}): {source}")]
    InvalidDate {
        input:  String,
        format: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    #[error("date {0} cannot be advanced past the end of the calendar")]
    CalendarOverflow(crate::PlanDate),
}

/// Shorthand result type for `rp-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
