use rp_core::{BookIndex, CoreError, DayIndex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no books to schedule")]
    NoBooks,

    #[error("no days to schedule")]
    NoDays,

    #[error("{book} has no chapters")]
    EmptyBook { book: BookIndex },

    #[error("{day} has a quota of zero chapters")]
    ZeroQuota { day: DayIndex },

    /// The quotas ask for more chapters than the books hold.
    #[error("schedule overrun: quotas need {requested} chapters but the books hold {available}")]
    Overrun { requested: u64, available: u64 },

    #[error("reading walked past the last book ({book} does not exist)")]
    PastLastBook { book: BookIndex },

    #[error("cursor {cursor:?} does not point at a chapter of its book")]
    CursorOutOfRange { cursor: crate::Cursor },

    #[error("calendar error: {0}")]
    Calendar(#[from] CoreError),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
