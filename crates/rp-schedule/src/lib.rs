//! `rp-schedule` — turn per-day quotas into reading ranges.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`cursor`]    | `Cursor` — (book, chapter) position carried across days |
//! | [`describe`]  | `describe` — one day's range text                    |
//! | [`render`]    | `render`, `Schedule`, `DayEntry`                     |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                 |
//!
//! # Walk model (summary)
//!
//! ```text
//! cursor = (book 0, chapter 1)
//! for each day quota q:
//!     text   = describe(books, cursor, q)       e.g. "Genesis 48-50; Exodus 1-2"
//!     cursor = cursor + q chapters, rolling over book ends
//! ```
//!
//! Books are consumed strictly in order and never revisited.

pub mod cursor;
pub mod describe;
pub mod error;
pub mod render;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use describe::describe;
pub use error::{ScheduleError, ScheduleResult};
pub use render::{DayEntry, Schedule, render};
