//! `rp-core` — foundational types for the `readplan` workspace.
//!
//! Every other `rp-*` crate depends on this one.  It has no `rp-*`
//! dependencies and only two external ones (`chrono` and `thiserror`).
//!
//! # What lives here
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`ids`]    | `BookIndex`, `DayIndex`                    |
//! | [`book`]   | `Book` — one named, chapter-bounded container |
//! | [`date`]   | `PlanDate` and the plan's date formats     |
//! | [`error`]  | `CoreError`, `CoreResult`                  |

pub mod book;
pub mod date;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use book::{Book, total_chapters, total_verses};
pub use date::{CONFIG_DATE_FORMAT, OUTPUT_DATE_FORMAT, PlanDate};
pub use error::{CoreError, CoreResult};
pub use ids::{BookIndex, DayIndex};
