//! `rp-plan` — assemble a complete reading plan.
//!
//! # Pipeline
//!
//! ```text
//! books ──► total = Σ chapters
//!             │
//!             ▼
//!   partition(total, days)      Infeasible → one chapter a day for `total` days
//!             │
//!             ▼
//!   render(books, quotas, start, advance_calendar)
//!             │
//!             ▼
//!           Plan                day entries + totals + per-day averages
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rp_plan::PlanBuilder;
//!
//! let plan = PlanBuilder::new(books)
//!     .days(365)
//!     .start(PlanDate::parse_config("Jan-01-2022")?)
//!     .build()?;
//! for day in plan.days() {
//!     println!("{} {}", day.date, day.text);
//! }
//! ```

pub mod builder;
pub mod error;
pub mod plan;

#[cfg(test)]
mod tests;

pub use builder::PlanBuilder;
pub use error::{PlanError, PlanResult};
pub use plan::{Plan, PlanStats};
