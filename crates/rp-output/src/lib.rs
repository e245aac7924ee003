//! `rp-output` — writers for rendered reading plans.
//!
//! | Feature   | Backend     | Output                                   |
//! |-----------|-------------|------------------------------------------|
//! | *(none)*  | CSV         | `date,reading` rows, no header           |
//! | `sqlite`  | SQLite      | `plan_days` table                        |
//!
//! Both backends implement [`PlanWriter`].  [`write_plan`] feeds a whole
//! [`rp_plan::Plan`] to any of them; [`PlanSummary`] is the JSON report.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rp_output::{CsvWriter, write_plan};
//!
//! let mut writer = CsvWriter::create(Path::new("reading_plan.csv"))?;
//! write_plan(&mut writer, &plan)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod summary;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::{CsvWriter, plan_to_csv_string};
pub use error::{OutputError, OutputResult};
pub use row::DayRow;
pub use summary::PlanSummary;
pub use writer::{PlanWriter, write_plan};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
