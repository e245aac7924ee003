//! Calendar dates attached to plan days.
//!
//! The scheduler only ever needs "the day after", so `PlanDate` is a thin
//! wrapper over `chrono::NaiveDate` that exposes that step plus the two text
//! formats the plan uses:
//!
//! | Constant               | Example        | Used for                |
//! |------------------------|----------------|-------------------------|
//! | [`CONFIG_DATE_FORMAT`] | `Jan-01-2022`  | start date in configs   |
//! | [`OUTPUT_DATE_FORMAT`] | `01/01/2022`   | dates in rendered plans |

use std::fmt;

use chrono::{Days, NaiveDate};

use crate::{CoreError, CoreResult};

pub const CONFIG_DATE_FORMAT: &str = "%b-%d-%Y";
pub const OUTPUT_DATE_FORMAT: &str = "%m/%d/%Y";

/// A calendar day with no time-zone attached.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PlanDate(pub NaiveDate);

impl PlanDate {
    /// `None` if the components do not name a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a date in [`CONFIG_DATE_FORMAT`], e.g. `"Jan-01-2022"`.
    pub fn parse_config(input: &str) -> CoreResult<Self> {
        Self::parse(input, CONFIG_DATE_FORMAT)
    }

    pub fn parse(input: &str, format: &'static str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(input.trim(), format)
            .map(Self)
            .map_err(|source| CoreError::InvalidDate {
                input: input.to_owned(),
                format,
                source,
            })
    }

    /// The following calendar day.
    pub fn succ(self) -> CoreResult<Self> {
        self.0
            .checked_add_days(Days::new(1))
            .map(Self)
            .ok_or(CoreError::CalendarOverflow(self))
    }

    /// Render in [`OUTPUT_DATE_FORMAT`].
    pub fn to_output_string(self) -> String {
        self.0.format(OUTPUT_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for PlanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(OUTPUT_DATE_FORMAT))
    }
}

impl From<NaiveDate> for PlanDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}
