//! JSON plan summary.
//!
//! ```json
//! {
//!   "chapters": 1189,
//!   "verses": 31102,
//!   "chapters_per_day": 3.2575342465753425,
//!   "verses_per_day": 85.2109589041096,
//!   "plan": "01/01/2022,Genesis 1-3\r\n..."
//! }
//! ```
//!
//! The per-day figures and `plan` are omitted when only totals were asked for.

use rp_plan::{Plan, PlanStats};
use serde::Serialize;

use crate::{OutputResult, plan_to_csv_string};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub chapters: u64,
    pub verses:   u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verses_per_day:   Option<f64>,
    /// The plan as CSV text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl PlanSummary {
    /// Totals only.
    pub fn from_stats(stats: PlanStats) -> Self {
        Self {
            chapters:         stats.chapters,
            verses:           stats.verses,
            chapters_per_day: None,
            verses_per_day:   None,
            plan:             None,
        }
    }

    /// Totals, per-day averages, and the CSV text of `plan`.
    pub fn from_plan(plan: &Plan) -> OutputResult<Self> {
        Ok(Self {
            chapters_per_day: Some(plan.chapters_per_day()),
            verses_per_day:   Some(plan.verses_per_day()),
            plan:             Some(plan_to_csv_string(plan)?),
            ..Self::from_stats(plan.stats())
        })
    }

    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
