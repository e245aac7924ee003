use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rp_core::PlanDate;
use serde::Deserialize;
use serde_json::Value;

/// A reading-plan request.
///
/// ```json
/// {
///   "books": ["Genesis", "Exodus"],
///   "duration": 30,
///   "start": "Jan-01-2022"
/// }
/// ```
///
/// Without both `duration` and `start` only totals are reported.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    /// Book names, resolved against the bundled canon.
    #[serde(default)]
    pub books: Vec<String>,

    /// CSV book list (`name,chapters,verses`) used instead of `books`.
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Number of days the plan should take.
    #[serde(default)]
    pub duration: Option<u32>,

    /// Date of the first day, e.g. `Jan-01-2022`.
    #[serde(default)]
    pub start: Option<String>,

    /// Give each day its own date; when `false` every day carries `start`.
    #[serde(default = "default_true")]
    pub advance_calendar: bool,
}

fn default_true() -> bool {
    true
}

impl PlanConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse a config object.  A JSON string whose content is itself a config
    /// object is accepted too, as submitted by web form posts.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let config: Self = match value {
            Value::String(inner) => serde_json::from_str(&inner)?,
            other => serde_json::from_value(other)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.books.is_empty() && self.catalog.is_none() {
            bail!("config must name \"books\" or a \"catalog\" file");
        }
        if !self.books.is_empty() && self.catalog.is_some() {
            bail!("config may name \"books\" or a \"catalog\" file, not both");
        }
        Ok(())
    }

    /// The parsed start date, if one is configured.
    pub fn start_date(&self) -> Result<Option<PlanDate>> {
        self.start
            .as_deref()
            .map(PlanDate::parse_config)
            .transpose()
            .context("invalid \"start\" date")
    }
}
