//! Unit tests for rp-plan.

use rp_core::{Book, PlanDate};
use rp_partition::GroupedInterleave;

use crate::{PlanBuilder, PlanError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn jan1() -> PlanDate {
    PlanDate::from_ymd(2022, 1, 1).unwrap()
}

/// Ruth (4), Jonah (4), Jude (1): 9 chapters, 158 verses.
fn small_books() -> Vec<Book> {
    vec![
        Book::new("Ruth", 4).with_verses(85),
        Book::new("Jonah", 4).with_verses(48),
        Book::new("Jude", 1).with_verses(25),
    ]
}

fn texts(plan: &crate::Plan) -> Vec<&str> {
    plan.days().iter().map(|d| d.text.as_str()).collect()
}

// ── Building ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod build {
    use super::*;

    #[test]
    fn three_day_plan() {
        let plan = PlanBuilder::new(small_books()).days(3).start(jan1()).build().unwrap();
        assert_eq!(plan.quotas(), [3, 3, 3]);
        assert_eq!(texts(&plan), ["Ruth 1-3", "Ruth 4; Jonah 1-2", "Jonah 3-4; Jude 1"]);
        assert!(!plan.degraded());
        assert_eq!(plan.end_date(), PlanDate::from_ymd(2022, 1, 3));
    }

    #[test]
    fn uneven_plan_uses_gcd_interleave() {
        // 9 over 4: base 2, one day of 3 → [2, 3, 2, 2]
        let plan = PlanBuilder::new(small_books()).days(4).start(jan1()).build().unwrap();
        assert_eq!(plan.quotas(), [2, 3, 2, 2]);
        assert_eq!(
            texts(&plan),
            ["Ruth 1-2", "Ruth 3-4; Jonah 1", "Jonah 2-3", "Jonah 4; Jude 1"]
        );
    }

    #[test]
    fn custom_interleave() {
        let plan = PlanBuilder::new(small_books())
            .days(4)
            .start(jan1())
            .interleave(GroupedInterleave)
            .build()
            .unwrap();
        assert_eq!(plan.quotas(), [2, 2, 2, 3]);
    }

    #[test]
    fn calendar_can_be_held() {
        let plan = PlanBuilder::new(small_books())
            .days(3)
            .start(jan1())
            .advance_calendar(false)
            .build()
            .unwrap();
        assert!(plan.days().iter().all(|d| d.date == jan1()));
    }

    #[test]
    fn more_days_than_chapters_degrades() {
        let plan = PlanBuilder::new(small_books()).days(30).start(jan1()).build().unwrap();
        assert!(plan.degraded());
        assert_eq!(plan.days().len(), 9);
        assert_eq!(plan.requested_days(), 30);
        assert!(plan.quotas().iter().all(|&q| q == 1));
        assert_eq!(plan.days()[8].text, "Jude 1");
    }

    #[test]
    fn missing_inputs() {
        let err = PlanBuilder::new(small_books()).start(jan1()).build().unwrap_err();
        assert!(matches!(err, PlanError::Config(_)));
        let err = PlanBuilder::new(small_books()).days(3).build().unwrap_err();
        assert!(matches!(err, PlanError::Config(_)));
        let err = PlanBuilder::new(Vec::new()).days(3).start(jan1()).build().unwrap_err();
        assert!(matches!(err, PlanError::NoBooks));
    }

    #[test]
    fn zero_days_rejected() {
        let err = PlanBuilder::new(small_books()).days(0).start(jan1()).build().unwrap_err();
        assert!(matches!(err, PlanError::Partition(rp_partition::PartitionError::ZeroParts)));
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use super::*;

    #[test]
    fn totals_and_averages() {
        let plan = PlanBuilder::new(small_books()).days(2).start(jan1()).build().unwrap();
        assert_eq!(plan.total_chapters(), 9);
        assert_eq!(plan.total_verses(), 158);
        assert!((plan.chapters_per_day() - 4.5).abs() < 1e-12);
        assert!((plan.verses_per_day() - 79.0).abs() < 1e-12);
    }

    #[test]
    fn averages_use_requested_days_when_degraded() {
        let plan = PlanBuilder::new(small_books()).days(18).start(jan1()).build().unwrap();
        assert!(plan.degraded());
        assert!((plan.chapters_per_day() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn stats_without_scheduling() {
        let stats = PlanBuilder::new(small_books()).stats();
        assert_eq!(stats.chapters, 9);
        assert_eq!(stats.verses, 158);
    }
}
