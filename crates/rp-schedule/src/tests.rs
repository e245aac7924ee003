//! Unit tests for rp-schedule.

use rp_core::{Book, BookIndex, DayIndex, PlanDate};

use crate::{Cursor, ScheduleError, describe, render};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Alpha (5 chapters), Beta (3 chapters).
fn alpha_beta() -> Vec<Book> {
    vec![Book::new("Alpha", 5), Book::new("Beta", 3)]
}

/// A, Z, B where Z has no chapters; built as a literal since `Book::try_new`
/// refuses it.
fn with_empty_book() -> Vec<Book> {
    vec![
        Book::new("A", 2),
        Book { name: "Z".into(), chapters: 0, verses: 0 },
        Book::new("B", 2),
    ]
}

fn jan1() -> PlanDate {
    PlanDate::from_ymd(2022, 1, 1).unwrap()
}

fn at(book: u32, chapter: u32) -> Cursor {
    Cursor { book: BookIndex(book), chapter }
}

fn texts(books: &[Book], quotas: &[u32]) -> Vec<String> {
    render(books, quotas, jan1(), true)
        .unwrap()
        .into_days()
        .into_iter()
        .map(|d| d.text)
        .collect()
}

// ── describe ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod describe_text {
    use super::*;

    #[test]
    fn single_chapter_has_no_dash() {
        assert_eq!(describe(&alpha_beta(), Cursor::START, 1).unwrap(), "Alpha 1");
    }

    #[test]
    fn run_inside_one_book() {
        assert_eq!(describe(&alpha_beta(), at(0, 2), 3).unwrap(), "Alpha 2-4");
    }

    #[test]
    fn ending_on_last_chapter_does_not_roll_over() {
        assert_eq!(describe(&alpha_beta(), at(0, 3), 3).unwrap(), "Alpha 3-5");
        assert_eq!(describe(&alpha_beta(), at(0, 5), 1).unwrap(), "Alpha 5");
    }

    #[test]
    fn rolls_into_next_book() {
        assert_eq!(describe(&alpha_beta(), at(0, 4), 3).unwrap(), "Alpha 4-5; Beta 1");
        assert_eq!(describe(&alpha_beta(), at(0, 4), 4).unwrap(), "Alpha 4-5; Beta 1-2");
    }

    #[test]
    fn last_chapter_alone_before_rollover() {
        assert_eq!(describe(&alpha_beta(), at(0, 5), 2).unwrap(), "Alpha 5; Beta 1");
    }

    #[test]
    fn spans_several_books() {
        let books = vec![
            Book::new("Obadiah", 1),
            Book::new("Jonah", 4),
            Book::new("Philemon", 1),
            Book::new("Jude", 1),
            Book::new("Ruth", 4),
        ];
        assert_eq!(
            describe(&books, Cursor::START, 9).unwrap(),
            "Obadiah 1; Jonah 1-4; Philemon 1; Jude 1; Ruth 1-2"
        );
    }

    #[test]
    fn cursor_is_not_moved() {
        let cursor = at(0, 4);
        let _ = describe(&alpha_beta(), cursor, 3).unwrap();
        assert_eq!(cursor, at(0, 4));
    }

    #[test]
    fn running_out_of_books() {
        let err = describe(&alpha_beta(), at(1, 2), 5).unwrap_err();
        assert!(matches!(err, ScheduleError::PastLastBook { book: BookIndex(2) }));
    }

    #[test]
    fn cursor_past_book_end_is_rejected() {
        let err = describe(&alpha_beta(), at(1, 4), 1).unwrap_err();
        assert!(matches!(err, ScheduleError::CursorOutOfRange { .. }));
    }

    #[test]
    fn walking_into_empty_book_is_rejected() {
        let err = describe(&with_empty_book(), Cursor::START, 4).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyBook { book: BookIndex(1) }));
    }
}

// ── Cursor ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cursor {
    use super::*;

    #[test]
    fn advance_within_book() {
        let mut c = Cursor::START;
        c.advance(&alpha_beta(), 3).unwrap();
        assert_eq!(c, at(0, 4));
    }

    #[test]
    fn advance_to_exact_end_moves_to_next_book() {
        let mut c = Cursor::START;
        c.advance(&alpha_beta(), 5).unwrap();
        assert_eq!(c, at(1, 1));
    }

    #[test]
    fn advance_across_several_books() {
        let books = vec![Book::new("A", 2), Book::new("B", 1), Book::new("C", 6)];
        let mut c = at(0, 2);
        c.advance(&books, 4).unwrap();
        assert_eq!(c, at(2, 3));
    }

    #[test]
    fn advance_off_the_end() {
        let mut c = at(1, 2);
        let err = c.advance(&alpha_beta(), 2).unwrap_err();
        assert!(matches!(err, ScheduleError::PastLastBook { book: BookIndex(2) }));
        // A failed advance leaves the cursor alone.
        assert_eq!(c, at(1, 2));
    }

    #[test]
    fn advance_into_empty_book() {
        let mut c = at(0, 2);
        let err = c.advance(&with_empty_book(), 1).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyBook { book: BookIndex(1) }));
        assert_eq!(c, at(0, 2));
    }
}

// ── render ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod render_plan {
    use super::*;

    #[test]
    fn alpha_beta_three_days() {
        let schedule = render(&alpha_beta(), &[4, 2, 2], jan1(), true).unwrap();
        let texts: Vec<&str> = schedule.days().iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, ["Alpha 1-4", "Alpha 5; Beta 1", "Beta 2-3"]);
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.chapters_read(), 8);
    }

    #[test]
    fn days_and_dates_advance() {
        let schedule = render(&alpha_beta(), &[4, 2, 2], jan1(), true).unwrap();
        let days = schedule.days();
        assert_eq!(days[0].day, DayIndex(0));
        assert_eq!(days[2].day, DayIndex(2));
        assert_eq!(days[1].date, PlanDate::from_ymd(2022, 1, 2).unwrap());
        assert_eq!(schedule.end_date(), PlanDate::from_ymd(2022, 1, 3));
        assert_eq!(days.iter().map(|d| d.chapters).collect::<Vec<_>>(), [4, 2, 2]);
    }

    #[test]
    fn calendar_held_when_not_advancing() {
        let schedule = render(&alpha_beta(), &[4, 2, 2], jan1(), false).unwrap();
        assert!(schedule.days().iter().all(|d| d.date == jan1()));
    }

    #[test]
    fn one_chapter_days() {
        assert_eq!(
            texts(&alpha_beta(), &[1; 8]),
            [
                "Alpha 1", "Alpha 2", "Alpha 3", "Alpha 4", "Alpha 5",
                "Beta 1", "Beta 2", "Beta 3",
            ]
        );
    }

    #[test]
    fn each_day_ends_on_a_book_boundary() {
        assert_eq!(texts(&alpha_beta(), &[5, 3]), ["Alpha 1-5", "Beta 1-3"]);
    }

    #[test]
    fn single_day_reads_everything() {
        assert_eq!(texts(&alpha_beta(), &[8]), ["Alpha 1-5; Beta 1-3"]);
    }

    #[test]
    fn partial_plan_leaves_chapters_unread() {
        let schedule = render(&alpha_beta(), &[2, 2], jan1(), true).unwrap();
        assert_eq!(schedule.chapters_read(), 4);
        assert_eq!(schedule.days()[1].text, "Alpha 3-4");
    }

    #[test]
    fn partitioned_quotas_cover_every_chapter() {
        let books = vec![
            Book::new("Genesis", 50),
            Book::new("Exodus", 40),
            Book::new("Leviticus", 27),
        ];
        let quotas = rp_partition::partition(117, 10).unwrap();
        let schedule = render(&books, &quotas, jan1(), true).unwrap();
        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule.chapters_read(), 117);
        // [11, 12, 11, 12, 11, 12, 12, 12, 12, 12]
        assert_eq!(schedule.days()[0].text, "Genesis 1-11");
        assert_eq!(schedule.days()[4].text, "Genesis 47-50; Exodus 1-7");
        assert_eq!(schedule.days()[9].text, "Leviticus 16-27");
    }

    #[test]
    fn rejects_overrun_before_rendering() {
        let err = render(&alpha_beta(), &[4, 4, 1], jan1(), true).unwrap_err();
        assert!(matches!(err, ScheduleError::Overrun { requested: 9, available: 8 }));
    }

    #[test]
    fn rejects_empty_inputs() {
        assert!(matches!(render(&[], &[1], jan1(), true), Err(ScheduleError::NoBooks)));
        assert!(matches!(render(&alpha_beta(), &[], jan1(), true), Err(ScheduleError::NoDays)));
    }

    #[test]
    fn rejects_zero_quota() {
        let err = render(&alpha_beta(), &[3, 0, 2], jan1(), true).unwrap_err();
        assert!(matches!(err, ScheduleError::ZeroQuota { day: DayIndex(1) }));
    }

    #[test]
    fn rejects_book_without_chapters() {
        let err = render(&with_empty_book(), &[4], jan1(), true).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyBook { book: BookIndex(1) }));
    }
}
