//! Unit tests for rp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BookIndex, DayIndex};

    #[test]
    fn index_roundtrip() {
        let id = BookIndex(42);
        assert_eq!(id.index(), 42);
        assert_eq!(BookIndex::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn next_and_ordering() {
        assert_eq!(DayIndex(0).next(), DayIndex(1));
        assert!(BookIndex(3) < BookIndex(4));
    }

    #[test]
    fn display() {
        assert_eq!(BookIndex(7).to_string(), "BookIndex(7)");
        assert_eq!(DayIndex(0).to_string(), "DayIndex(0)");
    }
}

#[cfg(test)]
mod book {
    use crate::{Book, CoreError, total_chapters, total_verses};

    #[test]
    fn try_new_rejects_empty_book() {
        let err = Book::try_new("Nothing", 0, 0).unwrap_err();
        assert!(matches!(err, CoreError::EmptyBook(ref n) if n == "Nothing"));
    }

    #[test]
    fn totals() {
        let books = vec![
            Book::new("Ruth", 4).with_verses(85),
            Book::new("Jonah", 4).with_verses(48),
            Book::new("Jude", 1).with_verses(25),
        ];
        assert_eq!(total_chapters(&books), 9);
        assert_eq!(total_verses(&books), 158);
    }
}

#[cfg(test)]
mod date {
    use crate::{CoreError, PlanDate};

    #[test]
    fn parse_config_format() {
        let d = PlanDate::parse_config("Jan-01-2022").unwrap();
        assert_eq!(d, PlanDate::from_ymd(2022, 1, 1).unwrap());
    }

    #[test]
    fn parse_rejects_wrong_format() {
        let err = PlanDate::parse_config("2022-01-01").unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { .. }));
    }

    #[test]
    fn succ_crosses_month_and_leap_day() {
        let d = PlanDate::from_ymd(2024, 2, 28).unwrap();
        assert_eq!(d.succ().unwrap(), PlanDate::from_ymd(2024, 2, 29).unwrap());
        let d = PlanDate::from_ymd(2023, 12, 31).unwrap();
        assert_eq!(d.succ().unwrap(), PlanDate::from_ymd(2024, 1, 1).unwrap());
    }

    #[test]
    fn output_format_is_zero_padded() {
        let d = PlanDate::from_ymd(2022, 3, 7).unwrap();
        assert_eq!(d.to_output_string(), "03/07/2022");
        assert_eq!(d.to_string(), "03/07/2022");
    }
}
