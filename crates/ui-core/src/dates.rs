// File: crates/ui-core/src/dates.rs
// Summary: Calendar month helpers on top of chrono::NaiveDate.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::CalendarError;

/// True when both dates fall in the same year and month.
#[inline]
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// First day of the month containing `d`.
#[inline]
pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    d - Days::new(u64::from(d.day0()))
}

/// Number of days in the month containing `d` (28..=31).
pub fn days_in_month(d: NaiveDate) -> u32 {
    let start = start_of_month(d);
    match start.checked_add_months(Months::new(1)) {
        Some(next) => (next - start).num_days() as u32,
        // only the last representable month has no successor, and it is a December
        None => 31,
    }
}

/// Shift `d` by `n` calendar months, clamping the day to the target month length.
/// Saturates at the representable date range.
pub fn add_months(d: NaiveDate, n: i32) -> NaiveDate {
    let shifted = if n >= 0 {
        d.checked_add_months(Months::new(n.unsigned_abs()))
    } else {
        d.checked_sub_months(Months::new(n.unsigned_abs()))
    };
    shifted.unwrap_or(d)
}

/// First day of `year`-`month`.
pub fn month_start(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidMonth { year, month })
}

/// Parse a `YYYY-MM` literal into the first day of that month.
pub fn parse_month(s: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidMonthLiteral(s.to_string());
    let (y, m) = s.trim().split_once('-').ok_or_else(invalid)?;
    let year = y.parse::<i32>().map_err(|_| invalid())?;
    let month = m.parse::<u32>().map_err(|_| invalid())?;
    month_start(year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths_follow_leap_rules() {
        assert_eq!(days_in_month(ymd(2024, 2, 10)), 29);
        assert_eq!(days_in_month(ymd(2023, 2, 10)), 28);
        assert_eq!(days_in_month(ymd(1900, 2, 1)), 28);
        assert_eq!(days_in_month(ymd(2000, 2, 1)), 29);
        assert_eq!(days_in_month(ymd(2024, 4, 30)), 30);
        assert_eq!(days_in_month(ymd(2024, 12, 31)), 31);
        assert_eq!(days_in_month(NaiveDate::MAX), 31);
    }

    #[test]
    fn start_of_month_keeps_year_and_month() {
        assert_eq!(start_of_month(ymd(2024, 3, 17)), ymd(2024, 3, 1));
        assert_eq!(start_of_month(ymd(2024, 3, 1)), ymd(2024, 3, 1));
    }

    #[test]
    fn add_months_clamps_day() {
        assert_eq!(add_months(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
        assert_eq!(add_months(ymd(2024, 3, 31), -1), ymd(2024, 2, 29));
        assert_eq!(add_months(ymd(2024, 12, 15), 1), ymd(2025, 1, 15));
        assert_eq!(add_months(ymd(2024, 1, 15), -1), ymd(2023, 12, 15));
    }

    #[test]
    fn same_month_ignores_day() {
        assert!(is_same_month(ymd(2024, 3, 1), ymd(2024, 3, 31)));
        assert!(!is_same_month(ymd(2024, 3, 1), ymd(2023, 3, 1)));
        assert!(!is_same_month(ymd(2024, 3, 31), ymd(2024, 4, 1)));
    }

    #[test]
    fn parse_month_literals() {
        assert_eq!(parse_month("2024-03"), Ok(ymd(2024, 3, 1)));
        assert_eq!(parse_month(" 1999-12 "), Ok(ymd(1999, 12, 1)));
        assert_eq!(parse_month("2024-13"), Err(CalendarError::InvalidMonth { year: 2024, month: 13 }));
        assert!(matches!(parse_month("march"), Err(CalendarError::InvalidMonthLiteral(_))));
    }
}
