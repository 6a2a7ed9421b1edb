//! Date helpers shared by the date-ranged records (assignments, interest
//! configuration, holidays, payment schedules).

use chrono::{Datelike, Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD`; also accepts a full ISO timestamp and keeps the date part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Inclusive overlap of two ranges; `None` as end means open-ended.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: Option<NaiveDate>,
    b_start: NaiveDate,
    b_end: Option<NaiveDate>,
) -> bool {
    let a_before_b_ends = b_end.map_or(true, |end| a_start <= end);
    let b_before_a_ends = a_end.map_or(true, |end| b_start <= end);
    a_before_b_ends && b_before_a_ends
}

/// Same day of month `months` later, clamped to the last day of the target month.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total = date.month0() + months;
    let year = date.year() + (total / 12) as i32;
    let month = total % 12 + 1;
    let mut day = date.day();
    loop {
        if let Some(d) = NaiveDate::from_ymd_opt(year, month, day) {
            return d;
        }
        day -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn parses_plain_and_iso_dates() {
        assert_eq!(parse_date("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(
            parse_date("2024-03-15T14:02:26.123Z"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date("15/03/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn overlap_is_inclusive_and_handles_open_ends() {
        assert!(ranges_overlap(d("2024-01-01"), Some(d("2024-01-31")), d("2024-01-31"), None));
        assert!(!ranges_overlap(d("2024-01-01"), Some(d("2024-01-30")), d("2024-01-31"), None));
        assert!(ranges_overlap(d("2024-01-01"), None, d("2023-01-01"), None));
        assert!(!ranges_overlap(
            d("2024-02-01"),
            None,
            d("2024-01-01"),
            Some(d("2024-01-31"))
        ));
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(add_months(d("2024-01-31"), 1), d("2024-02-29"));
        assert_eq!(add_months(d("2023-01-31"), 1), d("2023-02-28"));
        assert_eq!(add_months(d("2024-11-15"), 3), d("2025-02-15"));
        assert_eq!(add_months(d("2024-05-10"), 0), d("2024-05-10"));
    }
}
