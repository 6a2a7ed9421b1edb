//! Display formatting for dates. Inputs and the API use ISO `YYYY-MM-DD`;
//! tables show `DD/MM/YYYY`.
use chrono::{DateTime, Local, NaiveDate, Utc};
use contracts::shared::dates::{format_date as iso_date, parse_date};

pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Open end of a range renders as "Indefinido"
pub fn format_date_opt(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "Indefinido".to_string())
}

/// Timestamps are shown in the browser's local time
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

pub fn format_datetime_opt(value: Option<DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// Value for `<input type="date">`
pub fn to_input(date: Option<NaiveDate>) -> String {
    date.map(iso_date).unwrap_or_default()
}

/// Empty or malformed input means no date
pub fn from_input(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}

/// "Período": "01/03/2024 - Indefinido"
pub fn format_period(start: NaiveDate, end: Option<NaiveDate>) -> String {
    format!("{} - {}", format_date(start), format_date_opt(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_for_tables() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(d), "05/03/2024");
        assert_eq!(format_date_opt(None), "Indefinido");
        assert_eq!(format_period(d, None), "05/03/2024 - Indefinido");
    }

    #[test]
    fn input_round_trip() {
        assert_eq!(to_input(None), "");
        assert_eq!(from_input(""), None);
        assert_eq!(
            to_input(from_input("2024-12-31")),
            "2024-12-31".to_string()
        );
    }
}
