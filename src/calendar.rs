use chrono::{Datelike, NaiveDate};

use crate::entities::bus_day::Weekday;
use crate::error::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` date string and derive the weekday the bus
/// schedule is checked against.
pub fn resolve(date_str: &str) -> AppResult<(NaiveDate, Weekday)> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDateFormat)?;

    Ok((date, Weekday::from(date.weekday())))
}

/// Validate an out-of-band day name against the closed weekday set.
pub fn parse_day_name(name: &str) -> AppResult<Weekday> {
    Weekday::from_name(name).ok_or(AppError::InvalidDay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_weekday_from_date() {
        let (date, day) = resolve("2024-06-03").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(day, Weekday::Monday);

        let (_, day) = resolve("2024-06-09").unwrap();
        assert_eq!(day, Weekday::Sunday);
    }

    #[test]
    fn rejects_unparseable_dates() {
        for input in ["", "not-a-date", "2024-13-01", "03-06-2024", "2024/06/03"] {
            assert!(matches!(resolve(input), Err(AppError::InvalidDateFormat)));
        }
    }

    #[test]
    fn day_names_are_case_sensitive_and_closed() {
        assert_eq!(parse_day_name("Monday").unwrap(), Weekday::Monday);
        assert!(matches!(parse_day_name("monday"), Err(AppError::InvalidDay)));
        assert!(matches!(parse_day_name("Funday"), Err(AppError::InvalidDay)));
    }
}
