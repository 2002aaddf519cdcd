//! Year-month values (`YYYY-MM`) for report filtering.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A calendar year and month, the granularity reports filter on.
///
/// Serializes as the `YYYY-MM` string the stored filter state and employee
/// month assignments use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

/// Error parsing a `YYYY-MM` string.
#[derive(Debug, Clone, Error)]
#[error("invalid year-month (expected YYYY-MM): {0}")]
pub struct ParseYearMonthError(String);

impl YearMonth {
    /// Creates a year-month; `month` must be 1-12.
    ///
    /// # Errors
    ///
    /// Returns `ParseYearMonthError` when the month is out of range.
    pub fn new(year: i32, month: u32) -> Result<Self, ParseYearMonthError> {
        if !(1..=12).contains(&month) {
            return Err(ParseYearMonthError(format!("{year}-{month}")));
        }
        Ok(Self { year, month })
    }

    /// The calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::str::FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseYearMonthError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        Self::new(year, month).map_err(|_| err())
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ParseYearMonthError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let ym: YearMonth = "2024-01".parse().unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 1);
        assert_eq!(ym.to_string(), "2024-01");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("2024".parse::<YearMonth>().is_err());
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("2024-00".parse::<YearMonth>().is_err());
        assert!("abcd-ef".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(YearMonth::from(date).to_string(), "2024-02");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a: YearMonth = "2023-12".parse().unwrap();
        let b: YearMonth = "2024-01".parse().unwrap();
        assert!(a < b);
    }
}
