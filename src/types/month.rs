//! The calendar month a request is made for.

use crate::error::HkWeatherError;
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A validated calendar month: year first, month number (1-12) second.
///
/// Construct it with [`Month::new`], which rejects month numbers outside `1..=12` and
/// years chrono cannot represent.
///
/// # Examples
///
/// ```
/// use hk_weather::Month;
///
/// let august = Month::new(2024, 8).unwrap();
/// assert_eq!(august.to_string(), "2024-08");
/// assert_eq!(august.last_day().to_string(), "2024-08-31");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month {
    first_day: NaiveDate,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, HkWeatherError> {
        // The following month must exist as well, otherwise the last day cannot be computed.
        match (
            NaiveDate::from_ymd_opt(year, month, 1),
            days_in_month(year, month),
        ) {
            (Some(first_day), Some(_)) => Ok(Self { first_day }),
            _ => Err(HkWeatherError::InvalidMonth { year, month }),
        }
    }

    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    pub fn month(self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(self) -> NaiveDate {
        // `new` guarantees the month has a last day.
        days_in_month(self.year(), self.month())
            .and_then(|days| self.first_day.with_day(days))
            .unwrap_or(self.first_day)
    }

    /// Whether `date` falls within this calendar month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_month_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_day_of_next_month = NaiveDate::from_ymd_opt(next_month_year, next_month, 1)?;
    let last_day_of_current_month = first_day_of_next_month - Duration::days(1);
    Some(last_day_of_current_month.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let feb_leap = Month::new(2024, 2).unwrap();
        assert_eq!(feb_leap.first_day(), date(2024, 2, 1));
        assert_eq!(feb_leap.last_day(), date(2024, 2, 29));

        let feb = Month::new(2023, 2).unwrap();
        assert_eq!(feb.last_day(), date(2023, 2, 28));
    }

    #[test]
    fn test_december_rolls_over() {
        let december = Month::new(2023, 12).unwrap();
        assert_eq!(december.first_day(), date(2023, 12, 1));
        assert_eq!(december.last_day(), date(2023, 12, 31));
        assert_eq!(days_in_month(2023, 12), Some(31));
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        for month in [0, 13, 99] {
            match Month::new(2024, month) {
                Err(HkWeatherError::InvalidMonth { year, month: m }) => {
                    assert_eq!(year, 2024);
                    assert_eq!(m, month);
                }
                other => panic!("expected InvalidMonth for {}, got {:?}", month, other),
            }
        }
        assert!(Month::new(i32::MAX, 6).is_err());
    }

    #[test]
    fn test_contains() {
        let august = Month::new(2024, 8).unwrap();
        assert!(august.contains(date(2024, 8, 1)));
        assert!(august.contains(date(2024, 8, 31)));
        assert!(!august.contains(date(2024, 9, 1)));
        assert!(!august.contains(date(2023, 8, 15)));
    }
}
