use crate::types::weather_category::WeatherCategory;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of weather: the date, its mean temperature and a coarse category.
///
/// Every sequence handed out by [`crate::HkWeather::fetch_month`] is sorted by `date`,
/// holds one entry per date, and stays inside the requested month.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    /// Degrees Celsius.
    pub mean_temperature: f64,
    pub category: WeatherCategory,
}

impl DailyObservation {
    pub fn new(date: NaiveDate, mean_temperature: f64, category: WeatherCategory) -> Self {
        Self {
            date,
            mean_temperature,
            category,
        }
    }

    /// Day of the month, starting at 1.
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}
