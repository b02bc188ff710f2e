//! Hong Kong Observatory open data: a daily temperature table and a daily rainfall
//! table, joined by date.

use crate::sources::outcome::SourceOutcome;
use crate::tabular::fetcher::TabularFetcher;
use crate::tabular::record::RawRecord;
use crate::tabular::resolver::{resolve_date, resolve_number};
use crate::types::daily_observation::DailyObservation;
use crate::types::month::Month;
use crate::types::weather_category::WeatherCategory;
use chrono::NaiveDate;
use log::{info, warn};
use std::collections::BTreeMap;

const MEAN_COLUMNS: [&str; 4] = ["daily mean", "mean(°c)", "mean", "avg"];
const MAX_COLUMNS: [&str; 2] = ["daily max", "max"];
const MIN_COLUMNS: [&str; 2] = ["daily min", "min"];
const RAINFALL_COLUMNS: [&str; 3] = ["rainfall", "rain", "(mm)"];

#[derive(Debug, Clone)]
pub struct PrimarySource {
    fetcher: TabularFetcher,
    temperature_url: String,
    rainfall_url: String,
}

impl PrimarySource {
    pub fn new(fetcher: TabularFetcher, temperature_url: String, rainfall_url: String) -> Self {
        Self {
            fetcher,
            temperature_url,
            rainfall_url,
        }
    }

    /// Fetches both tables concurrently and joins them for `month`.
    ///
    /// A failure of either table is a `TransportFailure`; a month without a single usable
    /// temperature row is `Empty`.
    pub async fn fetch_month(&self, month: Month) -> SourceOutcome {
        let (temperature, rainfall) = tokio::join!(
            self.fetcher.fetch(&self.temperature_url),
            self.fetcher.fetch(&self.rainfall_url)
        );
        let (temperature_rows, rainfall_rows) = match (temperature, rainfall) {
            (Ok(t), Ok(r)) => (t, r),
            (Err(e), _) | (_, Err(e)) => {
                warn!("Primary source unavailable for {}: {}", month, e);
                return SourceOutcome::TransportFailure(e);
            }
        };
        info!(
            "Primary source returned {} temperature rows and {} rainfall rows",
            temperature_rows.len(),
            rainfall_rows.len()
        );

        SourceOutcome::from_observations(join_month(&temperature_rows, &rainfall_rows, month))
    }
}

/// Builds one observation per in-month day of the temperature table, classifying it by
/// that day's rainfall (0.0 mm when the rainfall table has no usable value).
pub(crate) fn join_month(
    temperature_rows: &[RawRecord],
    rainfall_rows: &[RawRecord],
    month: Month,
) -> Vec<DailyObservation> {
    let temperatures: BTreeMap<NaiveDate, f64> = temperature_rows
        .iter()
        .filter_map(|row| {
            let date = resolve_date(row).filter(|date| month.contains(*date))?;
            Some((date, mean_temperature(row)?))
        })
        .collect();

    let rainfall: BTreeMap<NaiveDate, f64> = rainfall_rows
        .iter()
        .filter_map(|row| {
            let date = resolve_date(row).filter(|date| month.contains(*date))?;
            Some((date, resolve_number(row, &RAINFALL_COLUMNS).unwrap_or(0.0)))
        })
        .collect();

    info!(
        "Primary source matched {} temperature days and {} rainfall days for {}",
        temperatures.len(),
        rainfall.len(),
        month
    );

    temperatures
        .into_iter()
        .map(|(date, mean)| {
            let precipitation = rainfall.get(&date).copied().unwrap_or(0.0);
            DailyObservation::new(date, mean, WeatherCategory::from_precipitation(precipitation))
        })
        .collect()
}

/// The reported daily mean, or the midpoint of max and min when no mean column resolves.
fn mean_temperature(row: &RawRecord) -> Option<f64> {
    resolve_number(row, &MEAN_COLUMNS).or_else(|| {
        let max = resolve_number(row, &MAX_COLUMNS)?;
        let min = resolve_number(row, &MIN_COLUMNS)?;
        Some((max + min) / 2.0)
    })
}
