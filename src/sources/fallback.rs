//! Open-Meteo daily series, queried by date range for a fixed location.

use crate::sources::error::SourceError;
use crate::sources::http::download;
use crate::sources::outcome::SourceOutcome;
use crate::types::daily_observation::DailyObservation;
use crate::types::month::Month;
use crate::types::source_config::LatLon;
use crate::types::weather_category::WeatherCategory;
use chrono::NaiveDate;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode";

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    daily: Option<DailySeries>,
    /// Set by Open-Meteo together with `"error": true`.
    #[serde(default)]
    reason: Option<String>,
}

/// Parallel arrays, one entry per day.
#[derive(Debug, Deserialize)]
struct DailySeries {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
    #[serde(default, alias = "weather_code")]
    weathercode: Vec<Option<i64>>,
}

#[derive(Debug, Clone)]
pub struct FallbackSource {
    client: Client,
    url: String,
    location: LatLon,
    timezone: String,
}

impl FallbackSource {
    pub fn new(client: Client, url: String, location: LatLon, timezone: String) -> Self {
        Self {
            client,
            url,
            location,
            timezone,
        }
    }

    /// Requests every day of `month` in a single call.
    ///
    /// A response without a `daily` object is `Empty`, not an error.
    pub async fn fetch_month(&self, month: Month) -> SourceOutcome {
        let response = match self.request(month).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Fallback source unavailable for {}: {}", month, e);
                return SourceOutcome::TransportFailure(e);
            }
        };

        match observations_from_response(response, month) {
            Some(observations) => {
                info!("Fallback source returned {} days for {}", observations.len(), month);
                SourceOutcome::from_observations(observations)
            }
            None => SourceOutcome::Empty,
        }
    }

    async fn request(&self, month: Month) -> Result<ForecastResponse, SourceError> {
        let start_date = month.first_day().format("%Y-%m-%d").to_string();
        let end_date = month.last_day().format("%Y-%m-%d").to_string();
        let request = self.client.get(&self.url).query(&[
            ("latitude", self.location.0.to_string()),
            ("longitude", self.location.1.to_string()),
            ("start_date", start_date),
            ("end_date", end_date),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", self.timezone.clone()),
        ]);
        info!("Requesting fallback data for {} from {}", month, self.url);

        let body = download(request, &self.url).await?;
        serde_json::from_slice(&body).map_err(|e| SourceError::JsonDecode(self.url.clone(), e))
    }
}

/// Converts the daily series into observations, or `None` when the series is missing.
///
/// Days without both a max and a min temperature, with an unreadable date, or outside
/// `month` are dropped.
pub(crate) fn observations_from_response(
    response: ForecastResponse,
    month: Month,
) -> Option<Vec<DailyObservation>> {
    let Some(daily) = response.daily else {
        warn!(
            "Fallback source returned no daily data for {}: {}",
            month,
            response.reason.as_deref().unwrap_or("no reason given")
        );
        return None;
    };

    let mut days = BTreeMap::new();
    for (i, raw_date) in daily.time.iter().enumerate() {
        let Ok(date) = NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d") else {
            debug!("Skipping unreadable fallback date {:?}", raw_date);
            continue;
        };
        if !month.contains(date) {
            debug!("Skipping fallback day {} outside {}", date, month);
            continue;
        }
        let max = daily.temperature_2m_max.get(i).copied().flatten();
        let min = daily.temperature_2m_min.get(i).copied().flatten();
        let (Some(max), Some(min)) = (max, min) else {
            debug!("Skipping fallback day {} without max/min temperature", date);
            continue;
        };
        let category = WeatherCategory::from_daily_summary(
            daily.precipitation_sum.get(i).copied().flatten(),
            daily.weathercode.get(i).copied().flatten(),
        );
        days.insert(date, DailyObservation::new(date, (max + min) / 2.0, category));
    }

    Some(days.into_values().collect())
}
