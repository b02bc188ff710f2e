//! This module provides the main entry point of the crate: [`HkWeather`], which fetches a
//! month of daily observations from the Hong Kong Observatory and falls back to
//! Open-Meteo when the observatory has nothing usable.

use crate::error::HkWeatherError;
use crate::sources::fallback::FallbackSource;
use crate::sources::outcome::SourceOutcome;
use crate::sources::primary::PrimarySource;
use crate::tabular::fetcher::TabularFetcher;
use crate::types::daily_observation::DailyObservation;
use crate::types::month::Month;
use crate::types::source_config::SourceConfig;
use log::{info, warn};
use reqwest::Client;

/// Which source produced an [`Acquisition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The Hong Kong Observatory tables had data for the month.
    Primary,
    /// The fallback provider was asked. Its answer may still be empty.
    Fallback,
}

/// The observations for one month together with the source they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Acquisition {
    pub origin: Origin,
    pub observations: Vec<DailyObservation>,
}

enum Stage {
    TryPrimary,
    Fallback,
}

/// The client for fetching a month of daily Hong Kong weather.
///
/// Holds one HTTP client, shared by both sources, and no other state: every call is
/// independent, so a single instance can serve concurrent requests.
///
/// # Examples
///
/// ```no_run
/// # use hk_weather::{HkWeather, HkWeatherError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), HkWeatherError> {
/// let client = HkWeather::new()?;
/// let august = client.fetch_month(2024, 8).await?;
/// for day in &august {
///     println!("{} {:.1}°C {}", day.date, day.mean_temperature, day.category);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HkWeather {
    primary: PrimarySource,
    fallback: FallbackSource,
}

impl HkWeather {
    /// Creates a client for the default Hong Kong endpoints with a 20 second timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HkWeatherError::HttpClient`] if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, HkWeatherError> {
        Self::with_config(SourceConfig::default())
    }

    /// Creates a client for custom endpoints, location or timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HkWeatherError::HttpClient`] if the HTTP client cannot be initialized.
    pub fn with_config(config: SourceConfig) -> Result<Self, HkWeatherError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(HkWeatherError::HttpClient)?;

        Ok(Self {
            primary: PrimarySource::new(
                TabularFetcher::new(client.clone()),
                config.temperature_url,
                config.rainfall_url,
            ),
            fallback: FallbackSource::new(
                client,
                config.fallback_url,
                config.location,
                config.timezone,
            ),
        })
    }

    /// Fetches every available day of `year`-`month`, sorted by date.
    ///
    /// Network failures and empty months never surface as errors. The result is simply
    /// empty when neither source had data.
    ///
    /// # Errors
    ///
    /// Returns [`HkWeatherError::InvalidMonth`] if `month` is not within `1..=12` or the
    /// year cannot be represented.
    pub async fn fetch_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<DailyObservation>, HkWeatherError> {
        Ok(self.acquire(year, month).await?.observations)
    }

    /// Like [`HkWeather::fetch_month`], but also reports which source answered.
    ///
    /// The primary source is tried exactly once. Any transport failure or an empty month
    /// moves on to the fallback source, whose answer is returned as is, empty or not.
    ///
    /// # Errors
    ///
    /// Returns [`HkWeatherError::InvalidMonth`] for an invalid year/month.
    pub async fn acquire(&self, year: i32, month: u32) -> Result<Acquisition, HkWeatherError> {
        let month = Month::new(year, month)?;

        let mut stage = Stage::TryPrimary;
        loop {
            stage = match stage {
                Stage::TryPrimary => match self.primary.fetch_month(month).await {
                    SourceOutcome::Success(observations) => {
                        info!("Primary source returned {} days for {}", observations.len(), month);
                        return Ok(Acquisition {
                            origin: Origin::Primary,
                            observations,
                        });
                    }
                    SourceOutcome::Empty => {
                        info!("Primary source has no rows for {}, using fallback", month);
                        Stage::Fallback
                    }
                    SourceOutcome::TransportFailure(e) => {
                        warn!("Primary source failed for {} ({}), using fallback", month, e);
                        Stage::Fallback
                    }
                },
                Stage::Fallback => {
                    let observations = self.fallback.fetch_month(month).await.into_observations();
                    if observations.is_empty() {
                        warn!("No data available for {} from either source", month);
                    }
                    return Ok(Acquisition {
                        origin: Origin::Fallback,
                        observations,
                    });
                }
            };
        }
    }
}
