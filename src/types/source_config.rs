//! Endpoints, station coordinates and network limits used by [`crate::HkWeather`].

use bon::Builder;
use std::time::Duration;

/// Daily mean/max/min temperature table published by the Hong Kong Observatory.
pub const HKO_TEMPERATURE_URL: &str =
    "https://data.weather.gov.hk/weatherAPI/opendata/opendata.php?dataType=CLMTEMP&rformat=csv&station=HKO";
/// Daily rainfall table published by the Hong Kong Observatory.
pub const HKO_RAINFALL_URL: &str =
    "https://data.weather.gov.hk/weatherAPI/opendata/opendata.php?dataType=CLMRN&rformat=csv&station=HKO";
/// Open-Meteo daily forecast/archive endpoint, queried by date range.
pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const HONG_KONG: LatLon = LatLon(22.3, 114.2);
pub const HONG_KONG_TIMEZONE: &str = "Asia/Hong_Kong";
/// Upper bound for every single HTTP request, connection included.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use hk_weather::LatLon;
///
/// let observatory = LatLon(22.302, 114.174);
/// assert_eq!(observatory.0, 22.302); // Latitude
/// assert_eq!(observatory.1, 114.174); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// Where and how the two data sources are queried.
///
/// Every field has a default pointing at the real Hong Kong endpoints, so the builder
/// only needs the values you want to change.
///
/// # Examples
///
/// ```
/// use hk_weather::{LatLon, SourceConfig};
/// use std::time::Duration;
///
/// let config = SourceConfig::builder()
///     .fallback_url("http://localhost:8080/v1/forecast")
///     .location(LatLon(22.28, 114.16))
///     .timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// assert_eq!(config.timezone, "Asia/Hong_Kong");
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct SourceConfig {
    /// Primary temperature table (header-first CSV).
    #[builder(into, default = HKO_TEMPERATURE_URL.to_string())]
    pub temperature_url: String,

    /// Primary rainfall table (header-first CSV).
    #[builder(into, default = HKO_RAINFALL_URL.to_string())]
    pub rainfall_url: String,

    /// Secondary provider queried when the primary source has nothing for the month.
    #[builder(into, default = OPEN_METEO_URL.to_string())]
    pub fallback_url: String,

    #[builder(default = HONG_KONG)]
    pub location: LatLon,

    /// IANA timezone the secondary provider aggregates daily values in.
    #[builder(into, default = HONG_KONG_TIMEZONE.to_string())]
    pub timezone: String,

    #[builder(default = Duration::from_secs(DEFAULT_TIMEOUT_SECS))]
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
