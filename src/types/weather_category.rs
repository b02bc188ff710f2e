//! Defines the `WeatherCategory` enum and the rules that derive it from precipitation
//! totals and WMO weather codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Daily precipitation (mm) above which a day counts as rainy.
pub const RAINY_THRESHOLD_MM: f64 = 0.5;
/// Daily precipitation (mm) above which a dry-looking day counts as cloudy.
pub const CLOUDY_THRESHOLD_MM: f64 = 0.0;

/// WMO weather codes reported as cloudy when the day had no measurable precipitation:
/// mainly clear, partly cloudy, overcast, fog and depositing rime fog.
const CLOUDY_WEATHER_CODES: [i64; 5] = [1, 2, 3, 45, 48];

/// The coarse weather label attached to every [`crate::DailyObservation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Sunny,
    Cloudy,
    Rainy,
}

impl WeatherCategory {
    /// Classifies a daily precipitation total in millimeters.
    ///
    /// * `p > 0.5` is rainy.
    /// * `0.0 < p <= 0.5` is cloudy.
    /// * Everything else, including negative and `NaN` values, is sunny.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hk_weather::WeatherCategory;
    ///
    /// assert_eq!(WeatherCategory::from_precipitation(0.0), WeatherCategory::Sunny);
    /// assert_eq!(WeatherCategory::from_precipitation(0.3), WeatherCategory::Cloudy);
    /// assert_eq!(WeatherCategory::from_precipitation(0.6), WeatherCategory::Rainy);
    /// ```
    pub fn from_precipitation(millimeters: f64) -> Self {
        if millimeters > RAINY_THRESHOLD_MM {
            WeatherCategory::Rainy
        } else if millimeters > CLOUDY_THRESHOLD_MM {
            WeatherCategory::Cloudy
        } else {
            WeatherCategory::Sunny
        }
    }

    /// Classifies a day from a precipitation sum and a WMO weather code, as reported by
    /// Open-Meteo.
    ///
    /// Measurable precipitation wins; only a dry day falls back to the weather code.
    /// Missing precipitation counts as dry and a missing code counts as sunny.
    pub fn from_daily_summary(precipitation_mm: Option<f64>, weather_code: Option<i64>) -> Self {
        match precipitation_mm {
            Some(p) if p > CLOUDY_THRESHOLD_MM => Self::from_precipitation(p),
            _ => match weather_code {
                Some(code) if CLOUDY_WEATHER_CODES.contains(&code) => WeatherCategory::Cloudy,
                _ => WeatherCategory::Sunny,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Sunny => "sunny",
            WeatherCategory::Cloudy => "cloudy",
            WeatherCategory::Rainy => "rainy",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
