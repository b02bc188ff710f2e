mod error;
mod hk_weather;
mod sources;
mod tabular;
mod types;

pub use error::HkWeatherError;
pub use hk_weather::*;

pub use sources::error::SourceError;
pub use sources::fallback::FallbackSource;
pub use sources::outcome::SourceOutcome;
pub use sources::primary::PrimarySource;

pub use tabular::fetcher::{parse_table, TabularFetcher};
pub use tabular::record::RawRecord;
pub use tabular::resolver::{resolve_date, resolve_number};

pub use types::daily_observation::DailyObservation;
pub use types::month::Month;
pub use types::source_config::*;
pub use types::weather_category::*;
