use crate::sources::error::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HkWeatherError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Invalid month {year:04}-{month:02}: month must be 1-12 and the year representable")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
