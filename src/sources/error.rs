use thiserror::Error;

/// Transport-level failures talking to either data source.
///
/// None of these reach callers of [`crate::HkWeather::fetch_month`]; they only decide
/// whether the fallback source is tried.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Failed to decode JSON response from {0}")]
    JsonDecode(String, #[source] serde_json::Error),
}
