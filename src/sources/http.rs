use crate::sources::error::SourceError;
use log::warn;
use reqwest::RequestBuilder;

/// Sends `request` and returns the raw body, treating any non-2xx status as a failure.
///
/// `url` is only used to label errors and log lines.
pub(crate) async fn download(request: RequestBuilder, url: &str) -> Result<Vec<u8>, SourceError> {
    let response = request
        .send()
        .await
        .map_err(|e| SourceError::NetworkRequest(url.to_string(), e))?;

    let response = match response.error_for_status() {
        Ok(resp) => resp,
        Err(e) => {
            warn!("HTTP error for {}: {:?}", url, e);
            return Err(if let Some(status) = e.status() {
                SourceError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                }
            } else {
                SourceError::NetworkRequest(url.to_string(), e)
            });
        }
    };

    let body = response
        .bytes()
        .await
        .map_err(|e| SourceError::BodyRead(url.to_string(), e))?;
    Ok(body.to_vec())
}
