pub mod plot;

use gloo_net::http::Request;
use serde::Deserialize;

/// Common GET request handler
///
/// Takes a fully assembled URL (the caller builds it from settings) and
/// parses the response body as JSON. Transport failures, non-OK HTTP
/// statuses, and malformed bodies all come back as `Err(String)` so the
/// caller can route them to the notification channel.
pub async fn get_json<T>(url: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    log::debug!("GET request to: {}", url);

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", url, error_msg);
            error_msg
        })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", url, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    let body: T = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", url, error_msg);
            error_msg
        })?;

    log::info!("GET {} - Success", url);
    Ok(body)
}
