use gloo_net::http::{Request, Response};
use shared::{Result, SharedError};

/// Turns a non-2xx response into an `HttpStatus` error.
pub fn ensure_success(response: &Response, url: &str) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(SharedError::HttpStatus {
            status: response.status(),
            url: url.to_string(),
        })
    }
}

/// GETs a static resource and returns its body as text
pub async fn get_text(url: &str) -> Result<String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| SharedError::Request(format!("Failed to fetch {}: {}", url, e)))?;

    ensure_success(&response, url)?;

    response
        .text()
        .await
        .map_err(|e| SharedError::Conversion(format!("Failed to read {}: {}", url, e)))
}
