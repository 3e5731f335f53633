use crate::api::utils::ensure_success;
use crate::config::Config;
use gloo_net::http::Request;
use log::debug;
use shared::{FeedbackSubmission, Result, SharedError};

/// Posts a feedback submission form-encoded. Any 2xx counts as delivered.
pub async fn submit_feedback(submission: &FeedbackSubmission) -> Result<()> {
    let url = Config::feedback_endpoint();
    debug!("Submitting feedback to {}", url);

    let response = Request::post(url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(submission.to_form_body())
        .map_err(|e| SharedError::Request(format!("Failed to build feedback request: {}", e)))?
        .send()
        .await
        .map_err(|e| SharedError::Request(format!("Failed to send feedback: {}", e)))?;

    ensure_success(&response, url)?;

    debug!("Feedback accepted with status {}", response.status());
    Ok(())
}
