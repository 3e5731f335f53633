use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// How long the submission error banner stays on screen.
pub const ERROR_BANNER_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feedback form submission, including the browser context captured when
/// the form was opened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct FeedbackSubmission {
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: Option<String>,
    pub feedback_type: String,
    pub priority: Priority,
    #[validate(length(min = 1, message = "Please tell us what you think before sending"))]
    pub message: String,
    pub browser_info: String,
    pub page_url: String,
    pub timestamp: String,
}

impl FeedbackSubmission {
    /// Field name / value pairs in the order they are posted.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone().unwrap_or_default()),
            ("feedback_type", self.feedback_type.clone()),
            ("priority", self.priority.as_str().to_string()),
            ("message", self.message.clone()),
            ("browser_info", self.browser_info.clone()),
            ("page_url", self.page_url.clone()),
            ("timestamp", self.timestamp.clone()),
        ]
    }

    /// `application/x-www-form-urlencoded` body
    pub fn to_form_body(&self) -> String {
        self.form_fields()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Formats the browser line attached to every submission.
pub fn browser_info(user_agent: &str, screen: (i32, i32), viewport: (i32, i32)) -> String {
    format!(
        "{} | Screen: {}x{} | Viewport: {}x{}",
        user_agent, screen.0, screen.1, viewport.0, viewport.1
    )
}

/// Where the feedback form is in its submit cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Sending,
    Sent,
}

impl SubmissionStatus {
    pub fn submit_disabled(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }
}

/// Tracks how many times the feedback form has been closed so a send that
/// finishes after the form was dismissed can be told apart from a live one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackSession {
    generation: u32,
}

impl FeedbackSession {
    /// Taken when a send starts.
    pub fn ticket(&self) -> u32 {
        self.generation
    }

    pub fn close(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// False once the form was closed after `ticket` was taken.
    pub fn is_current(&self, ticket: u32) -> bool {
        self.generation == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn submission() -> FeedbackSubmission {
        FeedbackSubmission {
            name: "Asha Rao".to_string(),
            email: Some("asha@example.com".to_string()),
            feedback_type: "Bug".to_string(),
            priority: Priority::High,
            message: "Filters & search reset page".to_string(),
            browser_info: browser_info("Mozilla/5.0", (1920, 1080), (1280, 720)),
            page_url: "https://example.com/#problems".to_string(),
            timestamp: "2025-09-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_browser_info_format() {
        assert_eq!(
            browser_info("UA", (390, 844), (390, 664)),
            "UA | Screen: 390x844 | Viewport: 390x664"
        );
    }

    #[test]
    fn test_form_body_is_url_encoded() {
        let body = submission().to_form_body();
        assert!(body.starts_with("name=Asha%20Rao&email=asha%40example.com&"));
        assert!(body.contains("&priority=High&"));
        assert!(body.contains("message=Filters%20%26%20search%20reset%20page"));
        assert!(body.contains("page_url=https%3A%2F%2Fexample.com%2F%23problems"));
    }

    #[test]
    fn test_validation() {
        assert!(submission().validate().is_ok());

        let mut missing_message = submission();
        missing_message.message.clear();
        assert!(missing_message.validate().is_err());

        let mut bad_email = submission();
        bad_email.email = Some("not-an-email".to_string());
        assert!(bad_email.validate().is_err());

        let mut no_email = submission();
        no_email.email = None;
        assert!(no_email.validate().is_ok());
    }

    #[test]
    fn test_default_priority_is_low() {
        assert_eq!(FeedbackSubmission::default().priority, Priority::Low);
        assert!(SubmissionStatus::Sending.submit_disabled());
        assert!(!SubmissionStatus::Editing.submit_disabled());
    }

    #[test]
    fn test_send_finishing_after_close_is_stale() {
        let mut session = FeedbackSession::default();
        let first = session.ticket();
        assert!(session.is_current(first));

        session.close();
        assert!(!session.is_current(first));

        let second = session.ticket();
        assert!(session.is_current(second));
        assert_ne!(first, second);
    }
}
