#[cfg(test)]
mod component_tests {
    use frontend::components::feedback::feedback_modal::FEEDBACK_TYPES;
    use frontend::components::nav::NAV_LINKS;
    use frontend::config::Config;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use shared::models::team::Venue;
    use shared::{FeedbackSubmission, Priority};

    #[test]
    fn test_data_urls_live_under_asset_base() {
        let base = Config::asset_base();
        assert_eq!(Config::problem_statements_url(), format!("{}/data/PS.json", base));
        assert_eq!(Config::jury_details_url(), format!("{}/data/jury_details.json", base));
        assert_eq!(Config::teams_url(), format!("{}/data/SelectedTeams.csv", base));
    }

    #[test]
    fn test_team_image_url_is_percent_encoded() {
        let url = Config::team_image_url("Breed Spoilers");
        assert!(url.ends_with("/images/teams/BREED%20SPOTTERS.jpg"));

        let unknown = Config::team_image_url("Night Owls");
        assert!(unknown.ends_with("/images/teams/Night%20Owls"));
    }

    #[test]
    fn test_jury_image_url() {
        let url = Config::jury_image_url(&Venue::StartupStudio).unwrap();
        assert!(url.ends_with("/images/jury/StartUpStudio.jpg"));
        assert_eq!(Config::jury_image_url(&Venue::Other("ROOM 9".to_string())), None);
        assert_eq!(Config::placeholder_image(), "assets/images/logo.png");
    }

    #[test]
    fn test_feedback_endpoint_is_configured() {
        assert!(!Config::feedback_endpoint().is_empty());
    }

    #[test]
    fn test_nav_links_cover_every_section() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|(anchor, _, _)| *anchor).collect();
        assert_eq!(anchors, vec!["home", "problems", "jury", "teams"]);
    }

    #[test]
    fn test_feedback_form_body_carries_every_field() {
        let submission = FeedbackSubmission {
            name: String::new(),
            email: None,
            feedback_type: FEEDBACK_TYPES[1].to_string(),
            priority: Priority::Medium,
            message: "Modal will not close on iOS".to_string(),
            browser_info: "UA | Screen: 390x844 | Viewport: 390x664".to_string(),
            page_url: "https://example.com/".to_string(),
            timestamp: "2025-09-01T10:00:00.000Z".to_string(),
        };
        let body = submission.to_form_body();
        let keys: Vec<&str> = body
            .split('&')
            .filter_map(|pair| pair.split('=').next())
            .collect();
        assert_eq!(
            keys,
            vec!["name", "email", "feedback_type", "priority", "message", "browser_info", "page_url", "timestamp"]
        );
        assert!(body.contains("feedback_type=Bug%20Report"));
    }

    #[test]
    fn test_feedback_submission_serializes() {
        let submission = FeedbackSubmission {
            message: "Great event".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["message"], json!("Great event"));
        assert_eq!(value["priority"], json!("Low"));
    }
}
