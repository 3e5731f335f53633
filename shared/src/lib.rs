pub mod models {
    pub mod problem;
    pub mod team;
    pub mod jury;
}

pub mod dto {
    pub mod problem;
    pub mod jury;
    pub mod feedback;
}

pub mod csv;
pub mod error;
pub mod filter;
pub mod menu;
pub mod pagination;
pub mod presentation;
pub mod showcase;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    problem::{Category, ProblemStatement},
    team::{Team, Venue},
    jury::JuryAssignment,
};

// Re-export DTOs
pub use dto::{
    problem::{ProblemStatementDto, parse_problem_statements},
    jury::{JuryDetailsDto, parse_jury_details},
    feedback::{FeedbackSession, FeedbackSubmission, Priority, SubmissionStatus},
};

pub use filter::{FilterOptions, ProblemFilter, VenueFilter};
pub use menu::{MenuEvent, MenuPhase};
pub use pagination::{PageControls, Pagination};
pub use showcase::{DataSource, Showcase, ShowcaseAction};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_problem_catalogue_from_json() {
        let json = r#"[
            {"Statement_id": "SIH1600", "Title": "Flood Alerts", "Category": "Software",
             "Theme": "Disaster Management", "Description": "SMS alerts", "Department": "NDMA",
             "Organisation": "NDMA", "Datasetfile": "NULL"},
            {"Statement_id": "SIH1601", "Title": "Crop Drone", "Category": "Hardware",
             "Theme": "Agriculture", "Description": "Spraying", "Department": "MoA",
             "Organisation": "ICAR", "Datasetfile": "crops.csv"}
        ]"#;
        let problems = parse_problem_statements(json).unwrap();

        let mut showcase = Showcase::default();
        showcase.apply(ShowcaseAction::ProblemsLoaded(problems));
        showcase.apply(ShowcaseAction::FilterCategory(Some(Category::Hardware)));

        let visible = showcase.visible_problems();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "SIH1601");
        assert_eq!(visible[0].dataset_file.as_deref(), Some("crops.csv"));
        assert_eq!(showcase.options().themes, vec!["Agriculture", "Disaster Management"]);
    }

    #[test]
    fn test_roster_and_jury_from_fixtures() {
        let csv = "TEAM NAME,TEAM LEAD NAME,PS ID,Venue,TOTAL\n\
                   Tesla,Ravi,SIH1524,IOT LAB,71\n\
                   GenNext,Meera,SIH1525,SEMINAR HALL,88\n";
        let jury = r#"{"jury_details": {"SEMINAR HALL": {}, "IOT LAB": {}}}"#;

        let mut showcase = Showcase::default();
        showcase.apply(ShowcaseAction::TeamsLoaded(models::team::parse_teams(csv)));
        showcase.apply(ShowcaseAction::JuryLoaded(parse_jury_details(jury).unwrap()));

        assert_eq!(showcase.ranked_teams().len(), 1);
        assert_eq!(showcase.ranked_teams()[0].name, "GenNext");
        assert_eq!(showcase.jury()[1].venue, Venue::IotLab);
        assert_eq!(showcase.jury()[1].team_number(), 2);
    }
}
