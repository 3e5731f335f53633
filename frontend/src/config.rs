use shared::models::team::Venue;
use shared::presentation::{jury_image_file, team_image_file, PLACEHOLDER_IMAGE};

pub struct Config;

impl Config {
    /// Directory the static page serves its data and images from. Paths stay
    /// relative so the page works from any mount point.
    pub fn asset_base() -> &'static str {
        option_env!("SHOWCASE_ASSET_BASE").unwrap_or("assets")
    }

    pub fn problem_statements_url() -> String {
        format!("{}/data/PS.json", Self::asset_base())
    }

    pub fn jury_details_url() -> String {
        format!("{}/data/jury_details.json", Self::asset_base())
    }

    pub fn teams_url() -> String {
        format!("{}/data/SelectedTeams.csv", Self::asset_base())
    }

    pub fn team_image_url(team_name: &str) -> String {
        format!(
            "{}/images/teams/{}",
            Self::asset_base(),
            urlencoding::encode(&team_image_file(team_name))
        )
    }

    /// `None` for venues without a jury photo; the card shows the placeholder.
    pub fn jury_image_url(venue: &Venue) -> Option<String> {
        jury_image_file(venue).map(|file| {
            format!("{}/images/jury/{}", Self::asset_base(), urlencoding::encode(file))
        })
    }

    pub fn placeholder_image() -> &'static str {
        PLACEHOLDER_IMAGE
    }

    /// Form-handling service that receives feedback submissions. Set at build
    /// time through `SHOWCASE_FEEDBACK_ENDPOINT`.
    pub fn feedback_endpoint() -> &'static str {
        option_env!("SHOWCASE_FEEDBACK_ENDPOINT").unwrap_or("/feedback")
    }
}
