use crate::api::utils::get_text;
use crate::config::Config;
use log::debug;
use shared::models::team::parse_teams;
use shared::{Result, Team};

/// Fetches the selected-teams roster. Malformed rows are dropped by the
/// parser, so only the fetch itself can fail.
pub async fn get_teams() -> Result<Vec<Team>> {
    let url = Config::teams_url();
    debug!("Fetching teams roster from {}", url);

    let body = get_text(&url).await?;
    let teams = parse_teams(&body);

    debug!("Successfully loaded {} teams", teams.len());
    Ok(teams)
}
