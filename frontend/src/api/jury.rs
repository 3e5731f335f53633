use crate::api::utils::get_text;
use crate::config::Config;
use log::debug;
use shared::{parse_jury_details, JuryAssignment, Result};

pub async fn get_jury_assignments() -> Result<Vec<JuryAssignment>> {
    let url = Config::jury_details_url();
    debug!("Fetching jury details from {}", url);

    let body = get_text(&url).await?;
    let jury = parse_jury_details(&body)?;

    debug!("Successfully loaded {} jury panels", jury.len());
    Ok(jury)
}
