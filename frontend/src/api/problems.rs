use crate::api::utils::get_text;
use crate::config::Config;
use log::debug;
use shared::{parse_problem_statements, ProblemStatement, Result};

pub async fn get_problem_statements() -> Result<Vec<ProblemStatement>> {
    let url = Config::problem_statements_url();
    debug!("Fetching problem statements from {}", url);

    let body = get_text(&url).await?;
    let problems = parse_problem_statements(&body)?;

    debug!("Successfully loaded {} problem statements", problems.len());
    Ok(problems)
}
