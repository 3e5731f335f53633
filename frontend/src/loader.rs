//! Load steps run on mount. None of them surface an error to the user: a
//! failed catalogue falls back to built-in records, a failed roster or jury
//! list stays empty.

use crate::api::{jury, problems, teams};
use log::{debug, error};
use shared::ShowcaseAction;
use yew::Callback;

pub async fn load_problem_statements(dispatch: Callback<ShowcaseAction>) {
    match problems::get_problem_statements().await {
        Ok(problems) => dispatch.emit(ShowcaseAction::ProblemsLoaded(problems)),
        Err(e) => {
            error!("Error loading problem statements: {}", e);
            debug!("Falling back to built-in problem statements");
            dispatch.emit(ShowcaseAction::ProblemsFailed(e.to_string()));
        }
    }
}

pub async fn load_teams_data(dispatch: Callback<ShowcaseAction>) {
    match teams::get_teams().await {
        Ok(teams) => dispatch.emit(ShowcaseAction::TeamsLoaded(teams)),
        Err(e) => {
            error!("Error loading teams data: {}", e);
            dispatch.emit(ShowcaseAction::TeamsFailed(e.to_string()));
        }
    }
}

pub async fn render_jury(dispatch: Callback<ShowcaseAction>) {
    match jury::get_jury_assignments().await {
        Ok(jury) => dispatch.emit(ShowcaseAction::JuryLoaded(jury)),
        Err(e) => {
            error!("Error loading jury data: {}", e);
            dispatch.emit(ShowcaseAction::JuryFailed(e.to_string()));
        }
    }
}
