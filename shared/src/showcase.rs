//! Page state and its single transition function.
//!
//! Every user interaction and every finished load becomes a [`ShowcaseAction`];
//! [`Showcase::apply`] is the only place state changes. Derived views (the
//! filtered catalogue, dropdown options) are rebuilt from the full record set
//! whenever their inputs change.

use crate::filter::{rank_teams, FilterOptions, ProblemFilter, VenueFilter};
use crate::models::jury::JuryAssignment;
use crate::models::problem::{Category, ProblemStatement};
use crate::models::team::Team;
use crate::pagination::{PageControls, Pagination};
use std::rc::Rc;

/// Where a collection's records came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Pending,
    Loaded,
    /// The resource failed and built-in records are shown instead
    Fallback,
    /// The resource failed and there is nothing to show
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShowcaseAction {
    ProblemsLoaded(Vec<ProblemStatement>),
    ProblemsFailed(String),
    JuryLoaded(Vec<JuryAssignment>),
    JuryFailed(String),
    TeamsLoaded(Vec<Team>),
    TeamsFailed(String),
    Search(String),
    FilterCategory(Option<Category>),
    FilterTheme(Option<String>),
    FilterOrganisation(Option<String>),
    /// Jump to a page; not bounds-checked
    ChangePage(usize),
    SelectVenue(VenueFilter),
    OpenProblem(String),
    CloseProblem,
}

impl ShowcaseAction {
    pub fn label(&self) -> &'static str {
        match self {
            ShowcaseAction::ProblemsLoaded(_) => "problems_loaded",
            ShowcaseAction::ProblemsFailed(_) => "problems_failed",
            ShowcaseAction::JuryLoaded(_) => "jury_loaded",
            ShowcaseAction::JuryFailed(_) => "jury_failed",
            ShowcaseAction::TeamsLoaded(_) => "teams_loaded",
            ShowcaseAction::TeamsFailed(_) => "teams_failed",
            ShowcaseAction::Search(_) => "search",
            ShowcaseAction::FilterCategory(_) => "filter_category",
            ShowcaseAction::FilterTheme(_) => "filter_theme",
            ShowcaseAction::FilterOrganisation(_) => "filter_organisation",
            ShowcaseAction::ChangePage(_) => "change_page",
            ShowcaseAction::SelectVenue(_) => "select_venue",
            ShowcaseAction::OpenProblem(_) => "open_problem",
            ShowcaseAction::CloseProblem => "close_problem",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    problems: Rc<[ProblemStatement]>,
    problems_source: DataSource,
    filter: ProblemFilter,
    filtered: Rc<[usize]>,
    options: FilterOptions,
    current_page: usize,
    selected_problem: Option<String>,
    teams: Rc<[Team]>,
    teams_source: DataSource,
    venue_filter: VenueFilter,
    jury: Rc<[JuryAssignment]>,
    jury_source: DataSource,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            problems: Rc::from(Vec::new()),
            problems_source: DataSource::Pending,
            filter: ProblemFilter::default(),
            filtered: Rc::from(Vec::new()),
            options: FilterOptions::default(),
            current_page: 1,
            selected_problem: None,
            teams: Rc::from(Vec::new()),
            teams_source: DataSource::Pending,
            venue_filter: VenueFilter::default(),
            jury: Rc::from(Vec::new()),
            jury_source: DataSource::Pending,
        }
    }
}

impl Showcase {
    pub fn apply(&mut self, action: ShowcaseAction) {
        match action {
            ShowcaseAction::ProblemsLoaded(problems) => {
                self.replace_problems(problems, DataSource::Loaded);
            }
            ShowcaseAction::ProblemsFailed(_) => {
                self.replace_problems(ProblemStatement::fallback(), DataSource::Fallback);
            }
            ShowcaseAction::JuryLoaded(jury) => {
                self.jury = Rc::from(jury);
                self.jury_source = DataSource::Loaded;
            }
            ShowcaseAction::JuryFailed(_) => {
                self.jury_source = DataSource::Unavailable;
            }
            ShowcaseAction::TeamsLoaded(teams) => {
                self.teams = Rc::from(teams);
                self.teams_source = DataSource::Loaded;
            }
            ShowcaseAction::TeamsFailed(_) => {
                self.teams_source = DataSource::Unavailable;
            }
            ShowcaseAction::Search(search) => {
                self.filter.search = search;
                self.refilter();
            }
            ShowcaseAction::FilterCategory(category) => {
                self.filter.category = category;
                self.refilter();
            }
            ShowcaseAction::FilterTheme(theme) => {
                self.filter.theme = theme;
                self.refilter();
            }
            ShowcaseAction::FilterOrganisation(organisation) => {
                self.filter.organisation = organisation;
                self.refilter();
            }
            ShowcaseAction::ChangePage(page) => {
                self.current_page = page;
            }
            ShowcaseAction::SelectVenue(venue_filter) => {
                self.venue_filter = venue_filter;
            }
            ShowcaseAction::OpenProblem(id) => {
                if self.problems.iter().any(|ps| ps.id == id) {
                    self.selected_problem = Some(id);
                }
            }
            ShowcaseAction::CloseProblem => {
                self.selected_problem = None;
            }
        }
    }

    fn replace_problems(&mut self, problems: Vec<ProblemStatement>, source: DataSource) {
        self.options = FilterOptions::from_problems(&problems);
        self.problems = Rc::from(problems);
        self.problems_source = source;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = Rc::from(self.filter.apply(&self.problems));
        self.current_page = 1;
    }

    pub fn problems(&self) -> &[ProblemStatement] {
        &self.problems
    }

    pub fn problems_source(&self) -> DataSource {
        self.problems_source
    }

    pub fn filter(&self) -> &ProblemFilter {
        &self.filter
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Every record in the current filtered view, in catalogue order.
    pub fn filtered_problems(&self) -> Vec<&ProblemStatement> {
        self.filtered.iter().map(|&index| &self.problems[index]).collect()
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.filtered.len(), self.current_page)
    }

    pub fn page_controls(&self) -> Option<PageControls> {
        self.pagination().controls()
    }

    /// Records on the current page.
    pub fn visible_problems(&self) -> Vec<&ProblemStatement> {
        self.pagination()
            .slice(&self.filtered)
            .iter()
            .map(|&index| &self.problems[index])
            .collect()
    }

    pub fn selected_problem(&self) -> Option<&ProblemStatement> {
        let id = self.selected_problem.as_deref()?;
        self.problems.iter().find(|ps| ps.id == id)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn teams_source(&self) -> DataSource {
        self.teams_source
    }

    pub fn venue_filter(&self) -> &VenueFilter {
        &self.venue_filter
    }

    /// Teams at the selected venue, best total first.
    pub fn ranked_teams(&self) -> Vec<&Team> {
        rank_teams(&self.teams, &self.venue_filter)
    }

    pub fn jury(&self) -> &[JuryAssignment] {
        &self.jury
    }

    pub fn jury_source(&self) -> DataSource {
        self.jury_source
    }
}
