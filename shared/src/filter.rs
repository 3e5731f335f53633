//! Predicates over the catalogue and the team roster.
//!
//! Filtering is always recomputed from the full record set; nothing here keeps
//! state between calls.

use crate::models::problem::{Category, ProblemStatement};
use crate::models::team::{Team, Venue};
use std::collections::BTreeSet;

/// Active predicates for the problem-statement catalogue. `None` (or an empty
/// search string) means the predicate is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemFilter {
    pub search: String,
    pub category: Option<Category>,
    pub theme: Option<String>,
    pub organisation: Option<String>,
}

impl ProblemFilter {
    /// Maps a dropdown value to a predicate; the empty "All ..." option is inactive.
    pub fn selection(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || self.category.is_some()
            || self.theme.is_some()
            || self.organisation.is_some()
    }

    pub fn matches(&self, ps: &ProblemStatement) -> bool {
        self.matches_with_needle(ps, &self.search.to_lowercase())
    }

    fn matches_with_needle(&self, ps: &ProblemStatement, needle: &str) -> bool {
        ps.matches_search(needle)
            && self.category.as_ref().map_or(true, |c| &ps.category == c)
            && self.theme.as_ref().map_or(true, |t| &ps.theme == t)
            && self.organisation.as_ref().map_or(true, |o| &ps.organisation == o)
    }

    /// Indices into `problems` of every record satisfying all active
    /// predicates, in source order.
    pub fn apply(&self, problems: &[ProblemStatement]) -> Vec<usize> {
        let needle = self.search.to_lowercase();
        problems
            .iter()
            .enumerate()
            .filter(|(_, ps)| self.matches_with_needle(ps, &needle))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Borrowing variant of [`ProblemFilter::apply`].
pub fn filter_problems<'a>(
    problems: &'a [ProblemStatement],
    filter: &ProblemFilter,
) -> Vec<&'a ProblemStatement> {
    filter
        .apply(problems)
        .into_iter()
        .map(|index| &problems[index])
        .collect()
}

/// Dropdown contents derived from a full load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub themes: Vec<String>,
    pub organisations: Vec<String>,
}

impl FilterOptions {
    pub fn from_problems(problems: &[ProblemStatement]) -> Self {
        Self {
            themes: distinct_sorted(problems.iter().map(|ps| ps.theme.as_str())),
            organisations: distinct_sorted(problems.iter().map(|ps| ps.organisation.as_str())),
        }
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Which venue's teams are on screen
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VenueFilter {
    All,
    Venue(Venue),
}

impl Default for VenueFilter {
    fn default() -> Self {
        VenueFilter::Venue(Venue::SeminarHall)
    }
}

impl VenueFilter {
    /// Value carried by the filter buttons; "all" selects every venue.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            VenueFilter::All
        } else {
            VenueFilter::Venue(Venue::parse(value))
        }
    }

    /// Inverse of [`VenueFilter::parse`].
    pub fn value(&self) -> &str {
        match self {
            VenueFilter::All => "all",
            VenueFilter::Venue(venue) => venue.label(),
        }
    }

    pub fn matches(&self, team: &Team) -> bool {
        match self {
            VenueFilter::All => true,
            VenueFilter::Venue(venue) => &team.venue == venue,
        }
    }
}

/// Teams at the selected venue, highest total first. The sort is stable, so
/// equal totals keep their roster order.
pub fn rank_teams<'a>(teams: &'a [Team], filter: &VenueFilter) -> Vec<&'a Team> {
    let mut ranked: Vec<&Team> = teams.iter().filter(|team| filter.matches(team)).collect();
    ranked.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    ranked
}
