#[cfg(test)]
mod tests {
    use crate::state::ShowcaseStore;
    use pretty_assertions::assert_eq;
    use shared::filter::VenueFilter;
    use shared::models::team::parse_teams;
    use shared::showcase::DataSource;
    use shared::{parse_problem_statements, Category, ShowcaseAction, Venue};
    use std::rc::Rc;
    use yew::Reducible;

    fn dispatch(store: Rc<ShowcaseStore>, actions: Vec<ShowcaseAction>) -> Rc<ShowcaseStore> {
        actions.into_iter().fold(store, |store, action| store.reduce(action))
    }

    fn catalogue_json(count: usize) -> String {
        let entries: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"Statement_id":"SIH{:04}","Title":"Problem {}","Category":"{}","Theme":"Theme {}","Description":"d","Department":"D","Organisation":"Org {}"}}"#,
                    i,
                    i,
                    if i % 2 == 0 { "Software" } else { "Hardware" },
                    i % 3,
                    i % 4
                )
            })
            .collect();
        format!("[{}]", entries.join(","))
    }

    #[test]
    fn test_store_starts_pending() {
        let store = ShowcaseStore::default();
        assert_eq!(store.problems_source(), DataSource::Pending);
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.venue_filter(), &VenueFilter::Venue(Venue::SeminarHall));
    }

    #[test]
    fn test_reduce_does_not_mutate_previous_state() {
        let before = Rc::new(ShowcaseStore::default());
        let after = before.clone().reduce(ShowcaseAction::ProblemsFailed("HTTP 404".to_string()));
        assert_eq!(before.filtered_count(), 0);
        assert_eq!(after.filtered_count(), 2);
        assert_eq!(after.problems_source(), DataSource::Fallback);
    }

    #[test]
    fn test_loaded_catalogue_paginates_in_nines() {
        let problems = parse_problem_statements(&catalogue_json(20)).unwrap();
        let store = dispatch(
            Rc::new(ShowcaseStore::default()),
            vec![ShowcaseAction::ProblemsLoaded(problems), ShowcaseAction::ChangePage(3)],
        );
        assert_eq!(store.pagination().total_pages(), 3);
        let ids: Vec<&str> = store.visible_problems().iter().map(|ps| ps.id.as_str()).collect();
        assert_eq!(ids, vec!["SIH0018", "SIH0019"]);

        let controls = store.page_controls().unwrap();
        assert_eq!(controls.pages, vec![1, 2, 3]);
        assert_eq!(controls.next, None);
    }

    #[test]
    fn test_filter_change_returns_to_first_page() {
        let problems = parse_problem_statements(&catalogue_json(40)).unwrap();
        let store = dispatch(
            Rc::new(ShowcaseStore::default()),
            vec![
                ShowcaseAction::ProblemsLoaded(problems),
                ShowcaseAction::ChangePage(4),
                ShowcaseAction::FilterCategory(Some(Category::Hardware)),
            ],
        );
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.filtered_count(), 20);
        assert!(store.visible_problems().iter().all(|ps| ps.category == Category::Hardware));
    }

    #[test]
    fn test_open_and_close_detail() {
        let store = dispatch(
            Rc::new(ShowcaseStore::default()),
            vec![
                ShowcaseAction::ProblemsFailed(String::new()),
                ShowcaseAction::OpenProblem("SIH1524".to_string()),
            ],
        );
        assert_eq!(
            store.selected_problem().map(|ps| ps.organisation.as_str()),
            Some("Godrej Appliances")
        );
        let store = store.reduce(ShowcaseAction::CloseProblem);
        assert!(store.selected_problem().is_none());
    }

    #[test]
    fn test_venue_selection_ranks_roster() {
        let csv = "TEAM NAME,TEAM LEAD NAME,PS ID,Venue,TOTAL\n\
                   Tesla,A,SIH1,IOT LAB,41\n\
                   Obsidian,B,SIH2,IOT LAB,77\n\
                   ,C,SIH3,IOT LAB,99\n\
                   GenNext,D,SIH4,SEMINAR HALL,80\n\
                   Scratch,E,SIH5,STARTUP STUDIO\n";
        let store = dispatch(
            Rc::new(ShowcaseStore::default()),
            vec![
                ShowcaseAction::TeamsLoaded(parse_teams(csv)),
                ShowcaseAction::SelectVenue(VenueFilter::parse("IOT LAB")),
            ],
        );
        let names: Vec<&str> = store.ranked_teams().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Obsidian", "Tesla"]);

        let store = store.reduce(ShowcaseAction::SelectVenue(VenueFilter::All));
        assert_eq!(store.ranked_teams().len(), 3);
    }
}
