use crate::components::teams::team_card::TeamCard;
use crate::components::teams::venue_filter::VenueFilterButtons;
use crate::state::ShowcaseContext;
use shared::filter::VenueFilter;
use shared::showcase::DataSource;
use shared::ShowcaseAction;
use yew::prelude::*;

#[function_component(TeamsSection)]
pub fn teams_section() -> Html {
    let ctx = use_context::<ShowcaseContext>().expect("Showcase context not found");
    let showcase = &ctx.state;

    let on_select = {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |venue: VenueFilter| dispatch.emit(ShowcaseAction::SelectVenue(venue)))
    };

    let ranked = showcase.ranked_teams();

    html! {
        <section id="teams" class="py-16 sm:py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-10">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl font-black text-white mb-4">
                        {"Selected Teams"}
                    </h2>
                    <p class="text-gray-400 text-lg">{"Ranked by total evaluation score"}</p>
                </div>

                <VenueFilterButtons selected={showcase.venue_filter().clone()} {on_select} />

                if showcase.teams_source() == DataSource::Loaded && ranked.is_empty() {
                    <p class="text-center text-gray-400 py-8">{"No teams at this venue."}</p>
                }
                <div
                    id="teams-grid"
                    key={showcase.venue_filter().value().to_string()}
                    class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 animate-fade-in"
                >
                    { for ranked.into_iter().map(|team| html! {
                        <TeamCard team={team.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
