use crate::components::fallback_image::FallbackImage;
use crate::config::Config;
use shared::presentation::venue_gradient;
use shared::Team;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TeamCardProps {
    pub team: Team,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let team = &props.team;

    html! {
        <div class="problem-card rounded-2xl p-6 hover-glow cursor-pointer">
            <div class="flex flex-col h-full">
                <div class="flex items-start justify-between mb-4">
                    <span class={classes!(
                        "text-xs", "font-bold", "px-3", "py-1", "rounded-full", "bg-gradient-to-r",
                        venue_gradient(&team.venue), "text-white"
                    )}>
                        {team.venue.label()}
                    </span>
                </div>

                <h3 class="text-xl font-bold text-white mb-3 leading-tight">{&team.name}</h3>

                <div class="flex-1 flex items-center justify-center mb-4">
                    <div class="w-32 h-32 rounded-lg overflow-hidden border-3 border-white/30 shadow-lg">
                        <FallbackImage
                            src={Some(AttrValue::from(Config::team_image_url(&team.name)))}
                            alt={AttrValue::from(team.name.clone())}
                        />
                    </div>
                </div>

                <div class="text-gray-400 text-sm mb-4">
                    <div class="flex items-center mb-2">
                        <i class="fas fa-user mr-2 text-purple-400"></i>
                        <span>{&team.lead_name}</span>
                    </div>
                    <div class="flex items-center">
                        <i class="fas fa-code mr-2 text-blue-400"></i>
                        <span>{&team.problem_statement_id}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
