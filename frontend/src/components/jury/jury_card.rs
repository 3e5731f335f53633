use crate::components::fallback_image::FallbackImage;
use crate::config::Config;
use shared::presentation::venue_gradient;
use shared::JuryAssignment;
use yew::prelude::*;

/// Delay between successive jury cards fading in.
const STAGGER_MS: usize = 150;

#[derive(Properties, Clone, PartialEq)]
pub struct JuryCardProps {
    pub assignment: JuryAssignment,
}

#[function_component(JuryCard)]
pub fn jury_card(props: &JuryCardProps) -> Html {
    let venue = &props.assignment.venue;
    let image = Config::jury_image_url(venue).map(AttrValue::from);

    html! {
        <div
            class="jury-card glass-card p-4 sm:p-6 rounded-xl border border-white/10 hover:border-white/20 transition-all duration-300 group hover:scale-105 animate-fade-in-up"
            style={format!("animation-delay: {}ms", props.assignment.ordinal * STAGGER_MS)}
        >
            <div class="text-center">
                <div class="jury-team-badge text-2xl font-black text-white mb-6 tracking-wider">
                    {format!("JURY TEAM {}", props.assignment.team_number())}
                </div>

                <div class="w-48 h-48 sm:w-56 sm:h-56 md:w-64 md:h-64 mx-auto mb-4 rounded-xl overflow-hidden border-3 border-white/30 group-hover:border-white/50 transition-all duration-300 shadow-2xl">
                    <FallbackImage
                        src={image}
                        alt={AttrValue::from(format!("{} Jury Panel", venue))}
                        cover_class="object-center"
                    />
                </div>

                <div class={classes!(
                    "inline-block", "px-4", "py-2", "mt-3", "rounded-full", "text-sm", "font-medium",
                    "bg-gradient-to-r", venue_gradient(venue), "text-white"
                )}>
                    <i class="fas fa-gavel mr-2"></i>
                    {venue.label()}
                </div>
            </div>
        </div>
    }
}
