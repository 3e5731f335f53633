use shared::filter::VenueFilter;
use shared::models::team::Venue;
use shared::presentation::venue_button_gradient;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct VenueFilterProps {
    pub selected: VenueFilter,
    pub on_select: Callback<VenueFilter>,
}

/// "All Venues" plus one button per evaluation room.
#[function_component(VenueFilterButtons)]
pub fn venue_filter_buttons(props: &VenueFilterProps) -> Html {
    let choices = std::iter::once(VenueFilter::All)
        .chain(Venue::KNOWN.into_iter().map(VenueFilter::Venue));

    html! {
        <div class="flex flex-wrap justify-center gap-3 mb-10">
            { for choices.map(|choice| {
                let (label, gradient) = match &choice {
                    VenueFilter::All => ("All Venues".to_string(), venue_button_gradient(None)),
                    VenueFilter::Venue(venue) => (venue.label().to_string(), venue_button_gradient(Some(venue))),
                };
                let active = choice == props.selected;
                let class = if active {
                    classes!("bg-gradient-to-r", gradient, "text-white", "shadow-lg", "active")
                } else {
                    classes!("bg-gray-700/50", "text-gray-300", "hover:bg-gray-600/50")
                };
                let onclick = props.on_select.reform({
                    let choice = choice.clone();
                    move |_: MouseEvent| choice.clone()
                });
                html! {
                    <button
                        class={classes!("venue-filter-btn", "px-5", "py-2", "rounded-full", "text-sm", "font-semibold", "transition", "min-h-[44px]", class)}
                        {onclick}
                    >
                        {label}
                    </button>
                }
            }) }
        </div>
    }
}
