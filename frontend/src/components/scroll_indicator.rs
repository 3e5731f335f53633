use crate::dom::current_scroll_progress;
use gloo::events::EventListener;
use yew::prelude::*;

#[function_component(ScrollIndicator)]
pub fn scroll_indicator() -> Html {
    let progress = use_state_eq(current_scroll_progress);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    progress.set(current_scroll_progress());
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <div
            id="scrollIndicator"
            class="scroll-indicator fixed top-0 left-0 h-1 z-[60] bg-gradient-to-r from-purple-500 to-blue-500"
            style={format!("width: {}%", *progress)}
        ></div>
    }
}
