use shared::pagination::PageControls;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct PaginationProps {
    pub controls: Option<PageControls>,
    pub on_change: Callback<usize>,
}

const IDLE_BUTTON: &str =
    "px-4 py-2 bg-gray-800 text-gray-300 rounded-full hover:bg-purple-600 hover:text-white transition border border-gray-600 min-h-[44px]";

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let Some(controls) = props.controls.as_ref() else {
        return html! { <div id="pagination"></div> };
    };

    let go_to = |page: usize| props.on_change.reform(move |_: MouseEvent| page);

    html! {
        <div id="pagination" class="flex flex-wrap justify-center items-center gap-2 mt-10">
            if let Some(previous) = controls.previous {
                <button class={IDLE_BUTTON} aria-label="Previous page" onclick={go_to(previous)}>
                    <i class="fas fa-chevron-left"></i>
                </button>
            }
            { for controls.pages.iter().map(|&page| {
                let class = if page == controls.current {
                    "px-4 py-2 rounded-full transition border bg-gradient-to-r from-purple-500 to-blue-500 text-white border-purple-500 min-h-[44px]"
                } else {
                    IDLE_BUTTON
                };
                html! {
                    <button {class} onclick={go_to(page)}>{page}</button>
                }
            }) }
            if let Some(next) = controls.next {
                <button class={IDLE_BUTTON} aria-label="Next page" onclick={go_to(next)}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            }
        </div>
    }
}
