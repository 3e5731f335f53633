use shared::presentation::{category_gradient, theme_gradient, truncate, DESCRIPTION_PREVIEW_CHARS};
use shared::ProblemStatement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProblemCardProps {
    pub problem: ProblemStatement,
    /// Position on the page, staggers the entry animation
    pub index: usize,
    pub on_open: Callback<String>,
}

#[function_component(ProblemCard)]
pub fn problem_card(props: &ProblemCardProps) -> Html {
    let ps = &props.problem;

    let on_view = {
        let on_open = props.on_open.clone();
        let id = ps.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_open.emit(id.clone());
        })
    };

    html! {
        <div
            class="problem-card rounded-2xl p-6 hover-glow cursor-pointer"
            style={format!("animation-delay: {:.1}s", props.index as f64 * 0.1)}
        >
            <div class="flex flex-col h-full">
                <div class="flex items-start justify-between mb-4">
                    <span class={classes!(
                        "text-xs", "font-bold", "px-3", "py-1", "rounded-full", "bg-gradient-to-r",
                        category_gradient(&ps.category), "text-white"
                    )}>
                        {ps.category.as_str()}
                    </span>
                    <span class="text-xs text-gray-400 font-mono">{&ps.id}</span>
                </div>

                <h3 class="text-xl font-bold text-white mb-3 leading-tight">{&ps.title}</h3>

                <div class={classes!("theme-badge", "rounded-full", "px-3", "py-1", "mb-3", "inline-block", "bg-gradient-to-r", theme_gradient(&ps.theme))}>
                    <span class="text-xs font-semibold text-white">{&ps.theme}</span>
                </div>

                <p class="text-gray-400 text-sm mb-4 flex-grow line-clamp-3">
                    {truncate(&ps.description, DESCRIPTION_PREVIEW_CHARS).into_owned()}
                </p>

                <div class="flex items-center justify-between mt-auto">
                    <div class="text-xs text-gray-500 flex items-center min-w-0 flex-1 mr-3">
                        <i class="fas fa-building mr-1 flex-shrink-0"></i>
                        <span class="truncate">{&ps.organisation}</span>
                    </div>
                    <button
                        class="bg-gradient-to-r from-purple-500 to-blue-500 px-4 py-2 rounded-full text-white text-sm font-semibold hover:from-purple-600 hover:to-blue-600 transition flex-shrink-0"
                        onclick={on_view}
                    >
                        <i class="fas fa-eye mr-1"></i>
                        {"View Details"}
                    </button>
                </div>
            </div>
        </div>
    }
}
