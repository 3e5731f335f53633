use crate::state::ShowcaseContext;
use shared::filter::ProblemFilter;
use shared::models::problem::Category;
use shared::ShowcaseAction;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

const SELECT_CLASSES: &str =
    "w-full bg-slate-800/70 border border-slate-600 rounded-xl px-4 py-3 text-white focus:outline-none focus:border-purple-500 min-h-[44px]";

#[function_component(ProblemFilters)]
pub fn problem_filters() -> Html {
    let ctx = use_context::<ShowcaseContext>().expect("Showcase context not found");
    let filter = ctx.state.filter();
    let options = ctx.state.options();

    let on_search = {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(ShowcaseAction::Search(input.value()));
        })
    };

    let on_category = {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |e: Event| {
            let category = ProblemFilter::selection(&select_value(&e)).map(|c| Category::parse(&c));
            dispatch.emit(ShowcaseAction::FilterCategory(category));
        })
    };

    let on_theme = {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |e: Event| {
            dispatch.emit(ShowcaseAction::FilterTheme(ProblemFilter::selection(&select_value(&e))));
        })
    };

    let on_organisation = {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |e: Event| {
            dispatch.emit(ShowcaseAction::FilterOrganisation(ProblemFilter::selection(&select_value(&e))));
        })
    };

    let selected_category = filter.category.as_ref().map(|c| c.as_str().to_string()).unwrap_or_default();
    let selected_theme = filter.theme.clone().unwrap_or_default();
    let selected_organisation = filter.organisation.clone().unwrap_or_default();

    html! {
        <div class="glass-card rounded-2xl p-4 sm:p-6 mb-8">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                <div class="relative">
                    <i class="fas fa-search absolute left-4 top-1/2 -translate-y-1/2 text-gray-400"></i>
                    <input
                        id="searchInput"
                        type="text"
                        placeholder="Search problem statements..."
                        value={filter.search.clone()}
                        oninput={on_search}
                        class="w-full bg-slate-800/70 border border-slate-600 rounded-xl pl-11 pr-4 py-3 text-white placeholder-gray-400 focus:outline-none focus:border-purple-500 min-h-[44px]"
                    />
                </div>

                <select id="categoryFilter" class={SELECT_CLASSES} onchange={on_category}>
                    <option value="" selected={selected_category.is_empty()}>{"All Categories"}</option>
                    { for Category::KNOWN.iter().map(|category| html! {
                        <option
                            value={category.as_str().to_string()}
                            selected={selected_category == category.as_str()}
                        >
                            {category.as_str()}
                        </option>
                    }) }
                </select>

                <select id="themeFilter" class={SELECT_CLASSES} onchange={on_theme}>
                    <option value="" selected={selected_theme.is_empty()}>{"All Themes"}</option>
                    { for options.themes.iter().map(|theme| html! {
                        <option value={theme.clone()} selected={&selected_theme == theme}>{theme}</option>
                    }) }
                </select>

                <select id="organizationFilter" class={SELECT_CLASSES} onchange={on_organisation}>
                    <option value="" selected={selected_organisation.is_empty()}>{"All Organizations"}</option>
                    { for options.organisations.iter().map(|org| html! {
                        <option value={org.clone()} selected={&selected_organisation == org}>{org}</option>
                    }) }
                </select>
            </div>
        </div>
    }
}
