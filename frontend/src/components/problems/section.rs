use crate::components::animated_count::AnimatedCount;
use crate::components::problems::filters::ProblemFilters;
use crate::components::problems::pagination::Pagination;
use crate::components::problems::problem_card::ProblemCard;
use crate::components::problems::problem_modal::ProblemModal;
use crate::dom;
use crate::state::ShowcaseContext;
use shared::showcase::DataSource;
use shared::ShowcaseAction;
use yew::prelude::*;

pub const SECTION_ID: &str = "problems";

#[function_component(ProblemsSection)]
pub fn problems_section() -> Html {
    let ctx = use_context::<ShowcaseContext>().expect("Showcase context not found");
    let showcase = &ctx.state;

    let on_page_change = {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |page: usize| {
            dispatch.emit(ShowcaseAction::ChangePage(page));
            dom::scroll_into_view(SECTION_ID);
        })
    };

    let on_open = {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |id: String| dispatch.emit(ShowcaseAction::OpenProblem(id)))
    };

    let on_close = {
        let dispatch = ctx.dispatch.clone();
        Callback::from(move |_| dispatch.emit(ShowcaseAction::CloseProblem))
    };

    let visible = showcase.visible_problems();

    html! {
        <section id={SECTION_ID} class="py-16 sm:py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-10">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl font-black text-white mb-4">
                        {"Problem Statements"}
                    </h2>
                    <p class="text-gray-400 text-lg">
                        <AnimatedCount target={showcase.filtered_count()} />
                        {" problems found"}
                    </p>
                </div>

                <ProblemFilters />

                if showcase.problems_source() == DataSource::Pending {
                    <div class="text-center text-gray-400 py-16">
                        <i class="fas fa-spinner fa-spin text-3xl mb-4"></i>
                        <p>{"Loading problem statements..."}</p>
                    </div>
                } else if visible.is_empty() {
                    <div class="text-center text-gray-400 py-16">
                        <i class="fas fa-search text-3xl mb-4"></i>
                        <p>{"No problem statements match your search."}</p>
                    </div>
                } else {
                    <div
                        id="problemsGrid"
                        key={showcase.current_page()}
                        class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 animate-fade-in"
                    >
                        { for visible.into_iter().enumerate().map(|(index, ps)| html! {
                            <ProblemCard
                                problem={ps.clone()}
                                {index}
                                on_open={on_open.clone()}
                            />
                        }) }
                    </div>
                }

                <Pagination controls={showcase.page_controls()} on_change={on_page_change} />
            </div>

            <ProblemModal problem={showcase.selected_problem().cloned()} {on_close} />
        </section>
    }
}
