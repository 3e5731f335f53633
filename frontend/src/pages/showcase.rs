use crate::components::jury::section::JurySection;
use crate::components::problems::section::{ProblemsSection, SECTION_ID};
use crate::components::teams::section::TeamsSection;
use crate::dom;
use crate::state::ShowcaseContext;
use shared::showcase::DataSource;
use yew::prelude::*;

#[function_component(Hero)]
fn hero() -> Html {
    let ctx = use_context::<ShowcaseContext>().expect("Showcase context not found");
    let showcase = &ctx.state;

    let explore = Callback::from(|e: MouseEvent| {
        if dom::scroll_to_section(SECTION_ID) {
            e.prevent_default();
        }
    });

    let stat = |value: String, label: &'static str| html! {
        <div class="glass-card rounded-2xl px-6 py-4">
            <div class="text-3xl font-black text-white">{value}</div>
            <div class="text-xs uppercase tracking-wide text-gray-400">{label}</div>
        </div>
    };
    let count = |n: usize, source: DataSource| match source {
        DataSource::Pending => "...".to_string(),
        _ => n.to_string(),
    };

    html! {
        <section id="home" class="min-h-[70vh] flex items-center justify-center px-4 py-20 text-center">
            <div class="max-w-4xl">
                <h1 class="text-4xl sm:text-5xl md:text-7xl font-black text-white mb-6 leading-tight">
                    {"Smart India Hackathon"}
                    <span class="block bg-gradient-to-r from-purple-400 via-pink-400 to-blue-400 bg-clip-text text-transparent">
                        {"Internal Round"}
                    </span>
                </h1>
                <p class="text-gray-300 text-lg sm:text-xl mb-10">
                    {"Browse the problem statements, meet the jury and see the teams heading to the finale."}
                </p>
                <div class="flex flex-wrap justify-center gap-4 mb-10">
                    {stat(count(showcase.problems().len(), showcase.problems_source()), "Problem Statements")}
                    {stat(count(showcase.jury().len(), showcase.jury_source()), "Jury Panels")}
                    {stat(count(showcase.teams().len(), showcase.teams_source()), "Selected Teams")}
                </div>
                <a
                    href={format!("#{}", SECTION_ID)}
                    onclick={explore}
                    class="inline-flex items-center px-8 py-4 rounded-full bg-gradient-to-r from-purple-500 to-blue-500 text-white font-semibold hover:from-purple-600 hover:to-blue-600 transition min-h-[44px]"
                >
                    <i class="fas fa-rocket mr-2"></i>
                    {"Explore Problems"}
                </a>
            </div>
        </section>
    }
}

#[function_component(ShowcasePage)]
pub fn showcase_page() -> Html {
    html! {
        <>
            <Hero />
            <ProblemsSection />
            <JurySection />
            <TeamsSection />
        </>
    }
}
