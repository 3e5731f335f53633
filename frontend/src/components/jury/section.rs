use crate::components::jury::jury_card::JuryCard;
use crate::loader::render_jury;
use crate::state::ShowcaseContext;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Jury panels, one card per venue. Fetches the jury list when mounted, so a
/// page without this section never requests it.
#[function_component(JurySection)]
pub fn jury_section() -> Html {
    let ctx = use_context::<ShowcaseContext>().expect("Showcase context not found");

    {
        let dispatch = ctx.dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                render_jury(dispatch).await;
            });
            || ()
        });
    }

    html! {
        <section id="jury" class="py-16 sm:py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-10">
                    <h2 class="text-3xl sm:text-4xl md:text-5xl font-black text-white mb-4">
                        {"Jury Panels"}
                    </h2>
                    <p class="text-gray-400 text-lg">{"Each venue is evaluated by its own jury team"}</p>
                </div>
                <div id="jury-grid" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                    { for ctx.state.jury().iter().map(|assignment| html! {
                        <JuryCard assignment={assignment.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
