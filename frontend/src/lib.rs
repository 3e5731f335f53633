use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::state::ShowcaseProvider;
use crate::components::nav::Nav;
use crate::components::footer::Footer;
use crate::components::feedback::feedback_modal::FeedbackModal;
use crate::components::particles::Particles;
use crate::components::scroll_indicator::ScrollIndicator;

pub mod api;
pub mod components;
pub mod config;
pub mod dom;
pub mod loader;
pub mod state;
pub mod pages {
    pub mod not_found;
    pub mod showcase;
}

use pages::{not_found::NotFound, showcase::ShowcasePage};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    let feedback_open = use_state_eq(|| false);

    let open_feedback = {
        let feedback_open = feedback_open.clone();
        Callback::from(move |_| feedback_open.set(true))
    };
    let close_feedback = {
        let feedback_open = feedback_open.clone();
        Callback::from(move |_| feedback_open.set(false))
    };

    html! {
        <ShowcaseProvider>
            <BrowserRouter>
                <div class="app-container min-h-screen flex flex-col">
                    <ScrollIndicator />
                    <Particles />
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer on_feedback={open_feedback} />
                    <FeedbackModal is_open={*feedback_open} on_close={close_feedback} />
                </div>
            </BrowserRouter>
        </ShowcaseProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <ShowcasePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    info!("Mounting showcase to document body");
    yew::Renderer::<App>::new().render();
    Ok(())
}

// Entry point Trunk calls once the module is loaded
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
