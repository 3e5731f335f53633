use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page min-h-[60vh] flex flex-col items-center justify-center text-center px-4">
            <h1 class="text-5xl font-black text-white mb-4">{"404 - Page Not Found"}</h1>
            <p class="text-gray-400 mb-8">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="px-6 py-3 rounded-full bg-gradient-to-r from-purple-500 to-blue-500 text-white font-semibold">
                {"Back to the showcase"}
            </Link<Route>>
        </div>
    }
}
