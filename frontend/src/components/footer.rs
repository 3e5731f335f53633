use crate::components::nav::NAV_LINKS;
use crate::dom;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FooterProps {
    /// Opens the feedback form
    pub on_feedback: Callback<()>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let on_feedback = props.on_feedback.reform(|_: MouseEvent| ());

    html! {
        <footer class="border-t border-white/10 bg-slate-900/80 text-white mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 sm:gap-12">
                    <div class="text-center md:text-left">
                        <span class="text-2xl sm:text-3xl font-bold tracking-tight">{"SIH Showcase"}</span>
                        <p class="text-gray-400 text-sm sm:text-base leading-relaxed max-w-md mx-auto md:mx-0 mt-4">
                            {"Problem statements, jury panels and the teams selected for the grand finale."}
                        </p>
                    </div>

                    <div class="text-center md:text-left">
                        <h3 class="text-lg sm:text-xl font-semibold mb-4 sm:mb-6">{"Quick Links"}</h3>
                        <ul class="space-y-2 sm:space-y-3">
                            { for NAV_LINKS.iter().map(|(anchor, label, icon)| {
                                let anchor = *anchor;
                                let onclick = Callback::from(move |e: MouseEvent| {
                                    if dom::scroll_to_section(anchor) {
                                        e.prevent_default();
                                    }
                                });
                                html! {
                                    <li>
                                        <a
                                            href={format!("#{}", anchor)}
                                            {onclick}
                                            class="text-gray-400 hover:text-white transition-colors duration-200 text-sm sm:text-base inline-flex items-center"
                                        >
                                            <i class={classes!("fas", *icon, "mr-2")}></i>
                                            {*label}
                                        </a>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>

                    <div class="text-center md:text-left">
                        <h3 class="text-lg sm:text-xl font-semibold mb-4 sm:mb-6">{"Support"}</h3>
                        <button
                            id="feedbackBtn"
                            onclick={on_feedback}
                            class="inline-flex items-center px-5 py-3 rounded-full bg-gradient-to-r from-purple-500 to-blue-500 text-white font-semibold hover:from-purple-600 hover:to-blue-600 transition min-h-[44px]"
                        >
                            <i class="fas fa-comment-dots mr-2"></i>
                            {"Send Feedback"}
                        </button>
                    </div>
                </div>

                <div class="border-t border-white/10 mt-8 sm:mt-12 pt-6 sm:pt-8 text-center text-gray-500 text-sm">
                    {"Smart India Hackathon internal round"}
                </div>
            </div>
        </footer>
    }
}
