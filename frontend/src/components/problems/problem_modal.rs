use crate::components::common_modal::Modal;
use shared::presentation::{category_gradient, category_icon};
use shared::ProblemStatement;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ProblemModalProps {
    pub problem: Option<ProblemStatement>,
    pub on_close: Callback<()>,
}

fn guideline(icon: &'static str, colour: &'static str, title: &'static str, detail: &'static str) -> Html {
    html! {
        <div class="flex items-start">
            <i class={classes!("fas", icon, colour, "mt-1", "mr-3")}></i>
            <div>
                <h6 class="font-semibold text-white">{title}</h6>
                <p class="text-gray-300 text-sm">{detail}</p>
            </div>
        </div>
    }
}

fn call_to_action() -> Html {
    html! {
        <div class="bg-gradient-to-r from-purple-600/20 to-pink-600/20 rounded-2xl p-8 border border-purple-500/30 text-center">
            <div class="mb-6">
                <i class="fas fa-rocket text-4xl text-purple-400 mb-4"></i>
                <h5 class="text-2xl font-bold text-white mb-2">{"Ready to Take on This Challenge?"}</h5>
                <p class="text-gray-300">
                    {"Join thousands of innovators and showcase your skills in this exciting problem statement!"}
                </p>
            </div>
            <div class="flex flex-col md:flex-row gap-4 justify-center items-center text-sm text-gray-400">
                <div class="flex items-center"><i class="fas fa-calendar mr-2 text-purple-400"></i>{"Registration closes soon"}</div>
                <div class="flex items-center"><i class="fas fa-users mr-2 text-blue-400"></i>{"Limited teams per problem"}</div>
                <div class="flex items-center"><i class="fas fa-medal mr-2 text-yellow-400"></i>{"Win amazing prizes"}</div>
            </div>
        </div>
    }
}

/// Full details of one problem statement.
#[function_component(ProblemModal)]
pub fn problem_modal(props: &ProblemModalProps) -> Html {
    let Some(ps) = props.problem.as_ref() else {
        return html! {};
    };

    html! {
        <Modal is_open={true} on_close={props.on_close.clone()} class="max-w-4xl">
            <div id="modalBody" class="space-y-8">
                <div class="bg-gradient-to-r from-purple-500/10 to-blue-500/10 rounded-2xl p-6 border border-purple-500/20">
                    <div class="flex items-center gap-3 mb-3">
                        <span class={classes!(
                            "text-sm", "font-bold", "px-4", "py-2", "rounded-full", "bg-gradient-to-r",
                            category_gradient(&ps.category), "text-white", "shadow-lg"
                        )}>
                            <i class={classes!("fas", category_icon(&ps.category), "mr-2")}></i>
                            {ps.category.as_str()}
                        </span>
                        <span class="text-xs text-gray-400 font-mono bg-slate-800 px-3 py-1 rounded-full border border-slate-600">
                            {format!("ID: {}", ps.id)}
                        </span>
                    </div>
                    <h4 class="text-2xl md:text-3xl font-bold text-white mb-3 leading-tight break-words">{&ps.title}</h4>
                    <div class="theme-badge bg-gradient-to-r from-purple-600 to-blue-600 rounded-full px-4 py-2 inline-block">
                        <span class="text-sm font-semibold text-white">
                            <i class="fas fa-tag mr-2"></i>{&ps.theme}
                        </span>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="bg-slate-800/50 rounded-xl p-6 border border-slate-700">
                        <div class="flex items-center mb-3">
                            <i class="fas fa-building text-purple-400 text-lg mr-3"></i>
                            <label class="text-sm font-bold text-purple-400 uppercase tracking-wide">{"Department"}</label>
                        </div>
                        <p class="text-white font-semibold text-lg">{&ps.department}</p>
                    </div>
                    <div class="bg-slate-800/50 rounded-xl p-6 border border-slate-700">
                        <div class="flex items-center mb-3">
                            <i class="fas fa-university text-blue-400 text-lg mr-3"></i>
                            <label class="text-sm font-bold text-blue-400 uppercase tracking-wide">{"Organisation"}</label>
                        </div>
                        <p class="text-white font-semibold text-lg break-words">{&ps.organisation}</p>
                    </div>
                </div>

                <div class="bg-gradient-to-br from-slate-800/70 to-slate-900/70 rounded-2xl p-8 border border-slate-600">
                    <div class="flex items-center mb-6">
                        <div class="w-10 h-10 rounded-full bg-gradient-to-r from-purple-500 to-blue-500 flex items-center justify-center mr-4">
                            <i class="fas fa-file-alt text-white"></i>
                        </div>
                        <h5 class="text-xl font-bold text-white">{"Problem Description"}</h5>
                    </div>
                    <p class="text-gray-300 leading-relaxed text-base break-words whitespace-pre-wrap">{&ps.description}</p>
                </div>

                if let Some(dataset) = &ps.dataset_file {
                    <div class="bg-green-500/10 rounded-xl p-6 border border-green-500/30">
                        <div class="flex items-center mb-3">
                            <i class="fas fa-database text-green-400 text-lg mr-3"></i>
                            <label class="text-sm font-bold text-green-400 uppercase tracking-wide">{"Available Dataset"}</label>
                        </div>
                        <p class="text-green-200 font-semibold">{dataset}</p>
                        <p class="text-green-300/70 text-sm mt-2">
                            <i class="fas fa-info-circle mr-2"></i>
                            {"Dataset provided to help you get started with your solution"}
                        </p>
                    </div>
                }

                <div class="bg-gradient-to-r from-blue-500/10 to-purple-500/10 rounded-2xl p-8 border border-blue-500/20">
                    <h5 class="text-xl font-bold text-white mb-6 flex items-center">
                        <i class="fas fa-clipboard-list text-blue-400 mr-3"></i>
                        {"Implementation Guidelines"}
                    </h5>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <div class="space-y-4">
                            {guideline("fa-users", "text-purple-400", "Team Size", "2-6 members per team")}
                            {guideline("fa-clock", "text-blue-400", "Duration", "48 hours coding marathon")}
                        </div>
                        <div class="space-y-4">
                            {guideline("fa-code", "text-green-400", "Technology", "Any programming language/framework")}
                            {guideline("fa-trophy", "text-yellow-400", "Prizes", "Cash prizes & certificates")}
                        </div>
                    </div>
                </div>

                {call_to_action()}
            </div>
        </Modal>
    }
}
