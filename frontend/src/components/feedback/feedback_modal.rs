use crate::api::feedback::submit_feedback;
use crate::components::common_modal::Modal;
use crate::dom;
use chrono::{SecondsFormat, Utc};
use gloo_timers::callback::Timeout;
use log::{debug, error};
use shared::dto::feedback::{FeedbackSession, FeedbackSubmission, Priority, SubmissionStatus, ERROR_BANNER_MS};
use shared::SharedError;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const FEEDBACK_TYPES: [&str; 4] = ["General Feedback", "Bug Report", "Feature Request", "Content Issue"];

#[derive(Properties, Clone, PartialEq)]
pub struct FeedbackModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn blank_submission() -> FeedbackSubmission {
    FeedbackSubmission {
        feedback_type: FEEDBACK_TYPES[0].to_string(),
        ..Default::default()
    }
}

#[function_component(FeedbackModal)]
pub fn feedback_modal(props: &FeedbackModalProps) -> Html {
    let form = use_state(blank_submission);
    let status = use_state_eq(SubmissionStatus::default);
    let banner = use_state(|| None::<String>);
    let banner_timer = use_mut_ref(|| None::<Timeout>);
    let session = use_mut_ref(FeedbackSession::default);

    // Capture the browser context each time the form is opened
    {
        let form = form.clone();
        let status = status.clone();
        let banner = banner.clone();
        use_effect_with(props.is_open, move |is_open| {
            if *is_open {
                status.set(SubmissionStatus::Editing);
                banner.set(None);
                let mut next = (*form).clone();
                next.browser_info = dom::current_browser_info();
                next.page_url = dom::current_page_url();
                next.timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                form.set(next);
            }
            || ()
        });
    }

    let show_error = {
        let banner = banner.clone();
        let banner_timer = banner_timer.clone();
        Callback::from(move |detail: String| {
            banner.set(Some(detail));
            let banner = banner.clone();
            // Replacing the handle cancels a banner timer still pending
            *banner_timer.borrow_mut() = Some(Timeout::new(ERROR_BANNER_MS, move || banner.set(None)));
        })
    };

    let on_close = {
        let form = form.clone();
        let status = status.clone();
        let banner = banner.clone();
        let session = session.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            session.borrow_mut().close();
            form.set(blank_submission());
            status.set(SubmissionStatus::Editing);
            banner.set(None);
            *banner_timer.borrow_mut() = None;
            on_close.emit(());
        })
    };

    let update = |apply: fn(&mut FeedbackSubmission, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|f, v| f.email = if v.trim().is_empty() { None } else { Some(v) });
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_type = {
        let set = update(|f, v| f.feedback_type = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };
    let on_priority = |priority: Priority| {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.priority = priority;
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let show_error = show_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = (*form).clone();
            if let Err(errors) = submission.validate() {
                show_error.emit(SharedError::from(errors).to_string());
                return;
            }

            status.set(SubmissionStatus::Sending);
            let ticket = session.borrow().ticket();
            let session = session.clone();
            let status = status.clone();
            let show_error = show_error.clone();
            spawn_local(async move {
                let result = submit_feedback(&submission).await;
                if !session.borrow().is_current(ticket) {
                    debug!("Feedback form closed before the send finished");
                    return;
                }
                match result {
                    Ok(()) => status.set(SubmissionStatus::Sent),
                    Err(e) => {
                        error!("Error sending feedback: {}", e);
                        show_error.emit("Please try again later or contact us directly.".to_string());
                        status.set(SubmissionStatus::Editing);
                    }
                }
            });
        })
    };

    let input_class = "w-full bg-slate-800/70 border border-slate-600 rounded-xl px-4 py-3 text-white placeholder-gray-400 focus:outline-none focus:border-purple-500";

    html! {
        <Modal is_open={props.is_open} {on_close} title="Share Your Feedback" class="max-w-2xl">
            if *status == SubmissionStatus::Sent {
                <div id="feedbackSuccess" class="text-center py-10">
                    <i class="fas fa-check-circle text-green-400 text-5xl mb-4"></i>
                    <h4 class="text-2xl font-bold text-white mb-2">{"Thank you!"}</h4>
                    <p class="text-gray-300">{"Your feedback has been sent successfully."}</p>
                </div>
            } else {
                <form id="feedbackForm" class="space-y-5" onsubmit={on_submit}>
                    if let Some(detail) = (*banner).clone() {
                        <div class="bg-red-500/20 border border-red-500/30 rounded-xl p-4 mb-4 text-center">
                            <i class="fas fa-exclamation-triangle text-red-400 text-2xl mb-2"></i>
                            <p class="text-red-300 font-semibold">{"Sorry, there was an error sending your feedback."}</p>
                            <p class="text-red-400 text-sm">{detail}</p>
                        </div>
                    }

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <input
                            type="text" name="name" placeholder="Your name (optional)"
                            class={input_class} value={form.name.clone()} oninput={on_name}
                        />
                        <input
                            type="email" name="email" placeholder="Email (optional)"
                            class={input_class} value={form.email.clone().unwrap_or_default()} oninput={on_email}
                        />
                    </div>

                    <select name="feedback_type" class={input_class} onchange={on_type}>
                        { for FEEDBACK_TYPES.iter().map(|kind| html! {
                            <option value={*kind} selected={form.feedback_type == *kind}>{*kind}</option>
                        }) }
                    </select>

                    <fieldset>
                        <legend class="text-sm font-semibold text-gray-300 mb-2">{"Priority"}</legend>
                        <div class="flex gap-4">
                            { for Priority::ALL.iter().map(|&priority| html! {
                                <label class="flex items-center gap-2 text-gray-300 cursor-pointer min-h-[44px]">
                                    <input
                                        type="radio" name="priority" value={priority.as_str()}
                                        checked={form.priority == priority}
                                        onchange={on_priority(priority)}
                                    />
                                    {priority.as_str()}
                                </label>
                            }) }
                        </div>
                    </fieldset>

                    <textarea
                        name="message" rows="5" required=true
                        placeholder="Tell us what you think..."
                        class={input_class} value={form.message.clone()} oninput={on_message}
                    ></textarea>

                    <input type="hidden" name="browser_info" value={form.browser_info.clone()} />
                    <input type="hidden" name="page_url" value={form.page_url.clone()} />
                    <input type="hidden" name="timestamp" value={form.timestamp.clone()} />

                    <button
                        type="submit"
                        disabled={status.submit_disabled()}
                        class="w-full bg-gradient-to-r from-purple-500 to-blue-500 py-3 rounded-xl text-white font-semibold hover:from-purple-600 hover:to-blue-600 transition disabled:opacity-60 min-h-[44px]"
                    >
                        if status.submit_disabled() {
                            <i class="fas fa-spinner fa-spin mr-2"></i>{"Sending..."}
                        } else {
                            <i class="fas fa-paper-plane mr-2"></i>{"Send Feedback"}
                        }
                    </button>
                </form>
            }
        </Modal>
    }
}
