use crate::dom;
use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use shared::menu::{DismissReason, MenuEvent, MenuPhase, ORIENTATION_SETTLE_MS};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

/// Sections reachable from the navigation bar, as (anchor id, label, icon).
pub const NAV_LINKS: [(&str, &str, &str); 4] = [
    ("home", "Home", "fa-home"),
    ("problems", "Problem Statements", "fa-lightbulb"),
    ("jury", "Jury", "fa-gavel"),
    ("teams", "Selected Teams", "fa-users"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MenuState {
    phase: MenuPhase,
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, event: Self::Action) -> Rc<Self> {
        let phase = self.phase.handle(event);
        if phase == self.phase {
            self
        } else {
            Rc::new(Self { phase })
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer_eq(MenuState::default);
    let phase = menu.phase;
    let menu_ref = use_node_ref();
    let button_ref = use_node_ref();
    let touch_start_y = use_mut_ref(|| 0.0_f64);

    // Arm the settle timer for transitional phases. A newer phase drops the
    // pending timer before it fires.
    {
        let dispatcher = menu.dispatcher();
        use_effect_with(phase, move |phase| {
            let timeout = phase
                .settle_delay_ms()
                .map(|delay| Timeout::new(delay, move || dispatcher.dispatch(MenuEvent::Settled)));
            move || drop(timeout)
        });
    }

    use_effect_with(phase.locks_scroll(), |locked| {
        dom::set_body_scroll_locked(*locked);
        || ()
    });

    // Document level dismissal: outside click, Escape, orientation change
    {
        let dispatcher = menu.dispatcher();
        let menu_ref = menu_ref.clone();
        let button_ref = button_ref.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    let on_click = dispatcher.clone();
                    listeners.push(EventListener::new(&document, "click", move |event| {
                        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let inside = |node_ref: &NodeRef| {
                            node_ref
                                .get()
                                .map(|el| el.contains(target.as_ref()))
                                .unwrap_or(false)
                        };
                        if !inside(&menu_ref) && !inside(&button_ref) {
                            on_click.dispatch(MenuEvent::Dismiss(DismissReason::OutsideClick));
                        }
                    }));

                    let on_key = dispatcher.clone();
                    listeners.push(EventListener::new(&document, "keydown", move |event| {
                        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                            if event.key() == "Escape" {
                                on_key.dispatch(MenuEvent::Dismiss(DismissReason::EscapeKey));
                            }
                        }
                    }));
                }

                let on_rotate = dispatcher.clone();
                listeners.push(EventListener::new(&window, "orientationchange", move |_| {
                    let on_rotate = on_rotate.clone();
                    Timeout::new(ORIENTATION_SETTLE_MS, move || {
                        on_rotate.dispatch(MenuEvent::Dismiss(DismissReason::OrientationChange));
                    })
                    .forget();
                }));
            }
            move || drop(listeners)
        });
    }

    let toggle_mobile_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            dispatcher.dispatch(MenuEvent::Toggle);
        })
    };

    let on_touch_start = {
        let touch_start_y = touch_start_y.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                *touch_start_y.borrow_mut() = f64::from(touch.client_y());
            }
        })
    };

    let on_touch_end = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                dispatcher.dispatch(MenuEvent::Swipe {
                    start_y: *touch_start_y.borrow(),
                    end_y: f64::from(touch.client_y()),
                });
            }
        })
    };

    let link_click = |anchor: &'static str, closes_menu: bool| {
        let dispatcher = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            if dom::scroll_to_section(anchor) {
                e.prevent_default();
            }
            if closes_menu {
                dispatcher.dispatch(MenuEvent::Dismiss(DismissReason::LinkClick));
            }
        })
    };

    let menu_style = if phase.is_shown() {
        "opacity: 1; transform: translateY(0); transition: opacity 0.2s ease, transform 0.2s ease;"
    } else {
        "opacity: 0; transform: translateY(-10px); transition: opacity 0.2s ease, transform 0.2s ease;"
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-slate-900/80", "backdrop-blur-md",
            "border-b", "border-white/10", "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <a
                        href="#home"
                        onclick={link_click("home", false)}
                        class={classes!("flex", "items-center", "space-x-2", "active:scale-95")}
                    >
                        <img src="assets/images/logo.png" alt="Logo" class="h-10 w-10 object-contain" />
                        <span class="text-lg sm:text-xl font-bold bg-gradient-to-r from-purple-400 to-blue-400 bg-clip-text text-transparent">
                            {"SIH Showcase"}
                        </span>
                    </a>

                    // Desktop navigation
                    <div class={classes!("hidden", "lg:flex", "space-x-6")}>
                        { for NAV_LINKS.iter().map(|(anchor, label, _)| html! {
                            <a
                                href={format!("#{}", anchor)}
                                onclick={link_click(*anchor, false)}
                                class={classes!(
                                    "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                                    "text-white/90", "hover:bg-white/10", "hover:text-white",
                                    "transition-colors", "duration-200"
                                )}
                            >
                                {*label}
                            </a>
                        }) }
                    </div>

                    <button
                        id="mobileMenuBtn"
                        ref={button_ref}
                        onclick={toggle_mobile_menu}
                        class={classes!("lg:hidden", "p-2", "rounded-md", "min-h-[44px]", "min-w-[44px]", "hover:bg-white/10")}
                        aria-label="Toggle menu"
                        aria-expanded={phase.is_visible().to_string()}
                    >
                        <i class={classes!("fas", "text-xl", if phase.shows_close_icon() { "fa-times" } else { "fa-bars" })}></i>
                    </button>
                </div>
            </div>

            // Mobile menu
            <div
                id="mobileMenu"
                ref={menu_ref}
                class={classes!(
                    "lg:hidden", "bg-slate-900/95", "border-t", "border-white/10",
                    (!phase.is_visible()).then_some("hidden")
                )}
                style={menu_style}
                ontouchstart={on_touch_start}
                ontouchend={on_touch_end}
            >
                <div class="px-4 py-4 space-y-2">
                    { for NAV_LINKS.iter().map(|(anchor, label, icon)| html! {
                        <a
                            href={format!("#{}", anchor)}
                            onclick={link_click(*anchor, true)}
                            class="flex items-center px-4 py-3 rounded-lg text-white/90 hover:bg-white/10 min-h-[44px]"
                        >
                            <i class={classes!("fas", *icon, "mr-3", "text-purple-400")}></i>
                            {*label}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}
