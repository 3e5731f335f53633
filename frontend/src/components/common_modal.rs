use shared::menu::{is_swipe_up, MODAL_SWIPE_THRESHOLD};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay shell shared by the detail and feedback dialogs. Closes on the
/// close button, a click on the backdrop, or an upward swipe.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let touch_start_y = use_mut_ref(|| 0.0_f64);
    let touch_current_y = use_mut_ref(|| 0.0_f64);

    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_touch_start = {
        let touch_start_y = touch_start_y.clone();
        let touch_current_y = touch_current_y.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                let y = f64::from(touch.client_y());
                *touch_start_y.borrow_mut() = y;
                *touch_current_y.borrow_mut() = y;
            }
        })
    };

    let on_touch_move = {
        let touch_current_y = touch_current_y.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                *touch_current_y.borrow_mut() = f64::from(touch.client_y());
            }
        })
    };

    let on_touch_end = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: TouchEvent| {
            if is_swipe_up(*touch_start_y.borrow(), *touch_current_y.borrow(), MODAL_SWIPE_THRESHOLD) {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            class="modal fixed inset-0 z-50 flex items-center justify-center p-4"
            ontouchstart={on_touch_start}
            ontouchmove={on_touch_move}
            ontouchend={on_touch_end}
        >
            <div
                class="absolute inset-0 bg-black/70 backdrop-blur-sm"
                onclick={on_overlay_click}
            ></div>
            <div
                class={classes!(
                    "relative", "glass-card", "rounded-2xl", "shadow-2xl", "w-full",
                    "max-h-[90vh]", "overflow-y-auto", "p-6", "sm:p-8",
                    props.class.clone()
                )}
                onclick={on_modal_click}
            >
                <div class="flex items-center justify-between mb-6">
                    if let Some(title) = &props.title {
                        <h3 class="text-2xl font-bold text-white">{title.clone()}</h3>
                    } else {
                        <span></span>
                    }
                    <button
                        class="close-btn text-gray-400 hover:text-white transition min-h-[44px] min-w-[44px]"
                        aria-label="Close"
                        onclick={on_close_click}
                    >
                        <i class="fas fa-times text-2xl"></i>
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
