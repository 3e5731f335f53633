use crate::config::Config;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FallbackImageProps {
    /// `None` renders the placeholder straight away
    pub src: Option<AttrValue>,
    pub alt: AttrValue,
    /// Extra classes applied only while the real photo is shown
    #[prop_or_default]
    pub cover_class: Classes,
}

/// Photo that swaps itself for the placeholder logo when it fails to load.
#[function_component(FallbackImage)]
pub fn fallback_image(props: &FallbackImageProps) -> Html {
    let failed = use_state_eq(|| false);

    {
        let failed = failed.clone();
        use_effect_with(props.src.clone(), move |_| {
            failed.set(false);
            || ()
        });
    }

    let on_error = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    match props.src.as_ref().filter(|_| !*failed) {
        Some(src) => html! {
            <img
                src={src.clone()}
                alt={props.alt.clone()}
                class={classes!("w-full", "h-full", "object-cover", props.cover_class.clone())}
                onerror={on_error}
            />
        },
        None => html! {
            <img
                src={Config::placeholder_image()}
                alt={props.alt.clone()}
                class="w-full h-full object-contain p-4"
            />
        },
    }
}
