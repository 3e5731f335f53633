use crate::loader::{load_problem_statements, load_teams_data};
use log::debug;
use shared::{Showcase, ShowcaseAction};
use std::ops::Deref;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Reducer wrapper around the page state. All mutation goes through
/// [`Showcase::apply`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowcaseStore {
    pub showcase: Showcase,
}

impl Deref for ShowcaseStore {
    type Target = Showcase;

    fn deref(&self) -> &Self::Target {
        &self.showcase
    }
}

impl Reducible for ShowcaseStore {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!("Showcase action: {}", action.label());
        let mut next = (*self).clone();
        next.showcase.apply(action);
        Rc::new(next)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseContext {
    pub state: Rc<ShowcaseStore>,
    pub dispatch: Callback<ShowcaseAction>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ShowcaseProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ShowcaseProvider)]
pub fn showcase_provider(props: &ShowcaseProviderProps) -> Html {
    let store = use_reducer(ShowcaseStore::default);

    let dispatch = {
        let dispatcher = store.dispatcher();
        use_callback((), move |action: ShowcaseAction, _| dispatcher.dispatch(action))
    };

    // Catalogue and roster load once per page view; the jury section loads
    // its own data when it mounts.
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            let problems = dispatch.clone();
            spawn_local(async move {
                load_problem_statements(problems).await;
            });
            spawn_local(async move {
                load_teams_data(dispatch).await;
            });
            || ()
        });
    }

    let context = ShowcaseContext {
        state: Rc::new((*store).clone()),
        dispatch,
    };

    html! {
        <ContextProvider<ShowcaseContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ShowcaseContext>>
    }
}
