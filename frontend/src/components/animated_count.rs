use gloo_timers::callback::Interval;
use shared::presentation::CountUp;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AnimatedCountProps {
    pub target: usize,
}

/// Counts from the currently shown number to `target` over about half a second.
#[function_component(AnimatedCount)]
pub fn animated_count(props: &AnimatedCountProps) -> Html {
    let shown = use_state_eq(|| 0usize);
    let last_shown = use_mut_ref(|| 0usize);

    {
        let shown = shown.clone();
        let last_shown = last_shown.clone();
        use_effect_with(props.target, move |target| {
            let mut count = CountUp::new(*last_shown.borrow(), *target);
            let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            if !count.is_finished() {
                let slot = ticker.clone();
                let interval = Interval::new(CountUp::FRAME_MS, move || {
                    let (value, done) = count.tick();
                    *last_shown.borrow_mut() = value;
                    shown.set(value);
                    if done {
                        // Target reached, stop the interval
                        let finished = slot.borrow_mut().take();
                        drop(finished);
                    }
                });
                *ticker.borrow_mut() = Some(interval);
            }
            move || drop(ticker.borrow_mut().take())
        });
    }

    html! {
        <span id="totalCount">{*shown}</span>
    }
}
