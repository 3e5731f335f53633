use js_sys::Math;
use yew::prelude::*;

const PARTICLE_COUNT: usize = 50;

#[derive(Clone, PartialEq)]
struct Particle {
    left_percent: f64,
    delay_s: f64,
    duration_s: f64,
}

impl Particle {
    fn random() -> Self {
        Self {
            left_percent: Math::random() * 100.0,
            delay_s: Math::random() * 20.0,
            duration_s: Math::random() * 10.0 + 10.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left_percent, self.delay_s, self.duration_s
        )
    }
}

/// Decorative floating dots behind the page. Positions are rolled once per mount.
#[function_component(Particles)]
pub fn particles() -> Html {
    let particles = use_state(|| {
        (0..PARTICLE_COUNT).map(|_| Particle::random()).collect::<Vec<_>>()
    });

    html! {
        <div id="particles" class="fixed inset-0 pointer-events-none overflow-hidden -z-10">
            { for particles.iter().map(|p| html! {
                <div class="particle" style={p.style()}></div>
            }) }
        </div>
    }
}
