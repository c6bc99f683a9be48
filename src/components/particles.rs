use gloo_timers::callback::Interval;
use web_sys::js_sys;
use yew::prelude::*;

const SPAWN_INTERVAL_MS: u32 = 300;
const MAX_ALIVE: usize = 20;

#[derive(Clone, PartialEq)]
struct Particle {
    id: u32,
    left_pct: f64,
    duration_ms: u32,
}

/// Decorative particles drifting up through the hero section. Purely
/// cosmetic; spawned on a fixed interval and pruned once the pool is full.
#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    let particles = use_state(Vec::<Particle>::new);
    let pool = use_mut_ref(Vec::<Particle>::new);
    let next_id = use_mut_ref(|| 0u32);

    {
        let particles = particles.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(SPAWN_INTERVAL_MS, move || {
                    let mut alive = pool.borrow_mut();
                    let id = {
                        let mut counter = next_id.borrow_mut();
                        *counter = counter.wrapping_add(1);
                        *counter
                    };
                    alive.push(Particle {
                        id,
                        left_pct: js_sys::Math::random() * 100.0,
                        duration_ms: 2_000 + (js_sys::Math::random() * 3_000.0) as u32,
                    });
                    let overflow = alive.len().saturating_sub(MAX_ALIVE);
                    if overflow > 0 {
                        alive.drain(..overflow);
                    }
                    particles.set(alive.clone());
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="particle-field">
            {
                particles.iter().map(|p| {
                    let style = format!(
                        "left: {:.2}%; animation-duration: {}ms;",
                        p.left_pct, p.duration_ms
                    );
                    html! { <div key={p.id} class="hero-particle" {style}></div> }
                }).collect::<Html>()
            }
            <style>
                {r#"
                    .particle-field {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        z-index: 1;
                    }

                    .hero-particle {
                        position: absolute;
                        bottom: -4px;
                        width: 2px;
                        height: 2px;
                        background: #00d4ff;
                        border-radius: 50%;
                        animation-name: particle-rise;
                        animation-timing-function: linear;
                        animation-fill-mode: forwards;
                    }

                    @keyframes particle-rise {
                        from {
                            transform: translateY(0) scale(1);
                            opacity: 1;
                        }
                        to {
                            transform: translateY(-105vh) scale(0);
                            opacity: 0;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
