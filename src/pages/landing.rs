use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::age_gate::AgeGate;
use crate::components::game_launcher::{GameModal, LauncherAction};
use crate::components::particles::ParticleField;
use crate::config;
use crate::dom;
use crate::storage;
use crate::ui_model::{GameKind, Launcher};
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let gate_visible = use_state(|| !storage::load_consent().is_granted());
    let launcher = use_reducer(Launcher::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Page scroll follows whichever overlay is up: the gate on a fresh
    // visit, the game modal while playing.
    {
        let locked = *gate_visible || launcher.is_open();
        use_effect_with_deps(
            move |locked: &bool| {
                dom::set_page_scroll_locked(*locked);
                || ()
            },
            locked,
        );
    }

    // Reveal game/feature cards as they scroll into view.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let reveal_callback = Closure::wrap(Box::new(move || {
                let viewport_height = window_clone
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                let Ok(cards) = document.query_selector_all(".game-card, .feature-card") else {
                    return;
                };
                for i in 0..cards.length() {
                    let Some(node) = cards.item(i) else { continue };
                    let Ok(card) = node.dyn_into::<web_sys::Element>() else {
                        continue;
                    };
                    let rect = card.get_bounding_client_rect();
                    if rect.top() < viewport_height - 50.0 {
                        let classes = card.class_name();
                        if !classes.contains("revealed") {
                            card.set_class_name(&format!("{} revealed", classes));
                            if let Some(game) = card.get_attribute("data-game") {
                                log::debug!("game card in view: {}", game);
                            }
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    reveal_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            // Initial pass so above-the-fold cards reveal without scrolling
            reveal_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        reveal_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    let on_confirm = {
        let gate_visible = gate_visible.clone();
        Callback::from(move |_| {
            storage::store_consent(storage::load_consent().grant());
            gate_visible.set(false);
            log::info!("age verification confirmed");
        })
    };

    let on_decline = Callback::from(move |_| {
        log::warn!("age verification declined, leaving the site");
        dom::alert("You must be 18 or older to access this site.");
        dom::redirect_to(config::get_exit_url());
    });

    // Every launch re-reads the persisted flag; an earlier gate pass is not
    // trusted over the store itself.
    let on_play = {
        let gate_visible = gate_visible.clone();
        let launcher = launcher.clone();
        Callback::from(move |game: GameKind| {
            let consent = storage::load_consent();
            if !consent.is_granted() {
                gate_visible.set(true);
                return;
            }
            storage::record_game_play(game);
            gloo_console::log!(format!("game played: {}", game.title()));
            launcher.dispatch(LauncherAction::Open { consent, game });
        })
    };

    let scroll_to_games = Callback::from(move |_: MouseEvent| {
        dom::smooth_scroll_to("games");
    });

    html! {
        <div class="landing-page">
            <AgeGate
                visible={*gate_visible}
                on_confirm={on_confirm}
                on_decline={on_decline}
            />

            // Hero Section
            <section id="home" class="hero">
                <ParticleField />
                <div class="hero-inner">
                    <h1>{"CyberSlots"}</h1>
                    <p class="hero-subtitle">
                        {"Free-play arcade games under the neon skyline. No downloads, no deposits, just play."}
                    </p>
                    <button class="hero-cta" onclick={scroll_to_games}>
                        {"Browse Games"}
                    </button>
                </div>
            </section>

            // Games Section
            <section id="games" class="games-section">
                <h2>{"Featured Games"}</h2>
                <p class="section-subtitle">
                    {"Pick a cabinet. Every game runs right here in your browser."}
                </p>
                <div class="games-grid">
                    {
                        GameKind::all().iter().copied().map(|game| {
                            let card_click = {
                                let on_play = on_play.clone();
                                Callback::from(move |_: MouseEvent| on_play.emit(game))
                            };
                            let button_click = {
                                let on_play = on_play.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.stop_propagation();
                                    on_play.emit(game);
                                })
                            };
                            html! {
                                <div
                                    key={game.title()}
                                    class="game-card"
                                    data-game={game.play_url()}
                                    onclick={card_click}
                                >
                                    <div class="game-card-icon">{game.icon()}</div>
                                    <h3>{game.title()}</h3>
                                    <p>{game.tagline()}</p>
                                    <button class="play-btn" onclick={button_click}>
                                        {"Play Now"}
                                    </button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </section>

            // Features Section
            <section id="features" class="features-section">
                <h2>{"Why CyberSlots"}</h2>
                <div class="features-grid">
                    <div class="feature-card">
                        <div class="feature-icon">{"⚡"}</div>
                        <h3>{"Instant Play"}</h3>
                        <p>{"Games stream straight into the page. Nothing to install, nothing to update."}</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"🆓"}</div>
                        <h3>{"Always Free"}</h3>
                        <p>{"Every cabinet is free-play. No wallets, no deposits, no real-money wagering."}</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"📱"}</div>
                        <h3>{"Any Screen"}</h3>
                        <p>{"Desktop, tablet or phone. The arcade follows your viewport."}</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">{"🔒"}</div>
                        <h3>{"Age Checked"}</h3>
                        <p>{"Adults only. The arcade stays behind an 18+ gate, every visit."}</p>
                    </div>
                </div>
            </section>

            // About Section
            <section id="about" class="about-section">
                <h2>{"About the Arcade"}</h2>
                <p>
                    {"CyberSlots is a showcase of free-play casino-style games from independent \
                      studios. Games run in an embedded frame served by our partners; we never \
                      handle money, accounts or winnings."}
                </p>
                <p>
                    {"Play responsibly. If gaming stops being fun, take a break. The neon will \
                      still be here tomorrow."}
                </p>
            </section>

            <footer class="site-footer">
                <div class="footer-links">
                    <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                    {" | "}
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </div>
                <p>{"18+ only. Games are for entertainment purposes."}</p>
                <p class="footer-copyright">{"© 2026 CyberSlots"}</p>
            </footer>

            <GameModal launcher={launcher.clone()} />

            <style>
                {r#"
                    .landing-page {
                        background: #0a0a0f;
                        color: #fff;
                        min-height: 100vh;
                        font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                    }

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: radial-gradient(circle at 50% 20%, rgba(0, 212, 255, 0.12), transparent 60%),
                                    #0a0a0f;
                        overflow: hidden;
                    }

                    .hero-inner {
                        position: relative;
                        z-index: 2;
                        padding: 2rem;
                    }

                    .hero h1 {
                        font-size: 4rem;
                        letter-spacing: 0.2em;
                        background: linear-gradient(45deg, #00d4ff, #ff0080);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        margin-bottom: 1rem;
                    }

                    .hero-subtitle {
                        color: #aaa;
                        font-size: 1.2rem;
                        max-width: 560px;
                        margin: 0 auto 2.5rem;
                        line-height: 1.6;
                    }

                    .hero-cta {
                        background: linear-gradient(45deg, #00d4ff, #0099cc);
                        color: #001018;
                        font-size: 1.1rem;
                        font-weight: 600;
                        border: none;
                        border-radius: 8px;
                        padding: 1rem 2.5rem;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .hero-cta:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 6px 24px rgba(0, 212, 255, 0.4);
                    }

                    .games-section, .features-section, .about-section {
                        padding: 5rem 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .games-section h2, .features-section h2, .about-section h2 {
                        font-size: 2.2rem;
                        color: #00d4ff;
                        margin-bottom: 1rem;
                    }

                    .section-subtitle {
                        color: #888;
                        margin-bottom: 3rem;
                    }

                    .games-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }

                    .game-card, .feature-card {
                        background: #12121a;
                        border: 1px solid rgba(0, 212, 255, 0.15);
                        border-radius: 12px;
                        padding: 2rem 1.5rem;
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease,
                                    border-color 0.3s ease, box-shadow 0.3s ease;
                    }

                    .game-card.revealed, .feature-card.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    .game-card {
                        cursor: pointer;
                    }

                    .game-card:hover {
                        border-color: rgba(0, 212, 255, 0.5);
                        box-shadow: 0 8px 32px rgba(0, 212, 255, 0.15);
                    }

                    .game-card-icon, .feature-icon {
                        font-size: 2.6rem;
                        margin-bottom: 1rem;
                    }

                    .game-card h3, .feature-card h3 {
                        color: #fff;
                        margin-bottom: 0.6rem;
                    }

                    .game-card p, .feature-card p {
                        color: #888;
                        line-height: 1.5;
                        margin-bottom: 1.2rem;
                    }

                    .play-btn {
                        background: transparent;
                        border: 1px solid #00d4ff;
                        color: #00d4ff;
                        padding: 0.7rem 1.8rem;
                        border-radius: 6px;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .play-btn:hover {
                        background: rgba(0, 212, 255, 0.1);
                        transform: translateY(-2px);
                    }

                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }

                    .about-section p {
                        color: #999;
                        line-height: 1.7;
                        max-width: 720px;
                        margin: 0 auto 1.2rem;
                    }

                    .site-footer {
                        border-top: 1px solid rgba(0, 212, 255, 0.1);
                        padding: 3rem 2rem;
                        text-align: center;
                        color: #666;
                    }

                    .footer-links {
                        margin-bottom: 1rem;
                    }

                    .footer-links a {
                        color: #00d4ff;
                        text-decoration: none;
                    }

                    .footer-links a:hover {
                        text-decoration: underline;
                    }

                    .footer-copyright {
                        font-size: 0.85rem;
                        margin-top: 0.5rem;
                    }
                "#}
            </style>
        </div>
    }
}
