use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod storage;
mod ui_model;

mod components {
    pub mod age_gate;
    pub mod game_launcher;
    pub mod particles;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use pages::landing::Landing;
use pages::termsprivacy::{PrivacyPolicy, TermsAndConditions};
use ui_model::NAV_BREAKPOINT_PX;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // The mobile menu resets once the viewport grows past the breakpoint.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let resize_callback = Closure::wrap(Box::new(move || {
                    let width = window_clone
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    if width > NAV_BREAKPOINT_PX {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // In-page section link: smooth scroll when the section exists in the
    // current document, otherwise fall through to normal navigation.
    let section_link = |id: &'static str, label: &'static str| -> Html {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            if dom::smooth_scroll_to(id) {
                e.prevent_default();
            }
            menu_open.set(false);
        });
        html! {
            <a class="nav-link" href={format!("/#{}", id)} {onclick}>{label}</a>
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"CyberSlots"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { section_link("home", "Home") }
                    { section_link("games", "Games") }
                    { section_link("features", "Features") }
                    { section_link("about", "About") }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(10, 10, 15, 0.95);
                        backdrop-filter: blur(10px);
                        box-shadow: 0 2px 16px rgba(0, 0, 0, 0.4);
                    }

                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        color: #00d4ff;
                        font-size: 1.3rem;
                        font-weight: 700;
                        letter-spacing: 0.15em;
                        text-decoration: none;
                    }

                    .nav-link {
                        color: #ccc;
                        text-decoration: none;
                        margin-left: 2rem;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #00d4ff;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: transparent;
                        border: none;
                        cursor: pointer;
                        padding: 6px;
                    }

                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #00d4ff;
                        transition: all 0.3s ease;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-right {
                            position: fixed;
                            top: 60px;
                            right: -100%;
                            width: 100%;
                            height: calc(100vh - 60px);
                            background: rgba(10, 10, 15, 0.98);
                            backdrop-filter: blur(10px);
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            padding-top: 3rem;
                            transition: right 0.3s ease;
                        }

                        .nav-right.mobile-menu-open {
                            right: 0;
                        }

                        .nav-right .nav-link {
                            font-size: 1.4rem;
                            margin: 1rem 0;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // Console easter egg
    info!(
        "{}",
        r#"
╔═══════════════════════════════════════╗
║              CyberSlots               ║
║         Welcome to the Future!        ║
║                                       ║
║  Games are for entertainment only     ║
║  Play responsibly - 18+ only          ║
╚═══════════════════════════════════════╝
"#
    );

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
