use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::ui_model::{
    Consent, GameKind, Launcher, FRAME_SETTLE_MS, FRAME_TEARDOWN_MS,
};

/// Everything that can happen to the launcher. All mutations flow through
/// the reducer so deferred timers always act on the current state instead of
/// a stale snapshot.
pub enum LauncherAction {
    Open { consent: Consent, game: GameKind },
    SettleElapsed { epoch: u32 },
    EmbedFailed,
    Close,
    TeardownElapsed { epoch: u32 },
}

impl Reducible for Launcher {
    type Action = LauncherAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LauncherAction::Open { consent, game } => {
                next.open(consent, game);
            }
            LauncherAction::SettleElapsed { epoch } => next.settle_elapsed(epoch),
            LauncherAction::EmbedFailed => next.embed_failed(),
            LauncherAction::Close => next.close(),
            LauncherAction::TeardownElapsed { epoch } => {
                next.teardown_elapsed(epoch);
            }
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct GameModalProps {
    pub launcher: UseReducerHandle<Launcher>,
}

/// The game modal. Stays mounted so the close transition can play out while
/// the embedded frame keeps its source; the deferred teardown clears the
/// source once the modal is visually gone.
#[function_component(GameModal)]
pub fn game_modal(props: &GameModalProps) -> Html {
    let launcher = props.launcher.clone();

    // Escape closes the modal; the reducer ignores it while already closed.
    {
        let launcher = launcher.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if e.key() == "Escape" {
                        launcher.dispatch(LauncherAction::Close);
                    }
                }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
                document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Deferred frame teardown. The timer lives inside this effect, so a
    // reopen re-runs the effect and drops (cancels) a pending teardown.
    {
        let launcher = launcher.clone();
        let deps = (launcher.phase(), launcher.epoch());
        use_effect_with_deps(
            move |_| {
                let pending = launcher.pending_teardown().map(|epoch| {
                    let launcher = launcher.clone();
                    Timeout::new(FRAME_TEARDOWN_MS, move || {
                        launcher.dispatch(LauncherAction::TeardownElapsed { epoch });
                    })
                });
                move || drop(pending)
            },
            deps,
        );
    }

    let onload = {
        let launcher = launcher.clone();
        Callback::from(move |_: Event| {
            if !launcher.loading_visible() {
                return;
            }
            let launcher = launcher.clone();
            let epoch = launcher.epoch();
            wasm_bindgen_futures::spawn_local(async move {
                // Let the embed finish styling itself before the overlay lifts.
                TimeoutFuture::new(FRAME_SETTLE_MS).await;
                launcher.dispatch(LauncherAction::SettleElapsed { epoch });
            });
        })
    };

    let onerror = {
        let launcher = launcher.clone();
        Callback::from(move |_: Event| {
            gloo_console::warn!("game frame failed to load; showing inline notice");
            launcher.dispatch(LauncherAction::EmbedFailed);
        })
    };

    let close_click = {
        let launcher = launcher.clone();
        Callback::from(move |_: MouseEvent| launcher.dispatch(LauncherAction::Close))
    };

    // Clicking the dark backdrop closes; clicks inside the content bubble up
    // with a different target and are ignored.
    let backdrop_click = {
        let launcher = launcher.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target().is_some() && e.target() == e.current_target() {
                launcher.dispatch(LauncherAction::Close);
            }
        })
    };

    let title = launcher.game().map(GameKind::title).unwrap_or("CyberSlots");
    let frame_src = launcher.frame_src().unwrap_or("").to_string();

    html! {
        <div
            class={classes!("game-modal", launcher.is_open().then(|| "show"))}
            onclick={backdrop_click}
        >
            <div class="game-modal-content">
                <div class="game-modal-header">
                    <h3>{title}</h3>
                    <button class="close-game-button" onclick={close_click}>{"×"}</button>
                </div>
                <div class="game-frame-container">
                    <iframe
                        class="game-frame"
                        src={frame_src}
                        title={title}
                        allow="autoplay; fullscreen"
                        {onload}
                        {onerror}
                    />
                    if launcher.loading_visible() {
                        <div class="game-loading">
                            <div class="game-loading-spinner"></div>
                            <p>{"Loading game..."}</p>
                        </div>
                    }
                    if launcher.error_visible() {
                        <div class="game-load-error">
                            <span class="game-load-error-icon">{"⚠"}</span>
                            <h3>{"Game Loading Error"}</h3>
                            <p>{"Please try again later or contact support."}</p>
                        </div>
                    }
                </div>
            </div>
            <style>
                {r#"
                    .game-modal {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        background: rgba(0, 0, 0, 0.85);
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        z-index: 1000;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.3s ease, visibility 0.3s ease;
                    }

                    .game-modal.show {
                        opacity: 1;
                        visibility: visible;
                    }

                    .game-modal-content {
                        background: #12121a;
                        border: 1px solid rgba(0, 212, 255, 0.25);
                        border-radius: 12px;
                        width: min(1100px, 94vw);
                        height: min(720px, 90vh);
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                    }

                    .game-modal-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.8rem 1.2rem;
                        border-bottom: 1px solid rgba(0, 212, 255, 0.15);
                    }

                    .game-modal-header h3 {
                        color: #00d4ff;
                        margin: 0;
                    }

                    .close-game-button {
                        background: transparent;
                        border: none;
                        color: #ccc;
                        font-size: 1.8rem;
                        line-height: 1;
                        cursor: pointer;
                        transition: color 0.2s ease;
                    }

                    .close-game-button:hover {
                        color: #ff0080;
                    }

                    .game-frame-container {
                        position: relative;
                        flex: 1;
                    }

                    .game-frame {
                        width: 100%;
                        height: 100%;
                        border: none;
                        background: #000;
                    }

                    .game-loading {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        background: #0a0a0f;
                        color: #888;
                    }

                    .game-loading-spinner {
                        width: 48px;
                        height: 48px;
                        border: 4px solid rgba(0, 212, 255, 0.2);
                        border-top-color: #00d4ff;
                        border-radius: 50%;
                        animation: game-spinner 0.8s linear infinite;
                    }

                    @keyframes game-spinner {
                        to { transform: rotate(360deg); }
                    }

                    .game-load-error {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #0a0a0f;
                        color: #ff0080;
                    }

                    .game-load-error-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }

                    .game-load-error p {
                        color: #999;
                    }
                "#}
            </style>
        </div>
    }
}
