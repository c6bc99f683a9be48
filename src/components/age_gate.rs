use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AgeGateProps {
    pub visible: bool,
    pub on_confirm: Callback<()>,
    pub on_decline: Callback<()>,
}

/// Blocking age-verification overlay. Unlike the game modal, the gate cannot
/// be dismissed from the backdrop or with Escape; only the two buttons
/// resolve it.
#[function_component(AgeGate)]
pub fn age_gate(props: &AgeGateProps) -> Html {
    if !props.visible {
        return html! {};
    }

    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let decline = {
        let on_decline = props.on_decline.clone();
        Callback::from(move |_: MouseEvent| on_decline.emit(()))
    };

    html! {
        <div class="age-modal-overlay">
            <div class="age-modal-content">
                <div class="age-modal-badge">{"18+"}</div>
                <h2>{"Age Verification Required"}</h2>
                <p>
                    {"CyberSlots is a free-play arcade intended for adults. \
                      Please confirm that you are 18 years of age or older."}
                </p>
                <div class="age-modal-buttons">
                    <button class="age-confirm-button" onclick={confirm}>
                        {"I am 18 or older"}
                    </button>
                    <button class="age-decline-button" onclick={decline}>
                        {"I am under 18"}
                    </button>
                </div>
                <p class="age-modal-note">
                    {"Games are for entertainment only. No real-money wagering takes place on this site."}
                </p>
            </div>
            <style>
                {r#"
                    .age-modal-overlay {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        background: rgba(0, 0, 0, 0.92);
                        backdrop-filter: blur(8px);
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        z-index: 2000;
                    }

                    .age-modal-content {
                        background: #12121a;
                        border: 1px solid rgba(0, 212, 255, 0.25);
                        border-radius: 16px;
                        padding: 3rem 2.5rem;
                        max-width: 460px;
                        width: 90%;
                        text-align: center;
                        box-shadow: 0 8px 40px rgba(0, 212, 255, 0.15);
                    }

                    .age-modal-badge {
                        width: 72px;
                        height: 72px;
                        margin: 0 auto 1.5rem;
                        border: 3px solid #ff0080;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #ff0080;
                        font-size: 1.6rem;
                        font-weight: 700;
                    }

                    .age-modal-content h2 {
                        color: #fff;
                        margin-bottom: 1rem;
                    }

                    .age-modal-content p {
                        color: #bbb;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }

                    .age-modal-buttons {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                    }

                    .age-confirm-button {
                        background: linear-gradient(45deg, #00d4ff, #0099cc);
                        border: none;
                        color: #001018;
                        font-weight: 600;
                        padding: 0.9rem 1.6rem;
                        border-radius: 8px;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .age-confirm-button:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 4px 16px rgba(0, 212, 255, 0.4);
                    }

                    .age-decline-button {
                        background: transparent;
                        border: 1px solid rgba(255, 0, 128, 0.5);
                        color: #ff0080;
                        padding: 0.9rem 1.6rem;
                        border-radius: 8px;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .age-decline-button:hover {
                        background: rgba(255, 0, 128, 0.1);
                    }

                    .age-modal-note {
                        font-size: 0.8rem;
                        color: #777;
                        margin-top: 1.5rem;
                        margin-bottom: 0;
                    }
                "#}
            </style>
        </div>
    }
}
