use yew::prelude::*;

const LEGAL_STYLE: &str = r#"
    .legal-content {
        min-height: 100vh;
        background: #0a0a0f;
        padding: 6rem 2rem 4rem;
        color: #fff;
    }

    .legal-content h1 {
        text-align: center;
        font-size: 2rem;
        background: linear-gradient(45deg, #fff, #00d4ff);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        margin-bottom: 2.5rem;
    }

    .legal-content section {
        background: rgba(18, 18, 26, 0.8);
        border: 1px solid rgba(0, 212, 255, 0.1);
        border-radius: 12px;
        max-width: 700px;
        padding: 2rem;
        margin: 1.5rem auto;
    }

    .legal-content h2 {
        color: #00d4ff;
        font-size: 1.3rem;
        margin-bottom: 1rem;
    }

    .legal-content p, .legal-content li {
        color: #999;
        line-height: 1.6;
        margin-bottom: 1rem;
    }

    .legal-content ul {
        padding-left: 1.5rem;
    }

    .legal-content li {
        margin-bottom: 0.5rem;
    }
"#;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. Data We Store"}</h2>
                <p>{"CyberSlots keeps everything on your own device:"}</p>
                <ul>
                    <li>{"Your age confirmation (a single flag in your browser's local storage)"}</li>
                    <li>{"A local play counter per game, so the arcade can remember what you enjoyed"}</li>
                </ul>
                <p>{"Neither value ever leaves your browser. We operate no accounts and no server-side profiles."}</p>
            </section>

            <section>
                <h2>{"2. Embedded Games"}</h2>
                <p>
                    {"Games are served by partner studios inside an embedded frame. When you launch a \
                      game, your browser talks to that partner directly and their own privacy policy \
                      applies to anything happening inside the frame."}
                </p>
            </section>

            <section>
                <h2>{"3. Cookies and Tracking"}</h2>
                <ul>
                    <li>{"No analytics scripts"}</li>
                    <li>{"No advertising cookies"}</li>
                    <li>{"No fingerprinting"}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Removing Your Data"}</h2>
                <p>
                    {"Clear your browser's site data for this domain and every trace is gone, \
                      including the age confirmation. The gate will simply ask again on your next visit."}
                </p>
            </section>
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-conditions">
            <h1>{"Terms & Conditions"}</h1>

            <section>
                <h2>{"1. The Service"}</h2>
                <p>
                    {"CyberSlots is a free-play arcade. All games are provided for entertainment \
                      only; there is no real-money wagering, no prizes and no payouts of any kind."}
                </p>
            </section>

            <section>
                <h2>{"2. Age Requirement"}</h2>
                <p>
                    {"The arcade is intended for visitors aged 18 or older. Access requires an \
                      explicit age confirmation, and declining it ends the visit."}
                </p>
            </section>

            <section>
                <h2>{"3. Embedded Content"}</h2>
                <p>
                    {"Games are operated by independent partner studios and stream into the page \
                      from their servers. We do not control partner content and are not liable for \
                      interruptions or errors inside an embedded game."}
                </p>
            </section>

            <section>
                <h2>{"4. Acceptable Use"}</h2>
                <ul>
                    <li>{"Do not attempt to disrupt or reverse engineer partner game streams"}</li>
                    <li>{"Do not misrepresent your age to pass the verification gate"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Changes"}</h2>
                <p>
                    {"These terms may change as the arcade evolves; the version published here is \
                      the one in force."}
                </p>
            </section>
            <style>{LEGAL_STYLE}</style>
        </div>
    }
}
