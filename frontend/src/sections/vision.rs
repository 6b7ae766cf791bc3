use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::utils::motion::{RISE, SECTION_FADE};

const VISION_CSS: &str = r#"
    .vision-section {
        position: relative;
        padding: 8rem 1.5rem;
    }
    .vision-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(90deg, rgba(30, 58, 138, 0.2), rgba(88, 28, 135, 0.2));
        backdrop-filter: blur(4px);
    }
    .vision-content {
        position: relative;
        z-index: 1;
        max-width: 72rem;
        margin: 0 auto;
        text-align: center;
    }
    .vision-content .section-icon {
        font-size: 4rem;
        color: var(--accent, #22d3ee);
        margin-bottom: 2rem;
    }
    .vision-content p {
        font-size: 1.25rem;
        line-height: 1.8;
        max-width: 56rem;
        margin: 0 auto;
        color: var(--text-muted, #cbd5e1);
    }
"#;

#[function_component(VisionSection)]
pub fn vision_section() -> Html {
    html! {
        <Reveal tag="section" class="vision-section" entrance={SECTION_FADE}>
            <style>{VISION_CSS}</style>
            <div class="vision-backdrop"></div>
            <div class="vision-content">
                <Reveal class="glass-card" entrance={RISE}>
                    <i class="fas fa-wand-magic-sparkles section-icon"></i>
                    <h2 class="section-title">{"Visiomme"}</h2>
                    <p>
                        {"Uskomme, että jokainen kauppias ansaitsee pääsyn instituutioiden tasoisiin työkaluihin. "}
                        {"MikroBot demokratisoi kvantitatiivisen kaupankäynnin ja tekee siitä saavutettavan kaikille."}
                    </p>
                </Reveal>
            </div>
        </Reveal>
    }
}
