use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::utils::motion::{GROW, SECTION_FADE};

const FINAL_CTA_CSS: &str = r#"
    .final-cta-section {
        position: relative;
        padding: 8rem 1.5rem;
    }
    .final-cta-backdrop {
        position: absolute;
        inset: 0;
        background: linear-gradient(90deg, rgba(22, 78, 99, 0.3), rgba(30, 58, 138, 0.3), rgba(88, 28, 135, 0.3));
        backdrop-filter: blur(4px);
    }
    .final-cta-content {
        position: relative;
        z-index: 1;
        max-width: 56rem;
        margin: 0 auto;
        text-align: center;
    }
    .final-cta-content p {
        font-size: 1.25rem;
        line-height: 1.7;
        margin-bottom: 3rem;
        color: var(--text-muted, #cbd5e1);
    }
    .cta-button.final {
        padding: 1.5rem 3rem;
        font-size: 1.25rem;
        font-weight: 600;
        background: linear-gradient(90deg, #06b6d4, #2563eb);
    }
    .cta-button.final:hover {
        box-shadow: 0 25px 50px rgba(6, 182, 212, 0.5);
    }
    .cta-button.final::after {
        background: linear-gradient(90deg, #2563eb, #9333ea);
        transition-duration: 0.5s;
    }
    .cta-button.final:hover .cta-arrow {
        transform: translateY(-2px) rotate(45deg);
    }
"#;

#[function_component(FinalCtaSection)]
pub fn final_cta_section() -> Html {
    html! {
        <Reveal tag="section" class="final-cta-section" entrance={SECTION_FADE}>
            <style>{FINAL_CTA_CSS}</style>
            <div class="final-cta-backdrop"></div>
            <div class="final-cta-content">
                <Reveal class="glass-card" entrance={GROW}>
                    <h2 class="section-title">{"Valmis aloittamaan?"}</h2>
                    <p>
                        {"Liity tuhansien kauppiaiden joukkoon, jotka ovat mullistaneet kaupankäyntinsä MikroBotilla."}
                    </p>
                    <button class="cta-button final" type="button">
                        <span class="cta-label">
                            {"Aloita ilmainen kokeilu"}
                            <i class="fas fa-arrow-up cta-arrow"></i>
                        </span>
                    </button>
                </Reveal>
            </div>
        </Reveal>
    }
}
