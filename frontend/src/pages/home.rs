use yew::prelude::*;

use crate::sections::{
    FeaturesSection, FinalCtaSection, FooterSection, TestimonialsSection, VisionSection,
};
use crate::utils::hooks::{use_mounted, use_scroll_y};
use crate::utils::motion::{
    HERO_CARD, HERO_CTA, HERO_FADE, HERO_LOGO, HERO_SUBTITLE, HERO_TITLE, ORB_BOTTOM_DRIFT,
    ORB_TOP_DRIFT,
};

const HOME_CSS: &str = r#"
    .home-page {
        min-height: 100vh;
        overflow: hidden;
        color: var(--text, #fff);
        background: var(--page-bg, linear-gradient(135deg, #0f172a, #581c87, #0f172a));
    }
    .orb-layer {
        position: fixed;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
    }
    .orb {
        position: absolute;
        border-radius: 9999px;
        will-change: transform;
    }
    .orb-top {
        top: -10rem;
        right: -10rem;
        width: 20rem;
        height: 20rem;
        background: linear-gradient(90deg, rgba(96, 165, 250, 0.3), rgba(147, 51, 234, 0.3));
        filter: blur(64px);
    }
    .orb-bottom {
        bottom: -10rem;
        left: -10rem;
        width: 24rem;
        height: 24rem;
        background: linear-gradient(90deg, rgba(34, 211, 238, 0.2), rgba(37, 99, 235, 0.2));
        filter: blur(64px);
    }
    .orb-pulse {
        top: 33%;
        left: 25%;
        width: 16rem;
        height: 16rem;
        background: linear-gradient(90deg, rgba(129, 140, 248, 0.1), rgba(147, 51, 234, 0.1));
        filter: blur(40px);
        animation: orb-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
    @keyframes orb-pulse {
        50% { opacity: 0.5; }
    }
    .hero-section {
        position: relative;
        z-index: 10;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 0 1.5rem;
    }
    .hero-inner {
        max-width: 80rem;
        margin: 0 auto;
        text-align: center;
    }
    .glass-card {
        padding: 3rem;
        border-radius: 1.5rem;
        background: var(--glass-bg, rgba(255, 255, 255, 0.05));
        border: 1px solid var(--glass-border, rgba(255, 255, 255, 0.1));
        backdrop-filter: blur(24px);
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .brand-mark {
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 0.75rem;
        color: #fff;
        background: linear-gradient(135deg, #22d3ee, #2563eb);
    }
    .hero-logo {
        margin-bottom: 2rem;
    }
    .hero-logo .brand-mark {
        width: 6rem;
        height: 6rem;
        margin: 0 auto;
        border-radius: 1rem;
        font-size: 3rem;
    }
    .hero-title {
        font-size: 6rem;
        font-weight: 100;
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }
    .hero-title .gradient-text {
        background: linear-gradient(90deg, #22d3ee, #3b82f6, #9333ea);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-title .plain-text {
        font-weight: 300;
    }
    .hero-subtitle {
        font-size: 1.5rem;
        font-weight: 300;
        letter-spacing: 0.025em;
        max-width: 48rem;
        margin: 0 auto 3rem;
        color: var(--text-muted, #cbd5e1);
    }
    .hero-subtitle .accent {
        color: var(--accent, #22d3ee);
    }
    .section-title {
        font-size: 3.75rem;
        font-weight: 100;
        margin-bottom: 2rem;
    }
    .section-title.large {
        font-size: 4.5rem;
        margin-bottom: 1.5rem;
    }
    .section-intro {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-subtitle {
        font-size: 1.25rem;
        color: var(--text-faint, #94a3b8);
    }
    .cta-button {
        position: relative;
        overflow: hidden;
        border: none;
        cursor: pointer;
        padding: 1rem 2rem;
        border-radius: 1rem;
        font-size: 1.125rem;
        font-weight: 500;
        color: #fff;
        background: linear-gradient(90deg, #2563eb, #9333ea);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .cta-button:hover {
        transform: scale(1.05);
        box-shadow: 0 20px 40px rgba(59, 130, 246, 0.4);
    }
    .cta-button:active {
        transform: scale(0.95);
    }
    .cta-button::after {
        content: "";
        position: absolute;
        inset: 0;
        opacity: 0;
        background: linear-gradient(90deg, #0891b2, #2563eb);
        transition: opacity 0.3s ease;
    }
    .cta-button:hover::after {
        opacity: 1;
    }
    .cta-label {
        position: relative;
        z-index: 1;
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .cta-arrow {
        transition: transform 0.3s ease;
    }
    .cta-button:hover .cta-arrow {
        transform: translateX(4px);
    }
    @media (max-width: 768px) {
        .hero-title {
            font-size: 3.75rem;
        }
        .hero-subtitle {
            font-size: 1.25rem;
        }
        .section-title,
        .section-title.large {
            font-size: 2.25rem;
        }
    }
"#;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let scroll_y = use_scroll_y();
    let mounted = use_mounted();

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

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>
            <div class="orb-layer">
                <div class="orb orb-top" style={format!("transform: translateY({}px);", ORB_TOP_DRIFT.map(scroll_y))}></div>
                <div class="orb orb-bottom" style={format!("transform: translateY({}px);", ORB_BOTTOM_DRIFT.map(scroll_y))}></div>
                <div class="orb orb-pulse"></div>
            </div>

            <section class="hero-section" style={format!("opacity: {};", HERO_FADE.map(scroll_y))}>
                <div class="hero-inner">
                    <div class="glass-card" style={HERO_CARD.style(mounted)}>
                        <div class="hero-logo" style={HERO_LOGO.style(mounted)}>
                            <div class="brand-mark">
                                <i class="fas fa-brain"></i>
                            </div>
                        </div>
                        <h1 class="hero-title" style={HERO_TITLE.style(mounted)}>
                            <span class="gradient-text">{"Mikro"}</span>
                            <span class="plain-text">{"Bot"}</span>
                        </h1>
                        <p class="hero-subtitle" style={HERO_SUBTITLE.style(mounted)}>
                            {"Älykkään kaupankäynnin tulevaisuus."}
                            <br/>
                            <span class="accent">{"Microscale precision meets infinite possibilities."}</span>
                        </p>
                        <div style={HERO_CTA.style(mounted)}>
                            <button class="cta-button" type="button">
                                <span class="cta-label">
                                    {"Aloita matkasi"}
                                    <i class="fas fa-chevron-right cta-arrow"></i>
                                </span>
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <VisionSection />
            <FeaturesSection />
            <TestimonialsSection />
            <FinalCtaSection />
            <FooterSection />
        </div>
    }
}
