use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::utils::motion::RISE;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 4] = [
    Feature {
        icon: "fa-chart-line",
        title: "AI-Optimoitu Kaupankäynti",
        description: "Kehittyneet algoritmit analysoivat markkinoita reaaliajassa ja optimoivat kaupankäyntistrategiat jatkuvasti.",
    },
    Feature {
        icon: "fa-shield-halved",
        title: "Riskinhallinta",
        description: "Monimutkainen riskinhallintajärjestelmä suojaa pääomaa älykkäillä stop-loss ja take-profit -mekanismeilla.",
    },
    Feature {
        icon: "fa-bolt",
        title: "Millisekunnin Nopeus",
        description: "Ultranopeaa toteutusta kehittyneillä algoritmeilla, jotka reagoivat markkinamuutoksiin välittömästi.",
    },
    Feature {
        icon: "fa-bullseye",
        title: "Microscale Precision",
        description: "Erikoistunut pieniin positiokokoihin maksimaalisen tehokkuuden saavuttamiseksi kaikilla markkinatiloilla.",
    },
];

const FEATURES_CSS: &str = r#"
    .features-section {
        padding: 8rem 1.5rem;
        position: relative;
    }
    .features-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .feature-card {
        height: 100%;
        padding: 2rem;
        border-radius: 1rem;
        background: var(--glass-bg, rgba(255, 255, 255, 0.05));
        border: 1px solid var(--glass-border, rgba(255, 255, 255, 0.1));
        backdrop-filter: blur(24px);
        transition: transform 0.3s ease, background 0.5s ease;
    }
    .feature-card:hover {
        transform: translateY(-10px) scale(1.02);
        background: var(--glass-bg-hover, rgba(255, 255, 255, 0.1));
    }
    .feature-icon {
        width: 4rem;
        height: 4rem;
        margin-bottom: 1.5rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        color: #fff;
        background: linear-gradient(135deg, #22d3ee, #2563eb);
        transition: transform 0.3s ease;
    }
    .feature-card:hover .feature-icon {
        transform: scale(1.1);
    }
    .feature-card h3 {
        font-size: 1.5rem;
        font-weight: 600;
        margin-bottom: 1rem;
    }
    .feature-card p {
        color: var(--text-muted, #94a3b8);
        line-height: 1.7;
    }
    @media (max-width: 1024px) {
        .features-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .features-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    html! {
        <section id="features" class="features-section">
            <style>{FEATURES_CSS}</style>
            <Reveal class="section-intro" entrance={RISE}>
                <h2 class="section-title large">{"Ominaisuudet"}</h2>
                <p class="section-subtitle">{"Kaupankäynnin tulevaisuus on täällä"}</p>
            </Reveal>
            <div class="features-grid">
                { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                    <Reveal key={index} entrance={RISE.staggered(index)}>
                        <div class="feature-card">
                            <div class="feature-icon">
                                <i class={classes!("fas", feature.icon)}></i>
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
