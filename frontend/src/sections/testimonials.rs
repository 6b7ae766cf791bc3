use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::utils::motion::{RISE, TILT_RISE};

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    rating: usize,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Mikael Virtanen",
        role: "Kvantitatiivinen analyytikko",
        content: "MikroBot muutti kaupankäyntini täysin. ROI parani 340% ensimmäisten kuukausien aikana.",
        rating: 5,
    },
    Testimonial {
        name: "Anna Korhonen",
        role: "Päätoiminen kauppias",
        content: "Riskinhallinta on ensiluokkaista. En ole koskaan tuntenut oloani näin varmaksi markkinoilla.",
        rating: 5,
    },
    Testimonial {
        name: "Jukka Nieminen",
        role: "Hedge Fund Manager",
        content: "Instituutiotason työkalut pienen kauppiaan käytössä. Tämä on vallankumous.",
        rating: 5,
    },
];

const TESTIMONIALS_CSS: &str = r#"
    .testimonials-section {
        padding: 8rem 1.5rem;
        position: relative;
    }
    .testimonials-grid {
        max-width: 72rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
        perspective: 1000px;
    }
    .testimonial-card {
        height: 100%;
        padding: 2rem;
        border-radius: 1rem;
        background: var(--glass-bg, rgba(255, 255, 255, 0.05));
        border: 1px solid var(--glass-border, rgba(255, 255, 255, 0.1));
        backdrop-filter: blur(24px);
        transition: transform 0.3s ease;
    }
    .testimonial-card:hover {
        transform: translateY(-5px) rotateX(2deg);
    }
    .testimonial-rating {
        display: flex;
        gap: 0.25rem;
        margin-bottom: 1rem;
        color: #facc15;
    }
    .testimonial-quote {
        font-size: 1.125rem;
        line-height: 1.7;
        margin-bottom: 1.5rem;
        color: var(--text-muted, #cbd5e1);
    }
    .testimonial-name {
        font-weight: 600;
    }
    .testimonial-role {
        font-size: 0.875rem;
        color: var(--text-faint, #94a3b8);
    }
    @media (max-width: 768px) {
        .testimonials-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    html! {
        <section class="testimonials-section">
            <style>{TESTIMONIALS_CSS}</style>
            <Reveal class="section-intro" entrance={RISE}>
                <h2 class="section-title large">{"Asiakkaiden ääni"}</h2>
                <p class="section-subtitle">{"Mitä käyttäjämme sanovat"}</p>
            </Reveal>
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                    <Reveal key={index} entrance={TILT_RISE.staggered(index)}>
                        <div class="testimonial-card">
                            <div class="testimonial-rating">
                                { for (0..testimonial.rating).map(|star| html! {
                                    <i key={star} class="fas fa-star"></i>
                                }) }
                            </div>
                            <p class="testimonial-quote">{format!("\"{}\"", testimonial.content)}</p>
                            <div>
                                <p class="testimonial-name">{testimonial.name}</p>
                                <p class="testimonial-role">{testimonial.role}</p>
                            </div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
