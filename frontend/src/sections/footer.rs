use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::utils::motion::{SLIDE_FROM_LEFT, SLIDE_FROM_RIGHT};

const FOOTER_CSS: &str = r#"
    .site-footer {
        position: relative;
        padding: 4rem 1.5rem;
        background: rgba(0, 0, 0, 0.2);
        border-top: 1px solid var(--glass-border, rgba(255, 255, 255, 0.1));
        backdrop-filter: blur(24px);
    }
    .footer-content {
        max-width: 72rem;
        margin: 0 auto;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .footer-brand .brand-mark {
        width: 3rem;
        height: 3rem;
        font-size: 1.5rem;
    }
    .footer-brand h3 {
        font-size: 1.5rem;
        font-weight: 600;
    }
    .footer-credits {
        text-align: right;
        color: var(--text-faint, #94a3b8);
    }
    .footer-credits strong {
        display: block;
        color: var(--text, #fff);
    }
    .footer-credits small {
        display: block;
        margin-top: 0.5rem;
        color: #64748b;
    }
    @media (max-width: 768px) {
        .footer-content {
            flex-direction: column;
            gap: 2rem;
        }
        .footer-credits {
            text-align: center;
        }
    }
"#;

#[function_component(FooterSection)]
pub fn footer_section() -> Html {
    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-content">
                <Reveal class="footer-brand" entrance={SLIDE_FROM_LEFT}>
                    <div class="brand-mark">
                        <i class="fas fa-brain"></i>
                    </div>
                    <div>
                        <h3>{"MikroBot"}</h3>
                        <p class="footer-tagline">{"Smart Microscale Trading"}</p>
                    </div>
                </Reveal>
                <Reveal class="footer-credits" entrance={SLIDE_FROM_RIGHT}>
                    <p>{"Powered by"}</p>
                    <strong>{"Fox-In-The-Code"}</strong>
                    <small>{"© 2025 All rights reserved"}</small>
                </Reveal>
            </div>
        </footer>
    }
}
