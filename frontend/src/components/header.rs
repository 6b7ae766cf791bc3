use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

/// Top bar. Its last `.header-flex` child is where the theme selector lands.
#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
        <header class="site-header">
            <div class="header-flex">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <i class="fas fa-brain"></i>
                    <span>{"MikroBot"}</span>
                </Link<Route>>
                <div class="header-actions">
                    <a href="#features" class="nav-link">{"Ominaisuudet"}</a>
                </div>
            </div>
        </header>
    }
}
