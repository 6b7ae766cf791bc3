use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"Sivua ei löytynyt."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                <button class="cta-button" type="button">
                    <span class="cta-label">{"Etusivulle"}</span>
                </button>
            </Link<Route>>
        </div>
    }
}
