use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod theme;
pub mod utils {
    pub mod hooks;
    pub mod motion;
}
pub mod components {
    pub mod header;
    pub mod reveal;
}
pub mod pages {
    pub mod home;
    pub mod not_found;
}
pub mod sections;

use components::header::SiteHeader;
use pages::home::HomePage;
use pages::not_found::NotFound;
use theme::{LocalThemeStore, ThemeController, WebThemeDocument};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

pub type BrowserThemeController = ThemeController<LocalThemeStore, WebThemeDocument>;

/// Builds and starts the theme controller for the live page.
pub fn start_theme() -> Option<BrowserThemeController> {
    let document = WebThemeDocument::current()?;
    let controller = ThemeController::new(LocalThemeStore::new(), document);
    controller.initialize();
    Some(controller)
}

/// Smooth scrolling right away, `themes-loaded` on `<body>` shortly after so
/// theme transitions don't play during the first paint.
fn finish_loading() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = root.style().set_property("scroll-behavior", "smooth");
    }
    let timeout = Timeout::new(config::THEMES_LOADED_DELAY_MS, move || {
        if let Some(body) = document.body() {
            let _ = body.class_list().add_1(config::THEMES_LOADED_CLASS);
        }
    });
    timeout.forget();
}

#[function_component(App)]
pub fn app() -> Html {
    // The header is in the DOM by the time this runs, so the selector has a host
    {
        use_effect_with_deps(
            move |_| {
                let controller = start_theme();
                finish_loading();
                move || {
                    if let Some(controller) = controller {
                        controller.teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            <SiteHeader />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
