#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use mikrobot_web::components::reveal::Reveal;
use mikrobot_web::pages::home::HomePage;
use mikrobot_web::utils::motion::{HERO_CARD, HERO_TITLE, SECTION_FADE};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::Element;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

const OFF_SCREEN: &str = "position: absolute; left: 0; top: 5000px; width: 200px;";
const ON_SCREEN: &str = "position: absolute; left: 0; top: 0; width: 200px;";

#[function_component(RevealedBlock)]
fn revealed_block() -> Html {
    html! {
        <Reveal entrance={SECTION_FADE} class="reveal-target">
            <p style="height: 100px; margin: 0;">{"Näkyvä sisältö"}</p>
        </Reveal>
    }
}

/// Empty mount point at the top of a cleared body.
fn fresh_root(style: &str) -> Element {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let document = window.document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html("");
    let root = document.create_element("div").unwrap();
    root.set_attribute("style", style).unwrap();
    body.append_child(&root).unwrap();
    root
}

async fn next_frame() {
    let frame = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = web_sys::window().unwrap().request_animation_frame(&resolve);
    });
    JsFuture::from(frame).await.unwrap();
}

/// Lets pending renders and effects run.
async fn settle() {
    TimeoutFuture::new(0).await;
}

fn inline_style(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .unwrap()
        .expect(selector)
        .get_attribute("style")
        .unwrap_or_default()
}

async fn wait_for_style(root: &Element, selector: &str, expected: &str) -> bool {
    for _ in 0..60 {
        if inline_style(root, selector) == expected {
            return true;
        }
        next_frame().await;
        settle().await;
    }
    false
}

#[wasm_bindgen_test]
async fn hero_renders_before_state_then_settles() {
    let root = fresh_root(ON_SCREEN);
    let app = yew::Renderer::<HomePage>::with_root(root.clone()).render();
    settle().await;

    assert_eq!(inline_style(&root, ".glass-card"), HERO_CARD.style(false));
    assert_eq!(inline_style(&root, ".hero-title"), HERO_TITLE.style(false));

    for _ in 0..3 {
        next_frame().await;
    }
    settle().await;

    assert_eq!(inline_style(&root, ".glass-card"), HERO_CARD.style(true));
    assert_eq!(inline_style(&root, ".hero-title"), HERO_TITLE.style(true));
    app.destroy();
}

#[wasm_bindgen_test]
async fn reveal_waits_for_view_and_never_reverses() {
    let root = fresh_root(OFF_SCREEN);
    let app = yew::Renderer::<RevealedBlock>::with_root(root.clone()).render();
    settle().await;
    for _ in 0..3 {
        next_frame().await;
    }
    settle().await;
    assert_eq!(inline_style(&root, ".reveal-target"), SECTION_FADE.style(false));

    root.set_attribute("style", ON_SCREEN).unwrap();
    assert!(wait_for_style(&root, ".reveal-target", &SECTION_FADE.style(true)).await);

    root.set_attribute("style", OFF_SCREEN).unwrap();
    for _ in 0..3 {
        next_frame().await;
    }
    settle().await;
    assert_eq!(inline_style(&root, ".reveal-target"), SECTION_FADE.style(true));
    app.destroy();
}

#[wasm_bindgen_test]
async fn reveal_shows_at_once_without_intersection_observer() {
    let window: JsValue = web_sys::window().unwrap().into();
    let key = JsValue::from_str("IntersectionObserver");
    let observer_ctor = js_sys::Reflect::get(&window, &key).unwrap();
    js_sys::Reflect::set(&window, &key, &JsValue::UNDEFINED).unwrap();

    let root = fresh_root(OFF_SCREEN);
    let app = yew::Renderer::<RevealedBlock>::with_root(root.clone()).render();
    settle().await;
    settle().await;
    let shown = inline_style(&root, ".reveal-target");

    js_sys::Reflect::set(&window, &key, &observer_ctor).unwrap();
    app.destroy();
    assert_eq!(shown, SECTION_FADE.style(true));
}
