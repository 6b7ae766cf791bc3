#![cfg(target_arch = "wasm32")]

use mikrobot_web::config::THEME_STORAGE_KEY;
use mikrobot_web::theme::{
    LocalThemeStore, MemoryThemeStore, Theme, ThemeController, ThemeStore, WebThemeDocument,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, Storage};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh `<header>` matching the second host pattern, replacing any earlier one.
fn mount_header() -> Element {
    let doc = document();
    let body = doc.body().unwrap();
    body.set_inner_html("");
    let header = doc.create_element("header").unwrap();
    let flex = doc.create_element("div").unwrap();
    flex.set_class_name("header-flex");
    let brand = doc.create_element("a").unwrap();
    let actions = doc.create_element("div").unwrap();
    let link = doc.create_element("a").unwrap();
    link.set_class_name("nav-link");
    actions.append_child(&link).unwrap();
    flex.append_child(&brand).unwrap();
    flex.append_child(&actions).unwrap();
    header.append_child(&flex).unwrap();
    body.append_child(&header).unwrap();
    actions
}

fn controller(store: MemoryThemeStore) -> ThemeController<MemoryThemeStore, WebThemeDocument> {
    ThemeController::new(store, WebThemeDocument::new(document()))
}

fn query(selector: &str) -> Element {
    document().query_selector(selector).unwrap().expect(selector)
}

fn click(selector: &str) {
    query(selector).dyn_into::<HtmlElement>().unwrap().click();
}

fn local_storage() -> Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn root_theme() -> Option<String> {
    document().document_element().unwrap().get_attribute("data-theme")
}

#[wasm_bindgen_test]
fn fresh_page_starts_light() {
    mount_header();
    let themes = controller(MemoryThemeStore::new());
    themes.initialize();

    assert_eq!(themes.current_theme(), Theme::Light);
    assert_eq!(root_theme().as_deref(), Some("light"));
    themes.teardown();
}

#[wasm_bindgen_test]
fn selector_is_first_child_of_host_and_mounted_once() {
    let host = mount_header();
    let themes = controller(MemoryThemeStore::new());
    themes.initialize();
    themes.initialize();

    assert_eq!(document().query_selector_all(".theme-selector").unwrap().length(), 1);
    assert_eq!(host.first_element_child().unwrap().class_name(), "theme-selector");
    assert!(document().query_selector(".theme-toggle .fa-chevron-down").unwrap().is_some());
    themes.teardown();
}

#[wasm_bindgen_test]
fn saved_blue_shows_blue_label() {
    mount_header();
    let themes = controller(MemoryThemeStore::with_value("blue"));
    themes.initialize();

    let descriptor = Theme::Blue.descriptor();
    assert_eq!(query(".theme-toggle .theme-name").text_content().as_deref(), Some(descriptor.name));
    assert_eq!(query(".theme-toggle .theme-icon").text_content().as_deref(), Some(descriptor.icon));
    assert_eq!(query(".theme-option.active").get_attribute("data-theme").as_deref(), Some("blue"));
    themes.teardown();
}

#[wasm_bindgen_test]
fn toggle_twice_opens_then_closes() {
    mount_header();
    let themes = controller(MemoryThemeStore::new());
    themes.initialize();

    click(".theme-toggle");
    assert!(query(".theme-dropdown").class_list().contains("show"));
    click(".theme-toggle");
    assert!(!query(".theme-dropdown").class_list().contains("show"));
    assert_eq!(themes.current_theme(), Theme::Light);
    themes.teardown();
}

#[wasm_bindgen_test]
fn picking_an_option_applies_and_closes() {
    mount_header();
    let store = MemoryThemeStore::new();
    let themes = controller(store.clone());
    themes.initialize();

    click(".theme-toggle");
    click(".theme-option[data-theme=\"dark\"]");

    assert_eq!(themes.current_theme(), Theme::Dark);
    assert_eq!(root_theme().as_deref(), Some("dark"));
    assert_eq!(store.value().as_deref(), Some("dark"));
    assert!(!query(".theme-dropdown").class_list().contains("show"));
    assert_eq!(query(".theme-toggle .theme-name").text_content().as_deref(), Some("Dark Mode"));
    themes.teardown();
}

#[wasm_bindgen_test]
fn clicking_elsewhere_closes_dropdown() {
    mount_header();
    let themes = controller(MemoryThemeStore::new());
    themes.initialize();

    click(".theme-toggle");
    click(".nav-link");

    assert!(!query(".theme-dropdown").class_list().contains("show"));
    themes.teardown();
}

#[wasm_bindgen_test]
fn no_host_means_no_widget() {
    document().body().unwrap().set_inner_html("<main></main>");
    let themes = controller(MemoryThemeStore::with_value("dark"));
    themes.initialize();

    assert!(document().query_selector(".theme-selector").unwrap().is_none());
    assert_eq!(root_theme().as_deref(), Some("dark"));
    themes.teardown();
}

#[wasm_bindgen_test]
fn local_store_reads_back_what_it_saved() {
    let storage = local_storage();
    storage.remove_item(THEME_STORAGE_KEY).unwrap();
    assert_eq!(LocalThemeStore::new().load().unwrap(), None);

    LocalThemeStore::new().save("dark").unwrap();

    assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(LocalThemeStore::new().load().unwrap().as_deref(), Some("dark"));
    storage.remove_item(THEME_STORAGE_KEY).unwrap();
}

#[wasm_bindgen_test]
fn choice_survives_reload_through_local_storage() {
    local_storage().remove_item(THEME_STORAGE_KEY).unwrap();
    mount_header();
    let first = ThemeController::new(LocalThemeStore::new(), WebThemeDocument::new(document()));
    first.initialize();
    first.set_theme("blue");
    first.teardown();

    mount_header();
    let reloaded = ThemeController::new(LocalThemeStore::new(), WebThemeDocument::new(document()));
    reloaded.initialize();

    assert_eq!(reloaded.current_theme(), Theme::Blue);
    assert!(reloaded.is_persistent());
    assert_eq!(query(".theme-option.active").get_attribute("data-theme").as_deref(), Some("blue"));
    reloaded.teardown();
    local_storage().remove_item(THEME_STORAGE_KEY).unwrap();
}
