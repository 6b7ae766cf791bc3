use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, MouseEvent};
use yew::Callback;

use super::{SelectorEvent, SelectorView, Theme, ThemeDocument};
use crate::config;

type ClickHandler = Closure<dyn FnMut(MouseEvent)>;

struct Listener {
    target: EventTarget,
    handler: ClickHandler,
}

struct SelectorNodes {
    root: Element,
    toggle_icon: Element,
    toggle_name: Element,
    dropdown: Element,
    options: Vec<(Theme, Element)>,
}

/// The live browser document.
pub struct WebThemeDocument {
    document: Document,
    selector: Option<SelectorNodes>,
    listeners: Vec<Listener>,
}

impl WebThemeDocument {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selector: None,
            listeners: Vec::new(),
        }
    }

    /// The window's document, if running in a browser.
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
    }

    fn host(&self) -> Option<Element> {
        config::SELECTOR_HOSTS
            .iter()
            .find_map(|selector| self.document.query_selector(selector).ok().flatten())
    }

    fn listen(&mut self, target: &EventTarget, handler: ClickHandler) -> Result<(), JsValue> {
        target.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target: target.clone(),
            handler,
        });
        Ok(())
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }

    fn labelled(&self, parent: &Element, icon: &str, name: &str) -> Result<(Element, Element), JsValue> {
        let icon_node = self.element("span", "theme-icon")?;
        icon_node.set_text_content(Some(icon));
        let name_node = self.element("span", "theme-name")?;
        name_node.set_text_content(Some(name));
        parent.append_child(&icon_node)?;
        parent.append_child(&name_node)?;
        Ok((icon_node, name_node))
    }

    fn build(
        &mut self,
        host: &Element,
        view: SelectorView,
        dispatch: Callback<SelectorEvent>,
    ) -> Result<SelectorNodes, JsValue> {
        let root = self.element("div", "theme-selector")?;

        let toggle = self.element("button", "theme-toggle")?;
        toggle.set_attribute("type", "button")?;
        let current = view.descriptor();
        let (toggle_icon, toggle_name) = self.labelled(&toggle, current.icon, current.name)?;
        let chevron = self.element("i", "fas fa-chevron-down")?;
        toggle.append_child(&chevron)?;
        root.append_child(&toggle)?;

        let dropdown = self.element("div", "theme-dropdown")?;
        let mut options = Vec::with_capacity(Theme::ALL.len());
        for theme in Theme::ALL {
            let option = self.element("a", "theme-option")?;
            option.set_attribute("href", "#")?;
            option.set_attribute(config::THEME_ATTRIBUTE, theme.as_str())?;
            let descriptor = theme.descriptor();
            self.labelled(&option, descriptor.icon, descriptor.name)?;
            dropdown.append_child(&option)?;

            let dispatch = dispatch.clone();
            let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                e.prevent_default();
                dispatch.emit(SelectorEvent::Select(theme));
            });
            self.listen(&option, handler)?;
            options.push((theme, option));
        }
        root.append_child(&dropdown)?;

        let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(SelectorEvent::Toggle);
        });
        self.listen(&toggle, handler)?;

        // Clicks inside the widget never count as outside clicks.
        let handler = Closure::<dyn FnMut(MouseEvent)>::new(|e: MouseEvent| {
            e.stop_propagation();
        });
        self.listen(&root, handler)?;

        host.insert_before(&root, host.first_child().as_ref())?;

        Ok(SelectorNodes {
            root,
            toggle_icon,
            toggle_name,
            dropdown,
            options,
        })
    }
}

impl ThemeDocument for WebThemeDocument {
    fn apply_theme_attribute(&mut self, theme: Theme) {
        if let Some(root) = self.document.document_element() {
            if let Err(e) = root.set_attribute(config::THEME_ATTRIBUTE, theme.as_str()) {
                gloo_console::error!("Failed to set theme attribute:", e);
            }
        }
    }

    fn has_selector(&self) -> bool {
        self.selector.is_some()
            || self
                .document
                .query_selector(".theme-selector")
                .ok()
                .flatten()
                .is_some()
    }

    fn mount_selector(&mut self, view: SelectorView, dispatch: Callback<SelectorEvent>) -> bool {
        let Some(host) = self.host() else {
            return false;
        };
        match self.build(&host, view, dispatch) {
            Ok(nodes) => {
                self.selector = Some(nodes);
                self.render_selector(view);
                true
            }
            Err(e) => {
                gloo_console::error!("Failed to build theme selector:", e);
                false
            }
        }
    }

    fn render_selector(&mut self, view: SelectorView) {
        let Some(nodes) = &self.selector else {
            return;
        };
        let descriptor = view.descriptor();
        nodes.toggle_icon.set_text_content(Some(descriptor.icon));
        nodes.toggle_name.set_text_content(Some(descriptor.name));
        let _ = nodes.dropdown.class_list().toggle_with_force("show", view.open);
        for (theme, option) in &nodes.options {
            let _ = option.class_list().toggle_with_force("active", view.is_active(*theme));
        }
    }

    fn listen_outside_clicks(&mut self, dispatch: Callback<SelectorEvent>) {
        let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
            dispatch.emit(SelectorEvent::Dismiss);
        });
        let target: EventTarget = self.document.clone().into();
        if let Err(e) = self.listen(&target, handler) {
            gloo_console::error!("Failed to listen for clicks:", e);
        }
    }

    fn teardown(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener
                .target
                .remove_event_listener_with_callback("click", listener.handler.as_ref().unchecked_ref());
        }
        if let Some(nodes) = self.selector.take() {
            nodes.root.remove();
        }
    }
}
