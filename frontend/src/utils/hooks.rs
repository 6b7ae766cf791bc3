use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Vertical scroll offset of the window, in pixels.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0);
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scroll_y = scroll_y.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    scroll_y.set(y);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    // Initial read, the page may be restored mid-scroll
                    if let Ok(y) = window.scroll_y() {
                        scroll_y.set(y);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }
    *scroll_y
}

/// False on the first render, true once that render has been painted.
///
/// The flip waits two animation frames: the first runs before the initial
/// paint, the second after it, so entrance transitions always start from
/// their before-state.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let pending = Rc::new(Cell::new(None::<i32>));
                let second = Closure::once({
                    let pending = pending.clone();
                    move || {
                        pending.set(None);
                        mounted.set(true);
                    }
                });
                let first = Closure::once({
                    let pending = pending.clone();
                    let second = second.as_ref().unchecked_ref::<js_sys::Function>().clone();
                    move || {
                        if let Some(window) = web_sys::window() {
                            pending.set(window.request_animation_frame(&second).ok());
                        }
                    }
                });
                if let Some(window) = web_sys::window() {
                    pending.set(window.request_animation_frame(first.as_ref().unchecked_ref()).ok());
                }
                move || {
                    if let (Some(id), Some(window)) = (pending.get(), web_sys::window()) {
                        let _ = window.cancel_animation_frame(id);
                    }
                    drop(first);
                    drop(second);
                }
            },
            (),
        );
    }
    *mounted
}

/// Latches true the first time `node` scrolls into view and stays true.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, visible.clone()));
                if observer.is_none() {
                    visible.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }
    *visible
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn observe_once(
    element: &Element,
    visible: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, EntriesCallback)> {
    let callback = EntriesCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let entered = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if entered {
            visible.set(true);
            observer.disconnect();
        }
    });
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some((observer, callback))
}
