use std::cell::RefCell;
use std::rc::{Rc, Weak};

use yew::Callback;

use super::{SelectorEvent, SelectorView, Theme, ThemeDocument, ThemeStore};

/// Holds the current theme and keeps the store, the document root attribute
/// and the selector widget in step with it.
pub struct ThemeManager<S, D> {
    store: S,
    document: D,
    current: Theme,
    open: bool,
    restored: bool,
    listening: bool,
    persistent: bool,
}

impl<S: ThemeStore, D: ThemeDocument> ThemeManager<S, D> {
    pub fn new(store: S, document: D) -> Self {
        Self {
            store,
            document,
            current: Theme::default(),
            open: false,
            restored: false,
            listening: false,
            persistent: true,
        }
    }

    /// Restores the saved theme, applies it, mounts the selector if the page
    /// has none yet and installs the outside-click listener once.
    ///
    /// The store is read only on the first call. Later calls keep the theme
    /// already in memory.
    ///
    /// A page carries one selector. If another manager already mounted one,
    /// this manager only applies its theme and installs no listener.
    pub fn initialize(&mut self, dispatch: Callback<SelectorEvent>) {
        let theme = if self.restored {
            self.current
        } else {
            self.restored = true;
            self.stored_theme()
        };

        if !self.listening && self.document.has_selector() {
            self.current = theme;
            self.document.apply_theme_attribute(theme);
            return;
        }

        self.apply(theme);

        if !self.document.has_selector() {
            let view = self.view();
            self.document.mount_selector(view, dispatch.clone());
        }

        if !self.listening {
            self.document.listen_outside_clicks(dispatch);
            self.listening = true;
        }
    }

    /// Switches to the named theme. Unknown names are ignored.
    pub fn set_theme(&mut self, name: &str) {
        if let Ok(theme) = name.parse::<Theme>() {
            self.select(theme);
        }
    }

    pub fn select(&mut self, theme: Theme) {
        self.apply(theme);
    }

    pub fn current_theme(&self) -> Theme {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the most recent save reached the store. While false the theme
    /// lives in memory only.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn view(&self) -> SelectorView {
        SelectorView {
            current: self.current,
            open: self.open,
        }
    }

    pub fn handle(&mut self, event: SelectorEvent) {
        match event {
            SelectorEvent::Toggle => {
                self.open = !self.open;
                self.refresh();
            }
            SelectorEvent::Select(theme) => {
                self.open = false;
                self.apply(theme);
            }
            SelectorEvent::Dismiss => {
                if self.open {
                    self.open = false;
                    self.refresh();
                }
            }
        }
    }

    pub fn teardown(&mut self) {
        self.document.teardown();
        self.listening = false;
        self.open = false;
    }

    fn stored_theme(&self) -> Theme {
        match self.store.load() {
            Ok(Some(name)) => name.parse().unwrap_or_default(),
            Ok(None) | Err(_) => Theme::default(),
        }
    }

    fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.document.apply_theme_attribute(theme);
        self.persistent = self.store.save(theme.as_str()).is_ok();
        self.refresh();
    }

    fn refresh(&mut self) {
        let view = self.view();
        self.document.render_selector(view);
    }
}

/// Shared handle to a [`ThemeManager`], owned by whatever drives the page
/// lifecycle. Widget callbacks hold only a weak reference back to it.
pub struct ThemeController<S, D> {
    inner: Rc<RefCell<ThemeManager<S, D>>>,
}

impl<S, D> Clone for ThemeController<S, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, D> ThemeController<S, D>
where
    S: ThemeStore + 'static,
    D: ThemeDocument + 'static,
{
    pub fn new(store: S, document: D) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ThemeManager::new(store, document))),
        }
    }

    pub fn initialize(&self) {
        let dispatch = self.dispatcher();
        self.inner.borrow_mut().initialize(dispatch);
    }

    pub fn set_theme(&self, name: &str) {
        self.inner.borrow_mut().set_theme(name);
    }

    pub fn current_theme(&self) -> Theme {
        self.inner.borrow().current_theme()
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().is_open()
    }

    pub fn is_persistent(&self) -> bool {
        self.inner.borrow().is_persistent()
    }

    pub fn teardown(&self) {
        self.inner.borrow_mut().teardown();
    }

    fn dispatcher(&self) -> Callback<SelectorEvent> {
        let weak: Weak<RefCell<ThemeManager<S, D>>> = Rc::downgrade(&self.inner);
        Callback::from(move |event: SelectorEvent| {
            if let Some(manager) = weak.upgrade() {
                if let Ok(mut manager) = manager.try_borrow_mut() {
                    manager.handle(event);
                }
            }
        })
    }
}
