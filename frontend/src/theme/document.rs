use yew::Callback;

use super::{Theme, ThemeDescriptor};

/// Clicks the selector can report. Each click maps to exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorEvent {
    /// The toggle button: opens or closes the dropdown.
    Toggle,
    /// An option row.
    Select(Theme),
    /// Anywhere outside the selector.
    Dismiss,
}

/// What the selector should currently show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorView {
    pub current: Theme,
    pub open: bool,
}

impl SelectorView {
    pub fn descriptor(&self) -> ThemeDescriptor {
        self.current.descriptor()
    }

    pub fn is_active(&self, theme: Theme) -> bool {
        self.current == theme
    }
}

/// The page the theme manager draws into.
pub trait ThemeDocument {
    /// Reflects the theme onto the document root attribute.
    fn apply_theme_attribute(&mut self, theme: Theme);

    /// Whether a selector widget is already present in the page.
    fn has_selector(&self) -> bool;

    /// Builds the widget and inserts it into the header. Returns false when
    /// no host element matched and nothing was inserted.
    fn mount_selector(&mut self, view: SelectorView, dispatch: Callback<SelectorEvent>) -> bool;

    /// Brings an already mounted widget in line with `view`. No-op when the
    /// widget was never mounted.
    fn render_selector(&mut self, view: SelectorView);

    /// Installs the page-wide listener that reports clicks outside the widget.
    fn listen_outside_clicks(&mut self, dispatch: Callback<SelectorEvent>);

    /// Removes listeners and the widget.
    fn teardown(&mut self);
}
