/// localStorage key holding the visitor's theme choice.
pub const THEME_STORAGE_KEY: &str = "mikrobot-theme";

/// Attribute set on `<html>` (and on each dropdown option) naming a theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Header containers the theme selector may be inserted into, tried in order.
pub const SELECTOR_HOSTS: [&str; 2] = [
    "header .flex.items-center.space-x-6",
    "header .header-flex > div:last-child",
];

/// Delay before `<body>` gets the `themes-loaded` class.
pub const THEMES_LOADED_DELAY_MS: u32 = 100;

pub const THEMES_LOADED_CLASS: &str = "themes-loaded";
