//! Color theme selection: the three named themes, where the choice is
//! persisted, and the dropdown widget that lets a visitor switch between them.

mod document;
mod dom;
mod error;
mod manager;
mod storage;

use std::fmt;
use std::str::FromStr;

pub use document::{SelectorEvent, SelectorView, ThemeDocument};
pub use dom::WebThemeDocument;
pub use error::ThemeError;
pub use manager::{ThemeController, ThemeManager};
pub use storage::{LocalThemeStore, MemoryThemeStore, ThemeStore};

/// A named visual mode, reflected onto the document root for stylesheets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Blue,
    Dark,
}

/// Label and icon shown for a theme in the selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub name: &'static str,
    pub icon: &'static str,
}

impl Theme {
    /// Every theme, in the order the dropdown lists them.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Blue, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Blue => "blue",
            Theme::Dark => "dark",
        }
    }

    pub fn descriptor(self) -> ThemeDescriptor {
        match self {
            Theme::Light => ThemeDescriptor { name: "Light Mode", icon: "☀️" },
            Theme::Blue => ThemeDescriptor { name: "Blue Mode", icon: "🔵" },
            Theme::Dark => ThemeDescriptor { name: "Dark Mode", icon: "🌙" },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "blue" => Ok(Theme::Blue),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}
