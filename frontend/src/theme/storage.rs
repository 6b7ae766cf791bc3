use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::ThemeError;
use crate::config;

/// Where the chosen theme name is kept between visits.
pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, ThemeError>;
    fn save(&self, value: &str) -> Result<(), ThemeError>;
}

/// Browser `localStorage`, under a fixed key.
#[derive(Clone, Debug)]
pub struct LocalThemeStore {
    key: &'static str,
}

impl LocalThemeStore {
    pub fn new() -> Self {
        Self {
            key: config::THEME_STORAGE_KEY,
        }
    }

    fn storage(&self) -> Result<Storage, ThemeError> {
        web_sys::window()
            .ok_or(ThemeError::StorageUnavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl Default for LocalThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        let result = self
            .storage()
            .and_then(|storage| storage.get_item(self.key).map_err(js_error));
        if let Err(e) = &result {
            gloo_console::warn!(format!("Could not read saved theme: {}", e));
        }
        result
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        let result = self
            .storage()
            .and_then(|storage| storage.set_item(self.key, value).map_err(js_error));
        if let Err(e) = &result {
            gloo_console::warn!(format!("Could not save theme, keeping it for this session only: {}", e));
        }
        result
    }
}

fn js_error(value: JsValue) -> ThemeError {
    ThemeError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// In-memory store. Clones share the same slot, so a fresh manager built on a
/// clone sees what an earlier one saved.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value.to_string()))),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.value())
    }

    fn save(&self, value: &str) -> Result<(), ThemeError> {
        *self.slot.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}
