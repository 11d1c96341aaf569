//! Light/dark toggle switch.

use serde::Serialize;

use crate::context::ThemeContext;
use crate::store::ThemeStore;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleView {
    pub id: &'static str,
    pub label: &'static str,
    pub label_off: &'static str,
    pub label_on: &'static str,
    pub toggled: bool,
}

/// "Dark mode" switch.
///
/// Unlike the cycling buttons this is a real binary choice: turning it on
/// selects `g90`, turning it off selects `white`.
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    store: ThemeStore,
}

impl ThemeToggle {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    /// # Panics
    ///
    /// Panics if `context` holds no store.
    pub fn from_context(context: &ThemeContext) -> Self {
        Self::new(context.store("ThemeToggle"))
    }

    pub fn view(&self) -> ToggleView {
        ToggleView {
            id: "theme-toggle",
            label: "Dark mode",
            label_off: "Off",
            label_on: "On",
            toggled: self.store.is_dark(),
        }
    }

    pub fn toggle(&self) {
        let target = if self.store.is_dark() {
            Theme::White
        } else {
            Theme::G90
        };
        self.store.set_theme(target);
    }
}
