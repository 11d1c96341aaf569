//! Single-button switchers that step through the theme cycle.

use serde::Serialize;

use crate::context::ThemeContext;
use crate::store::ThemeStore;

/// Icon shown on a cycling button: the sun offers light, the moon offers dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    fn for_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeIcon::Sun
        } else {
            ThemeIcon::Moon
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSwitcherView {
    pub aria_label: &'static str,
    pub icon: ThemeIcon,
}

/// Header action that advances to the next theme on click.
#[derive(Debug, Clone)]
pub struct HeaderThemeSwitcher {
    store: ThemeStore,
}

impl HeaderThemeSwitcher {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    /// # Panics
    ///
    /// Panics if `context` holds no store.
    pub fn from_context(context: &ThemeContext) -> Self {
        Self::new(context.store("HeaderThemeSwitcher"))
    }

    pub fn view(&self) -> HeaderSwitcherView {
        HeaderSwitcherView {
            aria_label: "Toggle theme",
            icon: ThemeIcon::for_dark(self.store.is_dark()),
        }
    }

    pub fn click(&self) {
        self.store.toggle_theme();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSwitcherView {
    pub label: &'static str,
    pub icon: ThemeIcon,
    pub size: ButtonSize,
}

/// Ghost icon button that advances to the next theme on click.
#[derive(Debug, Clone)]
pub struct IconThemeSwitcher {
    store: ThemeStore,
    size: ButtonSize,
}

impl IconThemeSwitcher {
    pub fn new(store: ThemeStore) -> Self {
        Self {
            store,
            size: ButtonSize::default(),
        }
    }

    /// # Panics
    ///
    /// Panics if `context` holds no store.
    pub fn from_context(context: &ThemeContext) -> Self {
        Self::new(context.store("IconThemeSwitcher"))
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn view(&self) -> IconSwitcherView {
        let is_dark = self.store.is_dark();
        IconSwitcherView {
            label: if is_dark {
                "Switch to light theme"
            } else {
                "Switch to dark theme"
            },
            icon: ThemeIcon::for_dark(is_dark),
            size: self.size,
        }
    }

    pub fn click(&self) {
        self.store.toggle_theme();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ManualPreference, MemoryStorage};
    use crate::theme::Theme;

    fn store() -> ThemeStore {
        ThemeStore::new(MemoryStorage::new(), ManualPreference::new(false))
    }

    #[test]
    fn test_header_switcher_cycles() {
        let store = store();
        let switcher = HeaderThemeSwitcher::new(store.clone());
        assert_eq!(switcher.view().icon, ThemeIcon::Moon);

        switcher.click();
        assert_eq!(store.theme(), Theme::G10);
        assert_eq!(switcher.view().icon, ThemeIcon::Moon);

        switcher.click();
        assert_eq!(store.theme(), Theme::G90);
        assert_eq!(switcher.view().icon, ThemeIcon::Sun);
        assert_eq!(switcher.view().aria_label, "Toggle theme");
    }

    #[test]
    fn test_icon_switcher_label_follows_darkness() {
        let store = store();
        let switcher = IconThemeSwitcher::new(store.clone()).with_size(ButtonSize::Lg);
        assert_eq!(switcher.view().label, "Switch to dark theme");
        assert_eq!(switcher.view().size, ButtonSize::Lg);

        store.set_theme(Theme::G100);
        assert_eq!(switcher.view().label, "Switch to light theme");

        switcher.click();
        assert_eq!(store.theme(), Theme::White);
    }

    #[test]
    fn test_icon_serializes_lowercase() {
        let json = serde_json::to_string(&HeaderSwitcherView {
            aria_label: "Toggle theme",
            icon: ThemeIcon::Sun,
        })
        .unwrap();
        assert_eq!(json, r#"{"aria_label":"Toggle theme","icon":"sun"}"#);
    }
}
