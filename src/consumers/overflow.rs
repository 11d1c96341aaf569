//! Overflow menu with one item per theme.

use serde::Serialize;

use crate::context::ThemeContext;
use crate::store::ThemeStore;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverflowItem {
    pub theme: Theme,
    pub text: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverflowMenuView {
    pub aria_label: &'static str,
    pub items: Vec<OverflowItem>,
}

#[derive(Debug, Clone)]
pub struct ThemeOverflowMenu {
    store: ThemeStore,
}

impl ThemeOverflowMenu {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    /// # Panics
    ///
    /// Panics if `context` holds no store.
    pub fn from_context(context: &ThemeContext) -> Self {
        Self::new(context.store("ThemeOverflowMenu"))
    }

    pub fn view(&self) -> OverflowMenuView {
        let current = self.store.theme();
        OverflowMenuView {
            aria_label: "Theme options",
            items: Theme::ALL
                .into_iter()
                .map(|theme| {
                    let active = theme == current;
                    let text = if active {
                        format!("{} ✓", theme.label())
                    } else {
                        theme.label().to_string()
                    };
                    OverflowItem {
                        theme,
                        text,
                        active,
                    }
                })
                .collect(),
        }
    }

    pub fn choose(&self, theme: Theme) {
        self.store.set_theme(theme);
    }
}
