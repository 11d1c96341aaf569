//! Grid of preview tiles, one per theme.

use serde::Serialize;

use crate::context::ThemeContext;
use crate::store::ThemeStore;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewTile {
    pub theme: Theme,
    pub label: &'static str,
    pub swatches: [&'static str; 3],
    pub tag: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewView {
    pub tiles: Vec<PreviewTile>,
}

#[derive(Debug, Clone)]
pub struct ThemePreview {
    store: ThemeStore,
}

impl ThemePreview {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    /// # Panics
    ///
    /// Panics if `context` holds no store.
    pub fn from_context(context: &ThemeContext) -> Self {
        Self::new(context.store("ThemePreview"))
    }

    pub fn view(&self) -> PreviewView {
        let current = self.store.theme();
        PreviewView {
            tiles: Theme::ALL
                .into_iter()
                .map(|theme| PreviewTile {
                    theme,
                    label: theme.label(),
                    swatches: theme.meta().swatches,
                    tag: theme.tag(),
                    active: theme == current,
                })
                .collect(),
        }
    }

    pub fn pick(&self, theme: Theme) {
        self.store.set_theme(theme);
    }
}
