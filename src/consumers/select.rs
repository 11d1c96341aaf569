//! Single-select dropdown of themes.

use serde::Serialize;

use super::labelled_with_tag;
use crate::context::ThemeContext;
use crate::store::ThemeStore;
use crate::theme::{Theme, ThemeError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectItem {
    pub value: Theme,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectView {
    pub id: &'static str,
    pub label: &'static str,
    pub value: Theme,
    pub items: Vec<SelectItem>,
}

#[derive(Debug, Clone)]
pub struct ThemeSelector {
    store: ThemeStore,
}

impl ThemeSelector {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    /// # Panics
    ///
    /// Panics if `context` holds no store.
    pub fn from_context(context: &ThemeContext) -> Self {
        Self::new(context.store("ThemeSelector"))
    }

    pub fn view(&self) -> SelectView {
        SelectView {
            id: "theme-selector",
            label: "Theme",
            value: self.store.theme(),
            items: Theme::ALL
                .into_iter()
                .map(|theme| SelectItem {
                    value: theme,
                    text: labelled_with_tag(theme),
                })
                .collect(),
        }
    }

    /// Handles the dropdown's change event.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] for a value that is not a theme.
    pub fn change(&self, value: &str) -> Result<(), ThemeError> {
        self.store.set_theme_str(value)
    }
}
