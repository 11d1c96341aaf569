//! Floating button that opens a theme panel.

use std::cell::Cell;

use serde::Serialize;

use super::radio::{RadioGroupView, ThemeRadioGroup};
use crate::context::ThemeContext;
use crate::store::ThemeStore;
use crate::theme::ThemeError;

/// Button emphasis: primary while the panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Primary,
    Tertiary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloatingPanelView {
    pub title: &'static str,
    pub radio: RadioGroupView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloatingSwitcherView {
    pub label: &'static str,
    pub open: bool,
    pub button_kind: ButtonKind,
    pub is_dark: bool,
    pub panel: Option<FloatingPanelView>,
}

/// Floating settings button whose panel embeds the radio group.
///
/// Whether the panel is open is local UI state; the theme itself lives in
/// the store like every other consumer.
#[derive(Debug)]
pub struct FloatingThemeSwitcher {
    store: ThemeStore,
    radio: ThemeRadioGroup,
    open: Cell<bool>,
}

impl FloatingThemeSwitcher {
    pub fn new(store: ThemeStore) -> Self {
        Self {
            radio: ThemeRadioGroup::new(store.clone()),
            store,
            open: Cell::new(false),
        }
    }

    /// # Panics
    ///
    /// Panics if `context` holds no store.
    pub fn from_context(context: &ThemeContext) -> Self {
        Self::new(context.store("FloatingThemeSwitcher"))
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Opens or closes the panel. The theme is not touched.
    pub fn toggle_open(&self) {
        self.open.set(!self.open.get());
    }

    pub fn view(&self) -> FloatingSwitcherView {
        let open = self.is_open();
        FloatingSwitcherView {
            label: "Theme settings",
            open,
            button_kind: if open {
                ButtonKind::Primary
            } else {
                ButtonKind::Tertiary
            },
            is_dark: self.store.is_dark(),
            panel: open.then(|| FloatingPanelView {
                title: "Choose Theme",
                radio: self.radio.view(),
            }),
        }
    }

    /// Handles a selection in the panel's radio group.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] for a value that is not a theme.
    pub fn select(&self, value: &str) -> Result<(), ThemeError> {
        self.radio.select(value)
    }
}
