//! Read-only panel naming the active theme.

use serde::Serialize;

use crate::context::ThemeContext;
use crate::store::ThemeStore;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoView {
    pub heading: String,
    pub theme: Theme,
    pub is_dark: bool,
    pub text_samples: [&'static str; 3],
    pub buttons: [&'static str; 3],
}

/// Panel showing "Current Theme: ..." above sample text and buttons.
///
/// It never mutates the store.
#[derive(Debug, Clone)]
pub struct ThemeDemo {
    store: ThemeStore,
}

impl ThemeDemo {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    /// # Panics
    ///
    /// Panics if `context` holds no store.
    pub fn from_context(context: &ThemeContext) -> Self {
        Self::new(context.store("ThemeDemo"))
    }

    pub fn view(&self) -> DemoView {
        let theme = self.store.theme();
        DemoView {
            heading: format!("Current Theme: {}", theme),
            theme,
            is_dark: theme.is_dark(),
            text_samples: [
                "Primary text color",
                "Secondary text color",
                "Placeholder text color",
            ],
            buttons: ["Primary", "Secondary", "Tertiary"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ManualPreference, MemoryStorage};

    #[test]
    fn test_heading_follows_store() {
        let store = ThemeStore::new(MemoryStorage::new(), ManualPreference::new(false));
        let demo = ThemeDemo::new(store.clone());
        assert_eq!(demo.view().heading, "Current Theme: white");
        assert!(!demo.view().is_dark);

        store.set_theme(Theme::G100);
        let view = demo.view();
        assert_eq!(view.heading, "Current Theme: g100");
        assert_eq!(view.theme, Theme::G100);
        assert!(view.is_dark);
    }

    #[test]
    fn test_view_does_not_mark_choice() {
        let store = ThemeStore::new(MemoryStorage::new(), ManualPreference::new(false));
        ThemeDemo::new(store.clone()).view();
        assert!(!store.is_explicit());
    }
}
