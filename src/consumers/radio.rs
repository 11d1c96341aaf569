//! Radio button group listing every theme.

use serde::Serialize;

use super::labelled_with_tag;
use crate::context::ThemeContext;
use crate::store::ThemeStore;
use crate::theme::{Theme, ThemeError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioOption {
    pub value: Theme,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioGroupView {
    pub name: &'static str,
    pub legend: &'static str,
    pub selected: Theme,
    pub options: Vec<RadioOption>,
}

#[derive(Debug, Clone)]
pub struct ThemeRadioGroup {
    store: ThemeStore,
}

impl ThemeRadioGroup {
    pub fn new(store: ThemeStore) -> Self {
        Self { store }
    }

    /// # Panics
    ///
    /// Panics if `context` holds no store.
    pub fn from_context(context: &ThemeContext) -> Self {
        Self::new(context.store("ThemeRadioGroup"))
    }

    pub fn view(&self) -> RadioGroupView {
        let selected = self.store.theme();
        RadioGroupView {
            name: "theme-selection",
            legend: "Select theme",
            selected,
            options: Theme::ALL
                .into_iter()
                .map(|theme| RadioOption {
                    value: theme,
                    label: labelled_with_tag(theme),
                    checked: theme == selected,
                })
                .collect(),
        }
    }

    /// Handles a change event carrying the option's value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] for a value that is not a theme;
    /// the store is left untouched.
    pub fn select(&self, value: &str) -> Result<(), ThemeError> {
        self.store.set_theme_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ManualPreference, MemoryStorage};

    #[test]
    fn test_view_checks_exactly_the_current_theme() {
        let store = ThemeStore::new(MemoryStorage::new(), ManualPreference::new(true));
        let view = ThemeRadioGroup::new(store).view();

        assert_eq!(view.selected, Theme::G90);
        let checked: Vec<Theme> = view
            .options
            .iter()
            .filter(|option| option.checked)
            .map(|option| option.value)
            .collect();
        assert_eq!(checked, vec![Theme::G90]);
    }

    #[test]
    fn test_option_labels() {
        let store = ThemeStore::new(MemoryStorage::new(), ManualPreference::new(false));
        let labels: Vec<String> = ThemeRadioGroup::new(store)
            .view()
            .options
            .into_iter()
            .map(|option| option.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "White (Light)",
                "Gray 10 (Light)",
                "Gray 90 (Dark)",
                "Gray 100 (Dark)"
            ]
        );
    }

    #[test]
    fn test_select_sets_theme() {
        let store = ThemeStore::new(MemoryStorage::new(), ManualPreference::new(false));
        let group = ThemeRadioGroup::new(store.clone());

        group.select("g100").unwrap();
        assert_eq!(store.theme(), Theme::G100);
        assert!(group.select("black").is_err());
        assert_eq!(store.theme(), Theme::G100);
    }
}
