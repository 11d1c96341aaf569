//! Explicit context passing for theme consumers.
//!
//! A page builds one [`ThemeProvider`], which owns the [`ThemeStore`] and its
//! [`DocumentSync`], and hands its [`ThemeContext`] down to whatever renders
//! consumers. Consumers resolve the store from the context; resolving from an
//! empty context is an integration mistake and fails loudly.

use crate::store::{PreferenceSignal, ThemeConfig, ThemeStorage, ThemeStore};
use crate::sync::{DocumentHost, DocumentSync, ThemeProviderHost};
use crate::theme::ThemeError;

/// Slot through which consumers find the shared [`ThemeStore`].
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    store: Option<ThemeStore>,
}

impl ThemeContext {
    /// A context with no store, as seen outside any provider.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_store(store: ThemeStore) -> Self {
        Self { store: Some(store) }
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Resolves the store for `consumer`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::MissingProvider`] if the context is empty.
    pub fn try_store(&self, consumer: &'static str) -> Result<ThemeStore, ThemeError> {
        self.store
            .clone()
            .ok_or(ThemeError::MissingProvider { consumer })
    }

    /// Resolves the store for `consumer`.
    ///
    /// # Panics
    ///
    /// Panics if the context is empty: the consumer was mounted outside a
    /// [`ThemeProvider`].
    pub fn store(&self, consumer: &'static str) -> ThemeStore {
        self.try_store(consumer).unwrap_or_else(|e| panic!("{}", e))
    }
}

/// Owns the page's theme store and keeps the document in sync with it.
///
/// # Example
///
/// ```rust
/// use showcase_theme::{
///     Document, GlobalTheme, ManualPreference, MemoryStorage, ThemeProvider, ThemeToggle,
/// };
///
/// let document = Document::new().with_meta("theme-color", "#ffffff");
/// let provider = ThemeProvider::mount(
///     MemoryStorage::new(),
///     ManualPreference::new(false),
///     document.clone(),
///     GlobalTheme::new(),
/// );
///
/// let toggle = ThemeToggle::from_context(&provider.context());
/// toggle.toggle();
/// assert_eq!(document.root_attribute("data-carbon-theme").as_deref(), Some("g90"));
///
/// provider.unmount();
/// ```
#[derive(Debug)]
pub struct ThemeProvider {
    store: ThemeStore,
    sync: DocumentSync,
}

impl ThemeProvider {
    /// Creates the store with the default configuration and attaches sync.
    pub fn mount<S, P, D, H>(storage: S, preference: P, document: D, provider: H) -> Self
    where
        S: ThemeStorage + 'static,
        P: PreferenceSignal + 'static,
        D: DocumentHost + 'static,
        H: ThemeProviderHost + 'static,
    {
        Self::mount_with_config(storage, preference, document, provider, ThemeConfig::default())
    }

    pub fn mount_with_config<S, P, D, H>(
        storage: S,
        preference: P,
        document: D,
        provider: H,
        config: ThemeConfig,
    ) -> Self
    where
        S: ThemeStorage + 'static,
        P: PreferenceSignal + 'static,
        D: DocumentHost + 'static,
        H: ThemeProviderHost + 'static,
    {
        let store = ThemeStore::with_config(storage, preference, config);
        let sync = DocumentSync::attach(&store, document, provider);
        Self { store, sync }
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// A context carrying this provider's store.
    pub fn context(&self) -> ThemeContext {
        ThemeContext::with_store(self.store.clone())
    }

    /// Stops document sync and releases the OS preference listener.
    pub fn unmount(mut self) {
        self.sync.detach();
        self.store.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ManualPreference, MemoryStorage};
    use crate::sync::{Document, GlobalTheme, THEME_ATTRIBUTE};
    use crate::theme::Theme;

    fn mount(document: Document, os: ManualPreference) -> ThemeProvider {
        ThemeProvider::mount(MemoryStorage::new(), os, document, GlobalTheme::new())
    }

    #[test]
    fn test_empty_context_errors() {
        let context = ThemeContext::empty();
        assert!(!context.has_store());
        assert_eq!(
            context.try_store("ThemeRadioGroup").unwrap_err(),
            ThemeError::MissingProvider {
                consumer: "ThemeRadioGroup"
            }
        );
    }

    #[test]
    #[should_panic(expected = "ThemeSelector must be used within a ThemeProvider")]
    fn test_empty_context_panics() {
        ThemeContext::empty().store("ThemeSelector");
    }

    #[test]
    fn test_context_shares_provider_store() {
        let provider = mount(Document::new(), ManualPreference::new(false));
        let store = provider.context().store("test");
        assert!(store.ptr_eq(provider.store()));
    }

    #[test]
    fn test_unmount_releases_everything() {
        let document = Document::new();
        let os = ManualPreference::new(false);
        let provider = mount(document.clone(), os.clone());
        let store = provider.store().clone();
        assert_eq!(os.listener_count(), 1);

        provider.unmount();
        assert_eq!(os.listener_count(), 0);

        store.set_theme(Theme::G100);
        assert_eq!(document.root_attribute(THEME_ATTRIBUTE).as_deref(), Some("white"));
    }
}
