//! Mirrors the active theme onto the host document and design-system provider.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::store::{ThemeStore, ThemeSubscription};
use crate::theme::Theme;

/// Root element attribute that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-carbon-theme";

/// Name of the meta element carrying the mobile browser chrome color.
pub const THEME_COLOR_META: &str = "theme-color";

/// The page document, as far as theme sync needs it.
pub trait DocumentHost {
    /// Sets an attribute on the document root element.
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Sets the `content` of the meta element called `name`.
    ///
    /// Returns `false` if the document has no such element; nothing is
    /// created in that case.
    fn set_meta_content(&mut self, name: &str, content: &str) -> bool;
}

/// The design system's theme primitive, which restyles its descendants.
///
/// It receives only the theme identifier (`white`, `g10`, `g90`, `g100`).
pub trait ThemeProviderHost {
    fn apply_theme(&mut self, theme: &str);
}

#[derive(Debug, Default)]
struct DocumentState {
    root_attributes: BTreeMap<String, String>,
    meta: BTreeMap<String, String>,
}

/// In-memory document.
///
/// Clones share state, so a host can keep one clone for inspection or
/// server rendering while another is handed to [`DocumentSync`].
#[derive(Debug, Clone, Default)]
pub struct Document {
    state: Rc<RefCell<DocumentState>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a meta element in the head.
    pub fn with_meta(self, name: &str, content: &str) -> Self {
        self.state
            .borrow_mut()
            .meta
            .insert(name.to_string(), content.to_string());
        self
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().root_attributes.get(name).cloned()
    }

    /// All attributes currently set on the root element.
    pub fn root_attributes(&self) -> BTreeMap<String, String> {
        self.state.borrow().root_attributes.clone()
    }

    pub fn meta(&self, name: &str) -> Option<String> {
        self.state.borrow().meta.get(name).cloned()
    }
}

impl DocumentHost for Document {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .root_attributes
            .insert(name.to_string(), value.to_string());
    }

    fn set_meta_content(&mut self, name: &str, content: &str) -> bool {
        match self.state.borrow_mut().meta.get_mut(name) {
            Some(slot) => {
                *slot = content.to_string();
                true
            }
            None => false,
        }
    }
}

/// In-memory stand-in for the design system's global theme wrapper.
///
/// Records the identifier it was last given. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct GlobalTheme {
    state: Rc<RefCell<(Option<String>, usize)>>,
}

impl GlobalTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// The identifier most recently forwarded, if any.
    pub fn theme(&self) -> Option<String> {
        self.state.borrow().0.clone()
    }

    /// How many times a theme was forwarded.
    pub fn apply_count(&self) -> usize {
        self.state.borrow().1
    }
}

impl ThemeProviderHost for GlobalTheme {
    fn apply_theme(&mut self, theme: &str) {
        let mut state = self.state.borrow_mut();
        state.0 = Some(theme.to_string());
        state.1 += 1;
    }
}

/// Projects `theme` onto the document and forwards it to the provider.
pub fn project_theme(
    theme: Theme,
    document: &mut dyn DocumentHost,
    provider: &mut dyn ThemeProviderHost,
) {
    document.set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
    if !document.set_meta_content(THEME_COLOR_META, theme.chrome_color()) {
        tracing::trace!("document has no theme-color meta element");
    }
    provider.apply_theme(theme.as_str());
}

/// Keeps a document and a theme provider in step with a [`ThemeStore`].
///
/// Attaching applies the current theme right away; afterwards every change
/// is applied synchronously, before the mutating call returns. Dropping the
/// sync (or calling [`detach`](Self::detach)) stops it.
///
/// # Example
///
/// ```rust
/// use showcase_theme::{
///     Document, DocumentSync, GlobalTheme, ManualPreference, MemoryStorage, Theme, ThemeStore,
/// };
///
/// let store = ThemeStore::new(MemoryStorage::new(), ManualPreference::new(false));
/// let document = Document::new().with_meta("theme-color", "#ffffff");
/// let provider = GlobalTheme::new();
/// let _sync = DocumentSync::attach(&store, document.clone(), provider.clone());
///
/// store.set_theme(Theme::G100);
/// assert_eq!(document.root_attribute("data-carbon-theme").as_deref(), Some("g100"));
/// assert_eq!(document.meta("theme-color").as_deref(), Some("#161616"));
/// assert_eq!(provider.theme().as_deref(), Some("g100"));
/// ```
#[derive(Debug)]
pub struct DocumentSync {
    subscription: Option<ThemeSubscription>,
}

impl DocumentSync {
    pub fn attach<D, P>(store: &ThemeStore, document: D, provider: P) -> Self
    where
        D: DocumentHost + 'static,
        P: ThemeProviderHost + 'static,
    {
        let hosts = RefCell::new((document, provider));
        {
            let (document, provider) = &mut *hosts.borrow_mut();
            project_theme(store.theme(), document, provider);
        }

        let subscription = store.subscribe(move |theme| {
            let (document, provider) = &mut *hosts.borrow_mut();
            project_theme(theme, document, provider);
        });

        Self {
            subscription: Some(subscription),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stops mirroring. The document keeps its last values.
    pub fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
