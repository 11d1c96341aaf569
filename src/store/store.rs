//! The shared theme store.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::config::ThemeConfig;
use super::preference::{PreferenceListener, PreferenceSignal, PreferenceSubscription};
use super::storage::ThemeStorage;
use crate::theme::{Theme, ThemeError};

/// Callback invoked with the new theme after every applied change.
pub type ThemeListener = Rc<dyn Fn(Theme)>;

/// Where the initial theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// A valid theme was found in durable storage.
    Storage,
    /// Nothing valid was stored; the OS preference decided.
    System,
    /// Nothing stored and the OS was not consulted.
    Fallback,
}

struct Inner {
    config: ThemeConfig,
    current: Cell<Theme>,
    seed: SeedSource,
    explicit: Cell<bool>,
    storage: RefCell<Box<dyn ThemeStorage>>,
    // Dropped before `preference` so the listener is removed while the
    // signal is still reachable.
    system_subscription: RefCell<Option<PreferenceSubscription>>,
    preference: Rc<dyn PreferenceSignal>,
    listeners: RefCell<Vec<(u64, ThemeListener)>>,
    next_listener: Cell<u64>,
    // Bumped on every notification; a round stops once a newer one started.
    generation: Cell<u64>,
}

/// Single source of truth for the active [`Theme`].
///
/// `ThemeStore` is a cheap handle: clones refer to the same state, and every
/// consumer is given a clone rather than keeping its own copy. All reads and
/// writes happen on one thread; listeners run synchronously, after the state
/// is updated, so nobody can observe a stale value once a mutation returns.
///
/// On construction the theme is seeded from, in order: a valid value in
/// storage, the OS preference (`g90` for dark, `white` for light), then the
/// configured fallback. The store then follows OS preference changes until
/// the first explicit [`set_theme`](Self::set_theme) or
/// [`toggle_theme`](Self::toggle_theme); from then on they are ignored.
///
/// # Example
///
/// ```rust
/// use showcase_theme::{ManualPreference, MemoryStorage, Theme, ThemeStore};
///
/// let os = ManualPreference::new(false);
/// let store = ThemeStore::new(MemoryStorage::new(), os.clone());
/// assert_eq!(store.theme(), Theme::White);
///
/// store.toggle_theme();
/// assert_eq!(store.theme(), Theme::G10);
///
/// // An explicit choice was made, so the OS no longer drives the theme
/// os.set_prefers_dark(true);
/// assert_eq!(store.theme(), Theme::G10);
/// ```
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

impl ThemeStore {
    /// Creates a store with the default configuration.
    pub fn new<S, P>(storage: S, preference: P) -> Self
    where
        S: ThemeStorage + 'static,
        P: PreferenceSignal + 'static,
    {
        Self::with_config(storage, preference, ThemeConfig::default())
    }

    /// Creates a store, seeding the theme and registering the OS listener.
    pub fn with_config<S, P>(storage: S, preference: P, config: ThemeConfig) -> Self
    where
        S: ThemeStorage + 'static,
        P: PreferenceSignal + 'static,
    {
        let storage: Box<dyn ThemeStorage> = Box::new(storage);
        let preference: Rc<dyn PreferenceSignal> = Rc::new(preference);

        let (theme, seed) = match read_choice(&*storage, &config.storage_key) {
            Some(theme) => (theme, SeedSource::Storage),
            None if config.follow_system => (
                Theme::from_prefers_dark(preference.prefers_dark()),
                SeedSource::System,
            ),
            None => (config.fallback, SeedSource::Fallback),
        };
        tracing::debug!(theme = %theme, source = ?seed, "theme store seeded");

        let follow_system = config.follow_system;
        let inner = Rc::new(Inner {
            config,
            current: Cell::new(theme),
            seed,
            explicit: Cell::new(seed == SeedSource::Storage),
            storage: RefCell::new(storage),
            system_subscription: RefCell::new(None),
            preference,
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            generation: Cell::new(0),
        });

        if follow_system {
            let weak = Rc::downgrade(&inner);
            let listener: PreferenceListener = Rc::new(move |prefers_dark: bool| {
                if let Some(inner) = weak.upgrade() {
                    ThemeStore { inner }.on_system_change(prefers_dark);
                }
            });
            let subscription = PreferenceSubscription::register(&inner.preference, listener);
            *inner.system_subscription.borrow_mut() = Some(subscription);
        }

        Self { inner }
    }

    /// The active theme.
    pub fn theme(&self) -> Theme {
        self.inner.current.get()
    }

    /// Whether the active theme is a dark variant.
    pub fn is_dark(&self) -> bool {
        self.theme().is_dark()
    }

    /// Where the initial theme came from.
    pub fn seed_source(&self) -> SeedSource {
        self.inner.seed
    }

    /// Whether an explicit choice exists, which stops OS tracking.
    pub fn is_explicit(&self) -> bool {
        self.inner.explicit.get()
    }

    /// Whether the OS preference listener is still registered.
    pub fn is_listening(&self) -> bool {
        self.inner
            .system_subscription
            .borrow()
            .as_ref()
            .is_some_and(PreferenceSubscription::is_active)
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.inner.config
    }

    /// Makes `theme` active and persists it as the user's choice.
    ///
    /// Persisting failures are logged and otherwise ignored: the in-memory
    /// theme stays authoritative for the rest of the session.
    pub fn set_theme(&self, theme: Theme) {
        self.inner.explicit.set(true);
        self.inner.current.set(theme);

        let key = &self.inner.config.storage_key;
        if let Err(e) = self.inner.storage.borrow_mut().set(key, theme.as_str()) {
            tracing::warn!(theme = %theme, error = %e, "failed to persist theme choice");
        }

        tracing::debug!(theme = %theme, "theme set");
        self.notify(theme);
    }

    /// Parses and applies a theme identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownTheme`] and leaves the state untouched
    /// if `value` is not one of the known identifiers.
    pub fn set_theme_str(&self, value: &str) -> Result<(), ThemeError> {
        let theme = value.parse()?;
        self.set_theme(theme);
        Ok(())
    }

    /// Advances to the next theme in the four-step cycle.
    ///
    /// This walks `white -> g10 -> g90 -> g100 -> white`; it is not a
    /// light/dark flip.
    pub fn toggle_theme(&self) {
        self.set_theme(self.theme().next());
    }

    /// Registers a listener for every applied change.
    ///
    /// The listener is removed when the returned guard is dropped.
    pub fn subscribe<F>(&self, listener: F) -> ThemeSubscription
    where
        F: Fn(Theme) + 'static,
    {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        ThemeSubscription {
            inner: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Releases the OS preference listener.
    ///
    /// Call on page/session teardown. Idempotent; the store stays usable
    /// but no longer follows the OS.
    pub fn teardown(&self) {
        if let Some(mut subscription) = self.inner.system_subscription.borrow_mut().take() {
            subscription.release();
            tracing::debug!("theme store released system preference listener");
        }
    }

    /// Whether two handles refer to the same store.
    pub fn ptr_eq(&self, other: &ThemeStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Follows an OS color-scheme change unless a choice exists.
    ///
    /// A stored value only counts as a choice if it names a known theme;
    /// an unrecognized string is treated like an empty slot and does not
    /// stop tracking.
    fn on_system_change(&self, prefers_dark: bool) {
        if self.inner.explicit.get() || self.stored_choice().is_some() {
            tracing::trace!(prefers_dark, "ignoring system change, theme chosen explicitly");
            return;
        }

        let theme = Theme::from_prefers_dark(prefers_dark);
        if theme == self.theme() {
            return;
        }
        tracing::debug!(theme = %theme, "following system color scheme");
        self.inner.current.set(theme);
        self.notify(theme);
    }

    fn stored_choice(&self) -> Option<Theme> {
        read_choice(&**self.inner.storage.borrow(), &self.inner.config.storage_key)
    }

    fn notify(&self, theme: Theme) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);

        // Snapshot so listeners can mutate the store or unsubscribe.
        let snapshot: Vec<ThemeListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            // A listener changed the theme again; the nested round already
            // delivered the newer value to everyone.
            if self.inner.generation.get() != generation {
                break;
            }
            listener(theme);
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme())
            .field("explicit", &self.is_explicit())
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Reads the persisted theme; absent, unreadable and unrecognized values
/// all count as "no choice".
fn read_choice(storage: &dyn ThemeStorage, key: &str) -> Option<Theme> {
    match storage.get(key) {
        Ok(Some(value)) => match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored theme");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored theme");
            None
        }
    }
}

/// Guard for a listener registered with [`ThemeStore::subscribe`].
pub struct ThemeSubscription {
    inner: Weak<Inner>,
    id: Option<u64>,
}

impl ThemeSubscription {
    /// Removes the listener. Calling this more than once is a no-op.
    pub fn unsubscribe(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(inner) = self.inner.upgrade() {
                inner.listeners.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        }
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for ThemeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSubscription")
            .field("id", &self.id)
            .finish()
    }
}
