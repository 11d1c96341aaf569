//! # showcase-theme - Persisted theme state with system preference tracking
//!
//! `showcase-theme` holds the visual theme of a design-system showcase page:
//! which of the four variants (`white`, `g10`, `g90`, `g100`) is active, where
//! that choice is persisted, how it follows the OS color scheme until the user
//! picks one, and how it is pushed onto the document and the design system's
//! theme provider.
//!
//! ## Concepts
//!
//! - [`Theme`]: The closed set of variants, with label, dark flag, cycle
//!   successor and chrome color
//! - [`ThemeStore`]: Shared handle that owns the active theme
//! - [`ThemeStorage`] / [`PreferenceSignal`]: Ports for durable storage and the
//!   OS "prefers dark" signal
//! - [`DocumentSync`]: Mirrors the theme onto the root attribute, the
//!   `theme-color` meta hint and the provider
//! - Consumers ([`ThemeToggle`], [`ThemeRadioGroup`], [`ThemeSelector`], ...):
//!   Stateless views that render from the store and mutate it
//!
//! ## Quick Start
//!
//! ```rust
//! use showcase_theme::{
//!     Document, GlobalTheme, ManualPreference, MemoryStorage, Theme, ThemeProvider,
//!     ThemeRadioGroup, ThemeToggle,
//! };
//!
//! let storage = MemoryStorage::new();
//! let os = ManualPreference::new(false);
//! let document = Document::new().with_meta("theme-color", "#ffffff");
//!
//! let page = ThemeProvider::mount(storage.clone(), os.clone(), document.clone(), GlobalTheme::new());
//! let context = page.context();
//!
//! // Nothing stored and the OS is light
//! assert_eq!(page.store().theme(), Theme::White);
//!
//! // Two consumers, one store
//! let toggle = ThemeToggle::from_context(&context);
//! let radio = ThemeRadioGroup::from_context(&context);
//! radio.select("g100").unwrap();
//! assert!(toggle.view().toggled);
//! assert_eq!(document.meta("theme-color").as_deref(), Some("#161616"));
//!
//! // The explicit choice is persisted and wins over the OS from now on
//! os.set_prefers_dark(true);
//! assert_eq!(page.store().theme(), Theme::G100);
//!
//! page.unmount();
//! ```
//!
//! ## Failure handling
//!
//! Unrecognized stored values count as "nothing stored". Storage read and
//! write failures are logged through `tracing` and never interrupt the page:
//! the in-memory theme stays authoritative. Resolving a consumer from a
//! [`ThemeContext`] without a store panics, since only an integration mistake
//! can cause it.

pub mod consumers;
pub mod context;
pub mod store;
pub mod sync;
pub mod theme;

pub use consumers::{
    ButtonKind, ButtonSize, FloatingThemeSwitcher, HeaderThemeSwitcher, IconThemeSwitcher,
    ThemeDemo, ThemeIcon, ThemeOverflowMenu, ThemePreview, ThemeRadioGroup, ThemeSelector,
    ThemeToggle,
};
pub use context::{ThemeContext, ThemeProvider};
pub use store::{
    FileStorage, ListenerId, ManualPreference, MemoryStorage, PreferenceSignal, SeedSource,
    StorageError, SystemPreference, ThemeConfig, ThemeStorage, ThemeStore, ThemeSubscription,
    DEFAULT_STORAGE_KEY,
};
pub use sync::{
    Document, DocumentHost, DocumentSync, GlobalTheme, ThemeProviderHost, THEME_ATTRIBUTE,
    THEME_COLOR_META,
};
pub use theme::{Theme, ThemeError, ThemeMeta};
