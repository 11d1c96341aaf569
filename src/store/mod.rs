//! Theme state and the ports it talks to.
//!
//! This module provides:
//!
//! - [`ThemeStore`]: Shared handle owning the active theme
//! - [`ThemeConfig`]: Storage key, fallback and OS-tracking settings
//! - [`ThemeStorage`]: Durable key-value port, with [`MemoryStorage`] and [`FileStorage`]
//! - [`PreferenceSignal`]: OS color-scheme port, with [`ManualPreference`] and
//!   [`SystemPreference`]
//!
//! The store reads storage and the preference signal only through these
//! traits, so hosts plug in their own environment and tests use in-memory
//! fakes.

mod config;
mod preference;
mod storage;
#[allow(clippy::module_inception)]
mod store;

pub use config::{ThemeConfig, DEFAULT_STORAGE_KEY};
pub use preference::{
    ListenerId, ManualPreference, PreferenceListener, PreferenceSignal, PreferenceSubscription,
    SystemPreference,
};
pub use storage::{FileStorage, MemoryStorage, StorageError, ThemeStorage};
pub use store::{SeedSource, ThemeListener, ThemeStore, ThemeSubscription};
