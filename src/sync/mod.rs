//! Projection of the active theme onto the host page.
//!
//! [`DocumentSync`] writes the theme identifier to the root element's
//! `data-carbon-theme` attribute, updates the `theme-color` meta hint, and
//! hands the identifier to the design system's theme provider. It keeps no
//! state of its own beyond the store subscription.

mod document;

pub use document::{
    project_theme, Document, DocumentHost, DocumentSync, GlobalTheme, ThemeProviderHost,
    THEME_ATTRIBUTE, THEME_COLOR_META,
};
