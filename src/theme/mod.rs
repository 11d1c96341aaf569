//! Theme variants and their static metadata.
//!
//! This module provides:
//!
//! - [`Theme`]: The closed set of four visual variants
//! - [`ThemeMeta`]: Label, dark classification, cycle successor and colors
//! - [`ThemeError`]: Errors from parsing or resolving themes

mod error;
mod variant;

pub use error::ThemeError;
pub use variant::{Theme, ThemeMeta};
