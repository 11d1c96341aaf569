//! Store configuration.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "carbon-theme-preference";

/// Settings for a [`ThemeStore`](crate::ThemeStore).
///
/// Deserializes from partial documents; missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use showcase_theme::{Theme, ThemeConfig};
///
/// let config = ThemeConfig::default()
///     .with_storage_key("demo-theme")
///     .with_fallback(Theme::G10);
/// assert_eq!(config.storage_key, "demo-theme");
/// assert!(config.follow_system);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the chosen theme is persisted under.
    pub storage_key: String,
    /// Theme used when nothing is stored and the OS is not consulted.
    pub fallback: Theme,
    /// Whether the OS preference seeds the theme and is tracked until the
    /// user makes an explicit choice.
    pub follow_system: bool,
}

impl ThemeConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_fallback(mut self, theme: Theme) -> Self {
        self.fallback = theme;
        self
    }

    pub fn follow_system(mut self, follow: bool) -> Self {
        self.follow_system = follow;
        self
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fallback: Theme::White,
            follow_system: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "carbon-theme-preference");
        assert_eq!(config.fallback, Theme::White);
        assert!(config.follow_system);
    }

    #[test]
    fn test_config_partial_json() {
        let config: ThemeConfig =
            serde_json::from_str(r#"{ "fallback": "g100", "follow_system": false }"#).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.fallback, Theme::G100);
        assert!(!config.follow_system);
    }

    #[test]
    fn test_config_rejects_unknown_fallback() {
        let result = serde_json::from_str::<ThemeConfig>(r#"{ "fallback": "sepia" }"#);
        assert!(result.is_err());
    }
}
