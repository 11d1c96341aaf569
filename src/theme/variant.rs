//! The theme enum and its metadata table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ThemeError;

/// One of the four visual variants of the design system.
///
/// The string form (`white`, `g10`, `g90`, `g100`) is what gets persisted,
/// written to the document root and forwarded to the theme provider.
///
/// # Example
///
/// ```rust
/// use showcase_theme::Theme;
///
/// let theme: Theme = "g90".parse().unwrap();
/// assert!(theme.is_dark());
/// assert_eq!(theme.next(), Theme::G100);
/// assert_eq!(theme.to_string(), "g90");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    White,
    G10,
    G90,
    G100,
}

/// Static description of a [`Theme`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeMeta {
    /// Human readable name, e.g. `"Gray 10"`.
    pub label: &'static str,
    /// Whether the variant uses a dark background.
    pub is_dark: bool,
    /// Successor in the toggle cycle.
    pub next: Theme,
    /// Browser chrome color hint (`<meta name="theme-color">`).
    pub chrome_color: &'static str,
    /// Background, layer and border colors used by preview tiles.
    pub swatches: [&'static str; 3],
}

const WHITE: ThemeMeta = ThemeMeta {
    label: "White",
    is_dark: false,
    next: Theme::G10,
    chrome_color: "#ffffff",
    swatches: ["#ffffff", "#f4f4f4", "#e0e0e0"],
};

const G10: ThemeMeta = ThemeMeta {
    label: "Gray 10",
    is_dark: false,
    next: Theme::G90,
    chrome_color: "#f4f4f4",
    swatches: ["#f4f4f4", "#e8e8e8", "#c6c6c6"],
};

const G90: ThemeMeta = ThemeMeta {
    label: "Gray 90",
    is_dark: true,
    next: Theme::G100,
    chrome_color: "#262626",
    swatches: ["#262626", "#393939", "#525252"],
};

const G100: ThemeMeta = ThemeMeta {
    label: "Gray 100",
    is_dark: true,
    next: Theme::White,
    chrome_color: "#161616",
    swatches: ["#161616", "#262626", "#393939"],
};

impl Theme {
    /// All variants, in toggle-cycle order.
    pub const ALL: [Theme; 4] = [Theme::White, Theme::G10, Theme::G90, Theme::G100];

    /// Returns the static metadata for this variant.
    pub fn meta(self) -> &'static ThemeMeta {
        match self {
            Theme::White => &WHITE,
            Theme::G10 => &G10,
            Theme::G90 => &G90,
            Theme::G100 => &G100,
        }
    }

    /// The identifier used for storage, the document attribute and the provider.
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::White => "white",
            Theme::G10 => "g10",
            Theme::G90 => "g90",
            Theme::G100 => "g100",
        }
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn is_dark(self) -> bool {
        self.meta().is_dark
    }

    /// Successor in the cycle `white -> g10 -> g90 -> g100 -> white`.
    pub fn next(self) -> Theme {
        self.meta().next
    }

    pub fn chrome_color(self) -> &'static str {
        self.meta().chrome_color
    }

    /// `"Dark"` or `"Light"`, as shown next to labels in pickers.
    pub fn tag(self) -> &'static str {
        if self.is_dark() {
            "Dark"
        } else {
            "Light"
        }
    }

    /// Maps an OS color-scheme preference to the theme used for it.
    ///
    /// Only `g90` and `white` are ever chosen this way.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Theme {
        if prefers_dark {
            Theme::G90
        } else {
            Theme::White
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownTheme {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_theme() -> impl Strategy<Value = Theme> {
        prop::sample::select(Theme::ALL.to_vec())
    }

    #[test]
    fn test_is_dark_table() {
        assert!(!Theme::White.is_dark());
        assert!(!Theme::G10.is_dark());
        assert!(Theme::G90.is_dark());
        assert!(Theme::G100.is_dark());
    }

    #[test]
    fn test_next_cycle_order() {
        assert_eq!(Theme::White.next(), Theme::G10);
        assert_eq!(Theme::G10.next(), Theme::G90);
        assert_eq!(Theme::G90.next(), Theme::G100);
        assert_eq!(Theme::G100.next(), Theme::White);
    }

    #[test]
    fn test_parse_known_values() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        for value in ["", "G10", "gray10", "dark", " white"] {
            let err = value.parse::<Theme>().unwrap_err();
            assert_eq!(
                err,
                ThemeError::UnknownTheme {
                    value: value.to_string()
                }
            );
        }
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&Theme::G100).unwrap();
        assert_eq!(json, "\"g100\"");
        let theme: Theme = serde_json::from_str("\"g10\"").unwrap();
        assert_eq!(theme, Theme::G10);
        assert!(serde_json::from_str::<Theme>("\"g50\"").is_err());
    }

    #[test]
    fn test_from_prefers_dark() {
        assert_eq!(Theme::from_prefers_dark(true), Theme::G90);
        assert_eq!(Theme::from_prefers_dark(false), Theme::White);
    }

    #[test]
    fn test_chrome_colors() {
        assert_eq!(Theme::White.chrome_color(), "#ffffff");
        assert_eq!(Theme::G10.chrome_color(), "#f4f4f4");
        assert_eq!(Theme::G90.chrome_color(), "#262626");
        assert_eq!(Theme::G100.chrome_color(), "#161616");
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Theme::default(), Theme::White);
    }

    proptest! {
        #[test]
        fn prop_next_four_times_is_identity(start in any_theme()) {
            prop_assert_eq!(start.next().next().next().next(), start);
        }

        #[test]
        fn prop_next_never_fixed_point(start in any_theme()) {
            prop_assert_ne!(start.next(), start);
        }

        #[test]
        fn prop_tag_matches_dark_flag(theme in any_theme()) {
            prop_assert_eq!(theme.tag() == "Dark", theme.is_dark());
        }
    }
}
