//! Interchangeable UI affordances over the shared [`ThemeStore`](crate::ThemeStore).
//!
//! Each consumer holds a store handle and nothing else theme-related. It
//! renders from the store through `view()`, which returns plain serializable
//! props for whatever component library draws it, and reacts to interaction
//! by calling exactly one of `set_theme` or `toggle_theme` ([`ThemeDemo`]
//! only displays the theme). Any number of them can be mounted at once and
//! all reflect the same value.
//!
//! | Consumer | Interaction | Store call |
//! |----------|-------------|------------|
//! | [`HeaderThemeSwitcher`] | `click` | `toggle_theme` |
//! | [`IconThemeSwitcher`] | `click` | `toggle_theme` |
//! | [`ThemeToggle`] | `toggle` | `set_theme(white / g90)` |
//! | [`ThemeRadioGroup`] | `select` | `set_theme` |
//! | [`ThemeSelector`] | `change` | `set_theme` |
//! | [`ThemeOverflowMenu`] | `choose` | `set_theme` |
//! | [`FloatingThemeSwitcher`] | `select` | `set_theme` |
//! | [`ThemePreview`] | `pick` | `set_theme` |
//! | [`ThemeDemo`] | none (read-only) | none |
//!
//! [`FloatingThemeSwitcher`] additionally owns whether its panel is open.

mod cycle;
mod demo;
mod floating;
mod overflow;
mod preview;
mod radio;
mod select;
mod toggle;

pub use cycle::{
    ButtonSize, HeaderSwitcherView, HeaderThemeSwitcher, IconSwitcherView, IconThemeSwitcher,
    ThemeIcon,
};
pub use demo::{DemoView, ThemeDemo};
pub use floating::{ButtonKind, FloatingPanelView, FloatingSwitcherView, FloatingThemeSwitcher};
pub use overflow::{OverflowItem, OverflowMenuView, ThemeOverflowMenu};
pub use preview::{PreviewTile, PreviewView, ThemePreview};
pub use radio::{RadioGroupView, RadioOption, ThemeRadioGroup};
pub use select::{SelectItem, SelectView, ThemeSelector};
pub use toggle::{ThemeToggle, ToggleView};

use crate::theme::Theme;

/// `"Gray 10 (Light)"`-style text used by pickers.
pub(crate) fn labelled_with_tag(theme: Theme) -> String {
    format!("{} ({})", theme.label(), theme.tag())
}
