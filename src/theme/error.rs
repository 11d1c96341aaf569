//! Theme errors.

/// Error returned when a theme value or the theme context is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A string did not name one of the known theme variants
    UnknownTheme { value: String },
    /// A consumer was resolved from a context that holds no theme store
    MissingProvider { consumer: &'static str },
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::UnknownTheme { value } => {
                write!(
                    f,
                    "unknown theme '{}' (expected one of: white, g10, g90, g100)",
                    value
                )
            }
            ThemeError::MissingProvider { consumer } => {
                write!(f, "{} must be used within a ThemeProvider", consumer)
            }
        }
    }
}

impl std::error::Error for ThemeError {}
