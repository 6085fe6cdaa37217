//! Display theme preference

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeParseError;

/// The active display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The literal stored in durable storage and on the document root
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Accessible label for a control that switches away from this theme
    pub fn toggle_label(self) -> String {
        format!("Switch to {} mode", self.toggled())
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeParseError;

    /// Only the exact literals are accepted; `"Dark"` or `" dark"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals() {
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
        assert_eq!("dark".parse(), Ok(ThemePreference::Dark));
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert!("".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(ThemePreference::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(ThemePreference::Dark.toggle_label(), "Switch to light mode");
    }
}
