//! Theme preference values.
//!
//! DESIGN
//! ======
//! `ThemeMode` is what the user picks and what gets persisted.
//! `EffectiveTheme` is what the document actually shows; `System` is never
//! an effective theme, it always collapses to light or dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's display-theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system's color-scheme preference.
    #[default]
    System,
}

impl ThemeMode {
    /// Button order in the footer switch.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::System, ThemeMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a persisted value, treating anything unknown as no preference.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of `light`, `dark`, `system`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode: {0}")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseThemeModeError(other.to_owned())),
        }
    }
}

/// Concrete theme applied to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolve the concrete theme: an explicit choice wins, `System` follows the OS.
pub fn resolve_effective_theme(mode: ThemeMode, os_prefers_dark: bool) -> EffectiveTheme {
    match mode {
        ThemeMode::Light => EffectiveTheme::Light,
        ThemeMode::Dark => EffectiveTheme::Dark,
        ThemeMode::System if os_prefers_dark => EffectiveTheme::Dark,
        ThemeMode::System => EffectiveTheme::Light,
    }
}
