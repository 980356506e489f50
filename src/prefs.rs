//! Appearance preferences and their `localStorage` encoding.
//!
//! DESIGN
//! ======
//! Stored values are plain strings shared with server templates, so decoding
//! is lenient: unknown values fall through to the same defaults the pages
//! have always used instead of failing.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use serde::Serialize;

pub const THEME_KEY: &str = "theme";
pub const BLUR_EFFECT_KEY: &str = "blurEffect";
pub const THEME_MODE_KEY: &str = "themePreference";

/// Effective light/dark appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Decode the stored `theme` value.
    ///
    /// `"dark"` is dark; a missing or empty value defers to the OS color
    /// scheme; anything else is light.
    pub fn from_stored(stored: Option<&str>, prefers_dark: impl FnOnce() -> bool) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            None | Some("") => Self::from_dark(prefers_dark()),
            Some(_) => Self::Light,
        }
    }
}

/// How the effective theme is chosen from the settings radio group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    System,
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    /// Parse a radio value; anything that is not `system` or `dark` is light.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "system" => Self::System,
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Effective theme for this mode given the OS color scheme right now.
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            Self::System => Theme::from_dark(prefers_dark),
            Self::Dark => Theme::Dark,
            Self::Light => Theme::Light,
        }
    }
}

/// Decode the stored `blurEffect` flag; only the exact string `"false"` disables it.
pub fn blur_enabled_from_stored(stored: Option<&str>) -> bool {
    stored != Some("false")
}

pub fn blur_stored_value(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}
