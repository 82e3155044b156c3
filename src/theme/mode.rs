//! The light/dark appearance value.

use serde::{Deserialize, Serialize};

/// The light/dark display preference applied to the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
}

impl AppearanceMode {
    /// Returns the opposite mode.
    pub fn flipped(self) -> Self {
        match self {
            AppearanceMode::Light => AppearanceMode::Dark,
            AppearanceMode::Dark => AppearanceMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, AppearanceMode::Dark)
    }

    /// The string written to durable storage.
    pub fn as_str(self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
        }
    }

    /// Interprets a persisted value.
    ///
    /// Only `"dark"` selects dark mode; any other stored string reads as light.
    /// Callers treat an empty value as nothing persisted.
    pub fn from_persisted(value: &str) -> Self {
        if value == "dark" {
            AppearanceMode::Dark
        } else {
            AppearanceMode::Light
        }
    }

    /// Accessible label for the toggle control showing this mode.
    pub fn toggle_label(self) -> &'static str {
        match self {
            AppearanceMode::Light => "Switch to dark mode",
            AppearanceMode::Dark => "Switch to light mode",
        }
    }
}

impl std::fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AppearanceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(AppearanceMode::Light),
            "dark" => Ok(AppearanceMode::Dark),
            other => Err(format!("unknown appearance mode `{other}`; expected light|dark")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flipped_round_trip() {
        assert_eq!(AppearanceMode::Light.flipped(), AppearanceMode::Dark);
        assert_eq!(AppearanceMode::Light.flipped().flipped(), AppearanceMode::Light);
    }

    #[test]
    fn test_from_persisted_only_dark_is_dark() {
        assert_eq!(AppearanceMode::from_persisted("dark"), AppearanceMode::Dark);
        assert_eq!(AppearanceMode::from_persisted("light"), AppearanceMode::Light);
        assert_eq!(AppearanceMode::from_persisted("DARK"), AppearanceMode::Light);
        assert_eq!(AppearanceMode::from_persisted(""), AppearanceMode::Light);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Dark ".parse::<AppearanceMode>(), Ok(AppearanceMode::Dark));
        assert!("sepia".parse::<AppearanceMode>().is_err());
    }

    #[test]
    fn test_toggle_label_names_target_mode() {
        assert_eq!(AppearanceMode::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(AppearanceMode::Light.toggle_label(), "Switch to dark mode");
    }
}
