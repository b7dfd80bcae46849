//! The light/dark colour mode

use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// Active colour mode. Every derived colour in the dashboard depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    Light,
    #[default]
    Dark,
}

impl Mode {
    /// Returns the other mode
    pub fn toggled(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    /// Textual form, also used as the `data-theme` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// Both modes, dark first.
    pub fn all() -> &'static [Mode] {
        &[Mode::Dark, Mode::Light]
    }

    /// Parse a mode, falling back to [`Mode::Light`] on unrecognized input.
    ///
    /// A warning is logged for the fallback so a bad value is still visible
    /// in the logs.
    pub fn parse_or_light(value: &str) -> Self {
        match value.parse() {
            Ok(mode) => mode,
            Err(err) => {
                tracing::warn!(value, error = %err, "falling back to light mode");
                Mode::Light
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("light") {
            Ok(Mode::Light)
        } else if trimmed.eq_ignore_ascii_case("dark") {
            Ok(Mode::Dark)
        } else {
            Err(ThemeError::UnknownMode(s.to_string()))
        }
    }
}
