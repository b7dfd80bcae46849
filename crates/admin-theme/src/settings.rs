//! Theme settings derived from the colour mode
//!
//! [`build_theme_settings`] maps semantic palette roles onto ramp stops and
//! attaches the fixed typography scale. The result is the only thing the
//! rendering layer needs to know about the theme.

use crate::mode::Mode;
use crate::palette::{HexColour, Palette, ShadeStop, resolve_palette};

/// Body and heading font stack
pub const FONT_FAMILY: &str = "Source Sans Pro,sans-serif";

/// Base body font size in points
pub const BASE_FONT_SIZE: u16 = 12;

/// Page background in light mode. Not taken from any ramp.
pub const LIGHT_BACKGROUND: HexColour = HexColour::new("#fcfcfc");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MainColour {
    pub main: HexColour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NeutralColours {
    pub dark: HexColour,
    pub main: HexColour,
    pub light: HexColour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BackgroundColours {
    pub default: HexColour,
}

/// Semantic colour roles consumed by components
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaletteRoles {
    pub mode: Mode,
    pub primary: MainColour,
    pub secondary: MainColour,
    pub neutral: NeutralColours,
    pub background: BackgroundColours,
}

/// Heading levels h1 through h6
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn all() -> &'static [HeadingLevel] {
        &[
            HeadingLevel::H1,
            HeadingLevel::H2,
            HeadingLevel::H3,
            HeadingLevel::H4,
            HeadingLevel::H5,
            HeadingLevel::H6,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }

    /// Point size for this level
    pub fn font_size(&self) -> u16 {
        match self {
            HeadingLevel::H1 => 40,
            HeadingLevel::H2 => 32,
            HeadingLevel::H3 => 24,
            HeadingLevel::H4 => 20,
            HeadingLevel::H5 => 16,
            HeadingLevel::H6 => 14,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextStyle {
    pub font_family: &'static str,
    pub font_size: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Typography {
    pub font_family: &'static str,
    pub font_size: u16,
    pub h1: TextStyle,
    pub h2: TextStyle,
    pub h3: TextStyle,
    pub h4: TextStyle,
    pub h5: TextStyle,
    pub h6: TextStyle,
}

impl Typography {
    fn standard() -> Self {
        let heading = |level: HeadingLevel| TextStyle {
            font_family: FONT_FAMILY,
            font_size: level.font_size(),
        };
        Self {
            font_family: FONT_FAMILY,
            font_size: BASE_FONT_SIZE,
            h1: heading(HeadingLevel::H1),
            h2: heading(HeadingLevel::H2),
            h3: heading(HeadingLevel::H3),
            h4: heading(HeadingLevel::H4),
            h5: heading(HeadingLevel::H5),
            h6: heading(HeadingLevel::H6),
        }
    }

    pub fn heading(&self, level: HeadingLevel) -> &TextStyle {
        match level {
            HeadingLevel::H1 => &self.h1,
            HeadingLevel::H2 => &self.h2,
            HeadingLevel::H3 => &self.h3,
            HeadingLevel::H4 => &self.h4,
            HeadingLevel::H5 => &self.h5,
            HeadingLevel::H6 => &self.h6,
        }
    }

    /// Headings in h1..h6 order.
    pub fn headings(&self) -> impl Iterator<Item = (HeadingLevel, &TextStyle)> + '_ {
        HeadingLevel::all()
            .iter()
            .map(move |level| (*level, self.heading(*level)))
    }
}

/// Everything the rendering layer reads from the theme
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ThemeSettings {
    pub palette: PaletteRoles,
    pub typography: Typography,
    /// Raw ramps for components that need a specific stop.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub tokens: &'static Palette,
}

impl ThemeSettings {
    pub fn mode(&self) -> Mode {
        self.palette.mode
    }
}

/// Build the theme for `mode`.
pub fn build_theme_settings(mode: Mode) -> ThemeSettings {
    let tokens = resolve_palette(mode);

    let (primary, background) = match mode {
        Mode::Dark => (tokens.primary[ShadeStop::S100], tokens.primary[ShadeStop::S500]),
        Mode::Light => (tokens.primary[ShadeStop::S500], LIGHT_BACKGROUND),
    };

    ThemeSettings {
        palette: PaletteRoles {
            mode,
            primary: MainColour { main: primary },
            secondary: MainColour {
                main: tokens.green_accent[ShadeStop::S500],
            },
            neutral: NeutralColours {
                dark: tokens.grey[ShadeStop::S700],
                main: tokens.grey[ShadeStop::S500],
                light: tokens.grey[ShadeStop::S300],
            },
            background: BackgroundColours {
                default: background,
            },
        },
        typography: Typography::standard(),
        tokens,
    }
}
