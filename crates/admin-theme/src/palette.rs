//! Colour design tokens
//!
//! Five colour families, each a nine-stop ramp, authored separately for the
//! dark and light modes. The tables are literal constants: the light table
//! looks like a reversal of the dark one, but it is authored independently
//! and `primary[400]` in light mode is a near-white that breaks the mirror.
//! Keep it that way rather than deriving one table from the other.
//!
//! Base tokens:
//!
//! | family | base |
//! |---|---|
//! | grey | `#666666` |
//! | primary (dark blue) | `#141b2d` |
//! | green accent | `#4cceac` |
//! | red accent | `#db4f4a` |
//! | blue accent | `#6870fa` |

use std::fmt;
use std::ops::Index;

use crate::error::{Result, ThemeError};
use crate::mode::Mode;

/// One of the nine shade keys, 100 through 900.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShadeStop(u16);

impl ShadeStop {
    pub const S100: ShadeStop = ShadeStop(100);
    pub const S200: ShadeStop = ShadeStop(200);
    pub const S300: ShadeStop = ShadeStop(300);
    pub const S400: ShadeStop = ShadeStop(400);
    pub const S500: ShadeStop = ShadeStop(500);
    pub const S600: ShadeStop = ShadeStop(600);
    pub const S700: ShadeStop = ShadeStop(700);
    pub const S800: ShadeStop = ShadeStop(800);
    pub const S900: ShadeStop = ShadeStop(900);

    /// Every stop, lightest key first.
    pub const ALL: [ShadeStop; 9] = [
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    pub fn new(value: u16) -> Result<Self> {
        if value % 100 == 0 && (100..=900).contains(&value) {
            Ok(ShadeStop(value))
        } else {
            Err(ThemeError::InvalidShadeStop(value))
        }
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    fn index(&self) -> usize {
        usize::from(self.0 / 100 - 1)
    }
}

impl fmt::Display for ShadeStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for ShadeStop {
    type Error = ThemeError;

    fn try_from(value: u16) -> Result<Self> {
        ShadeStop::new(value)
    }
}

/// An 8-bit RGB triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#rrggbb` string (hex digits in either case).
    pub fn from_hex(value: &str) -> Result<Self> {
        if !is_hex_colour(value) {
            return Err(ThemeError::InvalidHexColour(value.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&value[range], 16)
                .map_err(|_| ThemeError::InvalidHexColour(value.to_string()))
        };
        Ok(Rgb {
            r: channel(1..3)?,
            g: channel(3..5)?,
            b: channel(5..7)?,
        })
    }
}

/// A `#rrggbb` colour literal, stored exactly as authored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HexColour(&'static str);

impl HexColour {
    /// Wrap a literal. Fails at compile time when used in a constant with a
    /// malformed literal.
    pub const fn new(hex: &'static str) -> Self {
        assert!(is_hex_colour(hex), "colour literal must be #rrggbb");
        HexColour(hex)
    }

    /// Validate a runtime `#rrggbb` string.
    pub fn parse(value: &'static str) -> Result<Self> {
        if is_hex_colour(value) {
            Ok(HexColour(value))
        } else {
            Err(ThemeError::InvalidHexColour(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn rgb(&self) -> Rgb {
        // Validated on construction
        Rgb::from_hex(self.0).unwrap_or(Rgb { r: 0, g: 0, b: 0 })
    }
}

impl fmt::Display for HexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for HexColour {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Whether `value` is `#` followed by exactly six hex digits.
pub const fn is_hex_colour(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return false;
    }
    let mut i = 1;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}

/// Nine shades of one colour family, indexed by [`ShadeStop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColourRamp([HexColour; 9]);

impl ColourRamp {
    /// Build a ramp from nine literals ordered 100 through 900.
    pub const fn from_literals(stops: [&'static str; 9]) -> Self {
        let mut shades = [HexColour::new(stops[0]); 9];
        let mut i = 1;
        while i < 9 {
            shades[i] = HexColour::new(stops[i]);
            i += 1;
        }
        ColourRamp(shades)
    }

    pub fn get(&self, stop: ShadeStop) -> HexColour {
        self.0[stop.index()]
    }

    /// `(stop, colour)` pairs, 100 first.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeStop, HexColour)> + '_ {
        ShadeStop::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<ShadeStop> for ColourRamp {
    type Output = HexColour;

    fn index(&self, stop: ShadeStop) -> &HexColour {
        &self.0[stop.index()]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ColourRamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (stop, colour) in self.iter() {
            map.serialize_entry(&stop.value(), colour.as_str())?;
        }
        map.end()
    }
}

/// Names of the five colour families
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RampName {
    Grey,
    Primary,
    GreenAccent,
    RedAccent,
    BlueAccent,
}

impl RampName {
    pub fn all() -> &'static [RampName] {
        &[
            RampName::Grey,
            RampName::Primary,
            RampName::GreenAccent,
            RampName::RedAccent,
            RampName::BlueAccent,
        ]
    }

    /// Token name as used in the design tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            RampName::Grey => "grey",
            RampName::Primary => "primary",
            RampName::GreenAccent => "greenAccent",
            RampName::RedAccent => "redAccent",
            RampName::BlueAccent => "blueAccent",
        }
    }

    /// Kebab-case name for CSS custom properties.
    pub fn css_name(&self) -> &'static str {
        match self {
            RampName::Grey => "grey",
            RampName::Primary => "primary",
            RampName::GreenAccent => "green-accent",
            RampName::RedAccent => "red-accent",
            RampName::BlueAccent => "blue-accent",
        }
    }
}

/// The full set of colour ramps for one mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Palette {
    pub grey: ColourRamp,
    pub primary: ColourRamp,
    pub green_accent: ColourRamp,
    pub red_accent: ColourRamp,
    pub blue_accent: ColourRamp,
}

impl Palette {
    pub fn ramp(&self, name: RampName) -> &ColourRamp {
        match name {
            RampName::Grey => &self.grey,
            RampName::Primary => &self.primary,
            RampName::GreenAccent => &self.green_accent,
            RampName::RedAccent => &self.red_accent,
            RampName::BlueAccent => &self.blue_accent,
        }
    }

    /// All five ramps in table order.
    pub fn ramps(&self) -> impl Iterator<Item = (RampName, &ColourRamp)> + '_ {
        RampName::all().iter().map(move |name| (*name, self.ramp(*name)))
    }
}

pub const DARK_PALETTE: Palette = Palette {
    grey: ColourRamp::from_literals([
        "#e0e0e0", "#c2c2c2", "#a3a3a3", "#858585", "#666666", "#525252", "#3d3d3d", "#292929",
        "#141414",
    ]),
    primary: ColourRamp::from_literals([
        "#d0d1d5", "#a1a4ab", "#727681", "#1F2A40", "#141b2d", "#101624", "#0c101b", "#080b12",
        "#040509",
    ]),
    green_accent: ColourRamp::from_literals([
        "#dbf5ee", "#b7ebde", "#94e2cd", "#70d8bd", "#4cceac", "#3da58a", "#2e7c67", "#1e5245",
        "#0f2922",
    ]),
    red_accent: ColourRamp::from_literals([
        "#f8dcdb", "#f1b9b7", "#e99592", "#e2726e", "#db4f4a", "#af3f3b", "#832f2c", "#58201e",
        "#2c100f",
    ]),
    blue_accent: ColourRamp::from_literals([
        "#e1e2fe", "#c3c6fd", "#a4a9fc", "#868dfb", "#6870fa", "#535ac8", "#3e4396", "#2a2d64",
        "#151632",
    ]),
};

pub const LIGHT_PALETTE: Palette = Palette {
    grey: ColourRamp::from_literals([
        "#141414", "#292929", "#3d3d3d", "#525252", "#666666", "#858585", "#a3a3a3", "#c2c2c2",
        "#e0e0e0",
    ]),
    // 400 is a near-white, not the mirror of dark 600
    primary: ColourRamp::from_literals([
        "#040509", "#080b12", "#0c101b", "#f2f0f0", "#141b2d", "#1F2A40", "#727681", "#a1a4ab",
        "#d0d1d5",
    ]),
    green_accent: ColourRamp::from_literals([
        "#0f2922", "#1e5245", "#2e7c67", "#3da58a", "#4cceac", "#70d8bd", "#94e2cd", "#b7ebde",
        "#dbf5ee",
    ]),
    red_accent: ColourRamp::from_literals([
        "#2c100f", "#58201e", "#832f2c", "#af3f3b", "#db4f4a", "#e2726e", "#e99592", "#f1b9b7",
        "#f8dcdb",
    ]),
    blue_accent: ColourRamp::from_literals([
        "#151632", "#2a2d64", "#3e4396", "#535ac8", "#6870fa", "#868dfb", "#a4a9fc", "#c3c6fd",
        "#e1e2fe",
    ]),
};

/// Colour ramps for `mode`.
pub fn resolve_palette(mode: Mode) -> &'static Palette {
    match mode {
        Mode::Dark => &DARK_PALETTE,
        Mode::Light => &LIGHT_PALETTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_stop_validation() {
        assert_eq!(ShadeStop::new(500).unwrap(), ShadeStop::S500);
        assert_eq!(ShadeStop::try_from(900).unwrap(), ShadeStop::S900);
        assert_eq!(ShadeStop::new(0), Err(ThemeError::InvalidShadeStop(0)));
        assert_eq!(ShadeStop::new(450), Err(ThemeError::InvalidShadeStop(450)));
        assert_eq!(ShadeStop::new(1000), Err(ThemeError::InvalidShadeStop(1000)));
    }

    #[test]
    fn test_shade_stops_ascending() {
        let values: Vec<u16> = ShadeStop::ALL.iter().map(ShadeStop::value).collect();
        assert_eq!(values, vec![100, 200, 300, 400, 500, 600, 700, 800, 900]);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(
            Rgb::from_hex("#1F2A40").unwrap(),
            Rgb { r: 0x1f, g: 0x2a, b: 0x40 }
        );
        assert!(Rgb::from_hex("1F2A40").is_err());
        assert!(Rgb::from_hex("#1F2A4").is_err());
        assert!(Rgb::from_hex("#1F2A4G").is_err());
    }

    #[test]
    fn test_hex_colour_parse() {
        assert_eq!(HexColour::parse("#fcfcfc").unwrap(), "#fcfcfc");
        assert_eq!(HexColour::parse("#1F2A40").unwrap().as_str(), "#1F2A40");
        assert_eq!(
            HexColour::parse("fcfcfc"),
            Err(ThemeError::InvalidHexColour("fcfcfc".to_string()))
        );
        assert!(HexColour::parse("#fcfcf").is_err());
        assert!(HexColour::parse("#zzzzzz").is_err());
    }

    #[test]
    fn test_hex_colour_channels() {
        assert_eq!(
            LIGHT_PALETTE.primary[ShadeStop::S600].rgb(),
            Rgb { r: 0x1f, g: 0x2a, b: 0x40 }
        );
        assert_eq!(
            DARK_PALETTE.green_accent[ShadeStop::S500].rgb(),
            Rgb { r: 0x4c, g: 0xce, b: 0xac }
        );
    }

    #[test]
    fn test_ramp_lookup_by_stop() {
        let primary = &DARK_PALETTE.primary;
        assert_eq!(primary[ShadeStop::S100], "#d0d1d5");
        assert_eq!(primary.get(ShadeStop::S400), "#1F2A40");
        assert_eq!(primary.iter().last().unwrap().1, "#040509");
    }

    #[test]
    fn test_light_primary_400_is_not_mirrored() {
        assert_eq!(LIGHT_PALETTE.primary[ShadeStop::S400], "#f2f0f0");
        assert_ne!(
            LIGHT_PALETTE.primary[ShadeStop::S400],
            DARK_PALETTE.primary[ShadeStop::S600]
        );
    }

    #[test]
    fn test_grey_and_accents_mirror() {
        for name in [RampName::Grey, RampName::GreenAccent, RampName::RedAccent, RampName::BlueAccent] {
            let dark = DARK_PALETTE.ramp(name);
            let light = LIGHT_PALETTE.ramp(name);
            for (i, stop) in ShadeStop::ALL.iter().enumerate() {
                assert_eq!(light[*stop], dark[ShadeStop::ALL[8 - i]], "{} {}", name.as_str(), stop);
            }
        }
    }

    #[test]
    fn test_resolve_palette_selects_table() {
        assert_eq!(resolve_palette(Mode::Dark), &DARK_PALETTE);
        assert_eq!(resolve_palette(Mode::Light), &LIGHT_PALETTE);
    }
}
