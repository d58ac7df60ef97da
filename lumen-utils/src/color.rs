// Lumen colors
//
// 24-bit RGB colors as they travel from swatches, hex input and scene
// programs to the render sink. Rendered as uppercase `#RRGGBB`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{LumenError, LumenResult};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse user hex input.
    ///
    /// Accepts 3 or 6 hex digits, with or without a leading `#` and
    /// surrounding whitespace. Short form is expanded (`F80` -> `FF8800`).
    pub fn parse_hex(input: &str) -> LumenResult<Self> {
        let raw = input.trim().trim_start_matches('#').trim();
        let invalid = || LumenError::InvalidColor(input.to_string());

        if !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match raw.len() {
            3 => raw.chars().flat_map(|c| [c, c]).collect(),
            6 => raw.to_string(),
            _ => return Err(invalid()),
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Uppercase `#RRGGBB` form handed to render sinks
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Scale every channel by `intensity` percent
    pub fn dimmed(&self, intensity: Intensity) -> Self {
        let scale = |c: u8| ((c as u32 * intensity.percent() as u32 + 50) / 100) as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = LumenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Light output level in percent. 100 is full brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Intensity(u8);

impl Intensity {
    pub const FULL: Intensity = Intensity(100);

    pub fn new(percent: u32) -> LumenResult<Self> {
        if percent > 100 {
            return Err(LumenError::InvalidIntensity(percent));
        }
        Ok(Self(percent as u8))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Opacity of the black overlay that sits on top of the light
    pub fn overlay_opacity(&self) -> f64 {
        1.0 - f64::from(self.0) / 100.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u32> for Intensity {
    type Error = LumenError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u32 {
    fn from(intensity: Intensity) -> Self {
        u32::from(intensity.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        assert_eq!(Color::parse_hex("#ff8800").unwrap(), Color::rgb(0xFF, 0x88, 0x00));
        assert_eq!(Color::parse_hex("1A1A2E").unwrap(), Color::rgb(0x1A, 0x1A, 0x2E));
        assert_eq!(Color::parse_hex("  #00ff00 ").unwrap(), Color::rgb(0, 0xFF, 0));
    }

    #[test]
    fn test_parse_short_hex_expands() {
        assert_eq!(Color::parse_hex("F80").unwrap(), Color::rgb(0xFF, 0x88, 0x00));
        assert_eq!(Color::parse_hex("#abc").unwrap().to_hex(), "#AABBCC");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for bad in ["", "#", "12", "1234", "12345", "1234567", "GGGGGG", "#12 456", "ÿÿÿ"] {
            assert!(
                matches!(Color::parse_hex(bad), Err(LumenError::InvalidColor(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_hex_is_uppercase() {
        assert_eq!(Color::rgb(0x1a, 0x1a, 0x2e).to_hex(), "#1A1A2E");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::rgb(0xFF, 0x45, 0x00)).unwrap();
        assert_eq!(json, "\"#FF4500\"");

        let parsed: Color = serde_json::from_str("\"#0044ff\"").unwrap();
        assert_eq!(parsed, Color::rgb(0x00, 0x44, 0xFF));

        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_intensity_bounds() {
        assert!(Intensity::new(0).is_ok());
        assert!(Intensity::new(100).is_ok());
        assert!(matches!(Intensity::new(101), Err(LumenError::InvalidIntensity(101))));
        assert_eq!(Intensity::default(), Intensity::FULL);
    }

    #[test]
    fn test_overlay_opacity() {
        assert_eq!(Intensity::new(100).unwrap().overlay_opacity(), 0.0);
        assert_eq!(Intensity::new(0).unwrap().overlay_opacity(), 1.0);
        assert!((Intensity::new(25).unwrap().overlay_opacity() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_dimmed() {
        let white = Color::WHITE;
        assert_eq!(white.dimmed(Intensity::FULL), white);
        assert_eq!(white.dimmed(Intensity::new(0).unwrap()), Color::BLACK);
        assert_eq!(white.dimmed(Intensity::new(50).unwrap()), Color::rgb(128, 128, 128));
    }
}
