use image::Rgb;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 24-bit sRGB color written as `#RRGGBB` in settings files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }

    /// Parse a hex color, with or without the leading `#`.
    /// Accepts both the 6-digit and the 3-digit shorthand forms.
    pub fn parse(hex: &str) -> Result<Self, ColorParseError> {
        Srgb::<u8>::from_str(hex.trim())
            .map(Self)
            .map_err(|e| ColorParseError(format!("{:?}: {}", hex, e)))
    }

    /// Pixel value for drawing into an `RgbImage`
    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb([self.0.red, self.0.green, self.0.blue])
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.red, self.0.green, self.0.blue)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Returned when a settings value is not a valid hex color
#[derive(Debug, Clone)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color {}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

/// Shorthand for the literal colors in `RenderConfig::default()`.
/// Only ever called with well-formed constants; a malformed literal falls back to black.
pub(crate) fn hex(value: &str) -> HexColor {
    HexColor::parse(value).unwrap_or(HexColor::from_rgb(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        let color = HexColor::parse("#E07A5F").unwrap();
        assert_eq!(color.to_pixel(), Rgb([0xE0, 0x7A, 0x5F]));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_hash_optional() {
        assert_eq!(
            HexColor::parse("fffaf6").unwrap(),
            HexColor::parse("#FFFAF6").unwrap()
        );
    }

    #[test]
    fn test_parse_three_digit_shorthand() {
        assert_eq!(HexColor::parse("#fff").unwrap(), HexColor::from_rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(HexColor::parse("#12345").is_err());
        assert!(HexColor::parse("not a color").is_err());
    }

    #[test]
    fn test_display_is_uppercase_with_hash() {
        assert_eq!(HexColor::parse("#6a9fe6").unwrap().to_string(), "#6A9FE6");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&HexColor::from_rgb(0x1F, 0x2B, 0x3A)).unwrap();
        assert_eq!(json, "\"#1F2B3A\"");

        let color: HexColor = serde_json::from_str("\"#8A6F6B\"").unwrap();
        assert_eq!(color, HexColor::from_rgb(0x8A, 0x6F, 0x6B));

        assert!(serde_json::from_str::<HexColor>("\"#zzzzzz\"").is_err());
    }
}
