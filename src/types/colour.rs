//! Colour type and hex parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SkinError};

/// An opaque RGB colour value.
///
/// Skin bitmaps carry no alpha channel, so neither does this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` / `RGB` (3 digits, each doubled to expand to 6)
    /// - `#RRGGBB` / `RRGGBB`
    ///
    /// Any other length or non-hex content is an error.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.as_bytes()[0] as char)?;
                let g = parse_hex_digit(hex.as_bytes()[1] as char)?;
                let b = parse_hex_digit(hex.as_bytes()[2] as char)?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(SkinError::InvalidConfiguration {
                message: format!("Invalid hex colour: {}", s),
            }),
        }
    }

    /// Normalized sRGB components, each in [0, 1].
    pub fn to_normalized(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Approximate equality with a per-normalized-channel tolerance.
    ///
    /// Used by glyph segmentation to match pixels against the sampled
    /// background colour (tolerance 0.01 per channel).
    pub fn approx_eq(self, other: Colour, tolerance: f32) -> bool {
        let a = self.to_normalized();
        let b = other.to_normalized();
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
    }

    /// Convert to an RGBA array (fully opaque), for PNG output.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl FromStr for Colour {
    type Err = SkinError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| SkinError::InvalidConfiguration {
            message: format!("Invalid hex digit: {}", c),
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SkinError::InvalidConfiguration {
        message: format!("Invalid hex byte: {}", s),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#F00").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_from_hex_case_insensitive() {
        assert_eq!(
            Colour::from_hex("#aAbBcC").unwrap(),
            Colour::from_hex("#AABBCC").unwrap()
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#12345678").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#FF0000");
    }

    #[test]
    fn test_approx_eq_exact() {
        let a = Colour::rgb(10, 20, 30);
        assert!(a.approx_eq(a, 0.0));
    }

    #[test]
    fn test_approx_eq_within_tolerance() {
        // 2/255 ≈ 0.0078, inside a 0.01 tolerance
        let a = Colour::rgb(100, 100, 100);
        let b = Colour::rgb(102, 100, 98);
        assert!(a.approx_eq(b, 0.01));
    }

    #[test]
    fn test_approx_eq_outside_tolerance() {
        // 3/255 ≈ 0.0118, outside a 0.01 tolerance
        let a = Colour::rgb(100, 100, 100);
        let b = Colour::rgb(103, 100, 100);
        assert!(!a.approx_eq(b, 0.01));
    }

    #[test]
    fn test_to_normalized() {
        let n = Colour::WHITE.to_normalized();
        assert_eq!(n, [1.0, 1.0, 1.0]);
        let n = Colour::BLACK.to_normalized();
        assert_eq!(n, [0.0, 0.0, 0.0]);
    }
}
