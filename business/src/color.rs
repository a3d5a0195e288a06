//! Hex colors used for the QR foreground and background.
//!
//! Colors travel as `#rrggbb` strings, which is what a browser color input
//! emits. The short `#rgb` form is accepted on input as well.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::QrateError;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Default QR foreground.
    pub const INDIGO: Self = Self::from_rgb(0x4F, 0x46, 0xE5);
    pub const WHITE: Self = Self::from_rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::from_rgb(0x00, 0x00, 0x00);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Fully opaque RGBA, as expected by `image::Rgba`.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, u8::MAX]
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::INDIGO
    }
}

impl From<[u8; 3]> for HexColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl FromStr for HexColor {
    type Err = QrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || QrateError::InvalidColor(s.to_owned());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_err| invalid());

        match digits.len() {
            6 => Ok(Self::from_rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // `#abc` is shorthand for `#aabbcc`.
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 0x11);
                Ok(Self::from_rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
