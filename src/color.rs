//! Color type and parsing.
//!
//! Colors can be written the way plotting scripts usually name them: a
//! named color (`"green"`, `"maroon"`) or a hex string (`"#4CC7BB"`,
//! `"#4CC7BB80"`).

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(C)]
#[cfg_attr(
    feature = "config",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

/// Named colors accepted by [`Rgba::parse`].
const NAMED: &[(&str, Rgba)] = &[
    ("black", Rgba::BLACK),
    ("white", Rgba::WHITE),
    ("red", Rgba::RED),
    ("green", Rgba::rgb(0, 128, 0)),
    ("blue", Rgba::BLUE),
    ("cyan", Rgba::rgb(0, 255, 255)),
    ("magenta", Rgba::rgb(255, 0, 255)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("purple", Rgba::rgb(128, 0, 128)),
    ("brown", Rgba::rgb(165, 42, 42)),
    ("maroon", Rgba::rgb(128, 0, 0)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("grey", Rgba::rgb(128, 128, 128)),
];

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Parse a named color or a `#rrggbb` / `#rrggbbaa` hex string.
    ///
    /// Names are matched case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use fnplot::color::Rgba;
    ///
    /// assert_eq!(Rgba::parse("#687078").unwrap(), Rgba::rgb(0x68, 0x70, 0x78));
    /// assert_eq!(Rgba::parse("Black").unwrap(), Rgba::BLACK);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| Error::InvalidColor(s.to_string()));
        }

        NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, color)| color)
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Rgba::parse("maroon").unwrap(), Rgba::rgb(128, 0, 0));
        assert_eq!(Rgba::parse(" CYAN ").unwrap(), Rgba::rgb(0, 255, 255));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgba::parse("#E85454").unwrap(), Rgba::rgb(0xE8, 0x54, 0x54));
        assert_eq!(Rgba::parse("#00000080").unwrap(), Rgba::new(0, 0, 0, 0x80));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Rgba::parse("#12345"), Err(Error::InvalidColor(_))));
        assert!(matches!(Rgba::parse("#zzzzzz"), Err(Error::InvalidColor(_))));
        assert!(matches!(Rgba::parse("chartreuse-ish"), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for color in [Rgba::rgb(0x4C, 0xC7, 0xBB), Rgba::new(1, 2, 3, 4)] {
            assert_eq!(color.to_string().parse::<Rgba>().unwrap(), color);
        }
    }
}
