// File: crates/ui-core/src/palette.rs
// Summary: Series colours and the categorical palettes that assign them.

use std::fmt;

use crate::error::ChartError;

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ChartError> {
        let invalid = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17).map_err(|_| invalid());
                Ok(Self::from_rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Ordered categorical colours for series.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    colors: Vec<Color>,
}

impl Palette {
    pub fn categorical_light() -> Self {
        Self {
            name: "categorical-light",
            colors: vec![
                Color::from_rgb(0x68, 0x8a, 0xe8),
                Color::from_rgb(0xc3, 0x33, 0x8f),
                Color::from_rgb(0x2e, 0xa5, 0x97),
                Color::from_rgb(0x83, 0x56, 0xcc),
                Color::from_rgb(0xc2, 0x51, 0x1c),
                Color::from_rgb(0x96, 0x99, 0x01),
                Color::from_rgb(0x1b, 0x8e, 0x6d),
                Color::from_rgb(0xb3, 0x26, 0x31),
                Color::from_rgb(0x44, 0x79, 0xd9),
                Color::from_rgb(0x96, 0x44, 0x9b),
            ],
        }
    }

    pub fn categorical_dark() -> Self {
        Self {
            name: "categorical-dark",
            colors: vec![
                Color::from_rgb(0x8e, 0xa9, 0xff),
                Color::from_rgb(0xf5, 0x6d, 0xb4),
                Color::from_rgb(0x5f, 0xd0, 0xbf),
                Color::from_rgb(0xb0, 0x8a, 0xf6),
                Color::from_rgb(0xf4, 0x8a, 0x5b),
                Color::from_rgb(0xc8, 0xcb, 0x3c),
                Color::from_rgb(0x4e, 0xc5, 0x9e),
                Color::from_rgb(0xf8, 0x72, 0x77),
                Color::from_rgb(0x7b, 0xa8, 0xff),
                Color::from_rgb(0xd1, 0x80, 0xd6),
            ],
        }
    }

    pub fn from_colors(colors: Vec<Color>) -> Result<Self, ChartError> {
        if colors.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        Ok(Self { name: "custom", colors })
    }

    pub fn from_hex(literals: &[&str]) -> Result<Self, ChartError> {
        let colors = literals.iter().map(|s| Color::from_hex(s)).collect::<Result<Vec<_>, _>>()?;
        Self::from_colors(colors)
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Colour for the `i`-th series; wraps around.
    pub fn color_at(&self, i: usize) -> Color {
        self.colors[i % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self { Self::categorical_light() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_display() {
        let c = Color::from_hex("#0073bb").unwrap();
        assert_eq!(c, Color::from_rgb(0, 0x73, 0xbb));
        assert_eq!(c.to_string(), "#0073bb");
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::from_rgb(255, 255, 255));
        assert_eq!(Color::from_hex("#11223380").unwrap().a, 0x80);
    }

    #[test]
    fn bad_literals_are_rejected() {
        assert!(Color::from_hex("0073bb").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert_eq!(Palette::from_colors(Vec::new()), Err(ChartError::EmptyPalette));
    }

    #[test]
    fn builtin_palettes_are_non_empty() {
        assert_eq!(Palette::categorical_light().len(), 10);
        assert_eq!(Palette::categorical_dark().len(), 10);
    }
}
