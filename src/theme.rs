use eyre::{bail, Result};
use serde::{Deserialize, Serialize};

/// RGBA color, serialized as a `#rrggbb` or `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn alpha(self, alpha: f32) -> Self {
        Self {
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub fn parse_hex_str(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            bail!("invalid hex color {hex:?}: expected #rrggbb or #rrggbbaa");
        }
        let channel = |i: usize| -> Result<u8> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| eyre::eyre!("invalid hex color {hex:?}: {e}"))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_hex_string(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = eyre::Report;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_hex_str(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

/// Visual style of a smooth line chart.
///
/// Passed by the caller to whatever renders the layout; nothing in this
/// crate reads it back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    /// Line gradient, left end.
    pub gradient_start: Color,
    /// Line gradient, right end.
    pub gradient_end: Color,
    pub line_width: f32,
    pub point_color: Color,
    pub point_size: f32,
    pub indicator_color: Color,
    pub indicator_size: f32,
    pub indicator_frame_color: Color,
    pub grid_line: Color,
    pub grid_line_width: f32,
    pub tick_label: Color,
    pub tick_label_size: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            gradient_start: Color::rgb(0xff, 0x5e, 0x62),
            gradient_end: Color::rgb(0xff, 0x96, 0x66),
            line_width: 3.0,
            point_color: Color::rgb(0xff, 0x5e, 0x62),
            point_size: 8.0,
            indicator_color: Color::rgb(0xff, 0x5e, 0x62),
            indicator_size: 14.0,
            indicator_frame_color: Color::rgb(0x8e, 0x8e, 0x93),
            grid_line: Color::rgb(0x80, 0x80, 0x80).alpha(0.1),
            grid_line_width: 1.0,
            tick_label: Color::rgb(0x8e, 0x8e, 0x93),
            tick_label_size: 10.0,
        }
    }
}

impl LineStyle {
    /// Cool blue variant.
    pub fn ocean() -> Self {
        Self {
            gradient_start: Color::rgb(0x1a, 0x8c, 0xff),
            gradient_end: Color::rgb(0x00, 0xd2, 0xc8),
            point_color: Color::rgb(0x1a, 0x8c, 0xff),
            indicator_color: Color::rgb(0x1a, 0x8c, 0xff),
            ..Self::default()
        }
    }
}
