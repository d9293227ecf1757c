//! Voxel data type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// RGBA color, one byte per channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "[u8; 4]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Create color from RGBA channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels as `[r, g, b, a]`
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels normalized to 0.0-1.0, the form vertex color buffers take
    pub fn to_f32(self) -> [f32; 4] {
        self.to_array().map(|c| c as f32 / 255.0)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `#rrggbb` or `#rrggbbaa`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// Persisted color forms accepted on load
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Channels(Vec<u8>),
    Hex(String),
}

impl TryFrom<ColorRepr> for Color {
    type Error = Error;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Channels(c) => match c[..] {
                [r, g, b] => Ok(Color::rgb(r, g, b)),
                [r, g, b, a] => Ok(Color::new(r, g, b, a)),
                _ => Err(Error::InvalidColor(format!("{:?}", c))),
            },
            ColorRepr::Hex(s) => s.parse(),
        }
    }
}

/// Single voxel as held by a layer store
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voxel {
    pub color: Color,
}

impl Voxel {
    /// Create voxel with the given color
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl From<Color> for Voxel {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// Voxel in the composite view, tagged with the active layer that supplied it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayeredVoxel {
    pub voxel: Voxel,
    /// Index into the session's active layers
    pub layer_index: usize,
}
