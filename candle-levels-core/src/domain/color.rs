//! Chart colors and the five-slot level palette.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RGB color.
///
/// Config files write colors as a known name (`"Red"`, case-insensitive) or
/// as `#RRGGBB` hex; serde goes through the same string forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized color '{0}' (expected a named color or #RRGGBB)")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() == 6 {
                if let Ok(value) = u32::from_str_radix(hex, 16) {
                    return Ok(Self::rgb(
                        (value >> 16) as u8,
                        (value >> 8) as u8,
                        value as u8,
                    ));
                }
            }
            return Err(ParseColorError(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Self::RED),
            "green" => Ok(Self::GREEN),
            "yellow" => Ok(Self::YELLOW),
            "blue" => Ok(Self::BLUE),
            "magenta" => Ok(Self::MAGENTA),
            "cyan" => Ok(Self::CYAN),
            "orange" => Ok(Self::ORANGE),
            "white" => Ok(Self::WHITE),
            "black" => Ok(Self::BLACK),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::RED => "Red",
            Self::GREEN => "Green",
            Self::YELLOW => "Yellow",
            Self::BLUE => "Blue",
            Self::MAGENTA => "Magenta",
            Self::CYAN => "Cyan",
            Self::ORANGE => "Orange",
            Self::WHITE => "White",
            Self::BLACK => "Black",
            _ => return f.pad(&format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)),
        };
        f.pad(name)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Fixed five-slot palette, indexed cyclically against the level list:
/// a sixth level reuses slot 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette([Color; 5]);

impl ColorPalette {
    pub const SLOTS: usize = 5;

    pub fn new(colors: [Color; 5]) -> Self {
        Self(colors)
    }

    /// Color for the level at position `index` in the ascending level list.
    pub fn color_for(&self, index: usize) -> Color {
        self.0[index % Self::SLOTS]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self([
            Color::RED,
            Color::GREEN,
            Color::YELLOW,
            Color::BLUE,
            Color::MAGENTA,
        ])
    }
}
