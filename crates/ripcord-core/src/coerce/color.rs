//! Color coercion.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::byte::byte;
use crate::error::ColorError;

/// The Discord embed palette, keyed by the names the API documents.
///
/// `DEFAULT` is listed for completeness but is claimed by the literal
/// branch of [`ColorResolvable`] before the table is consulted.
const DISCORD_PALETTE: &[(&str, u32)] = &[
    ("DEFAULT", 0x00_0000),
    ("WHITE", 0xFF_FFFF),
    ("AQUA", 0x1A_BC9C),
    ("GREEN", 0x57_F287),
    ("BLUE", 0x34_98DB),
    ("YELLOW", 0xFE_E75C),
    ("PURPLE", 0x9B_59B6),
    ("LUMINOUS_VIVID_PINK", 0xE9_1E63),
    ("FUCHSIA", 0xEB_459E),
    ("GOLD", 0xF1_C40F),
    ("ORANGE", 0xE6_7E22),
    ("RED", 0xED_4245),
    ("GREY", 0x95_A5A6),
    ("NAVY", 0x34_495E),
    ("DARK_AQUA", 0x11_806A),
    ("DARK_GREEN", 0x1F_8B4C),
    ("DARK_BLUE", 0x20_6694),
    ("DARK_PURPLE", 0x71_368A),
    ("DARK_VIVID_PINK", 0xAD_1457),
    ("DARK_GOLD", 0xC2_7C0E),
    ("DARK_ORANGE", 0xA8_4300),
    ("DARK_RED", 0x99_2D22),
    ("DARK_GREY", 0x97_9C9F),
    ("DARKER_GREY", 0x7F_8C8D),
    ("LIGHT_GREY", 0xBC_C0C0),
    ("DARK_NAVY", 0x2C_3E50),
    ("BLURPLE", 0x58_65F2),
    ("GREYPLE", 0x99_AAB5),
    ("DARK_BUT_NOT_BLACK", 0x2C_2F33),
    ("NOT_QUITE_BLACK", 0x23_272A),
];

static BUILTIN_TABLE: Lazy<ColorTable> = Lazy::new(ColorTable::default);

/// A 24-bit RGB color.
///
/// Produced by [`ColorResolvable::resolve`]; never holds a value above
/// [`Color::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    /// Largest representable color, `0xFFFFFF`.
    pub const MAX: u32 = 0xFF_FFFF;

    /// The platform default color (black).
    pub const DEFAULT: Self = Self(0);

    /// Validate a packed integer as a color.
    pub fn new(value: u32) -> Result<Self, ColorError> {
        if value > Self::MAX {
            return Err(ColorError::OutOfRange {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Pack three channel bytes into a color.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    /// The packed integer value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl TryFrom<u32> for Color {
    type Error = ColorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Named-color lookup table.
///
/// The table consulted by the string branch of color resolution is
/// configuration, not a constant: [`ColorTable::default`] is the Discord
/// palette, and callers with their own naming scheme can start from
/// [`ColorTable::empty`] and resolve with
/// [`ColorResolvable::resolve_with`].
#[derive(Debug, Clone)]
pub struct ColorTable(HashMap<String, Color>);

impl ColorTable {
    /// A table with no entries.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Add or replace a named color.
    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.0.insert(name.into(), color);
    }

    /// Look up a name.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.0.get(name).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for &(name, value) in DISCORD_PALETTE {
            table.insert(name, Color(value));
        }
        table
    }
}

/// A value accepted in any of the alternative color input forms.
///
/// Alternatives are evaluated strictly in declaration order and the order
/// is part of the contract: a numeric-looking string such as `"123"` is
/// claimed by the string branch (and read as hexadecimal), never by the
/// integer branch.
///
/// # Examples
///
/// ```
/// use ripcord_core::coerce::ColorResolvable;
///
/// assert_eq!(ColorResolvable::from("DEFAULT").resolve().unwrap().value(), 0);
/// assert_eq!(ColorResolvable::from("#00ff00").resolve().unwrap().value(), 0x00FF00);
/// assert_eq!(ColorResolvable::from((255, 0, 0)).resolve().unwrap().value(), 0xFF0000);
/// assert_eq!(ColorResolvable::from(123_456_i64).resolve().unwrap().value(), 123_456);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorResolvable {
    /// `"RANDOM"`, `"DEFAULT"`, a named color, or a hexadecimal string
    /// with an optional leading `#`.
    Name(String),
    /// An `[r, g, b]` triple of byte values.
    Rgb(i64, i64, i64),
    /// A color already packed as an integer.
    Int(i64),
}

impl ColorResolvable {
    /// Match a loosely-typed value against the accepted color shapes.
    pub fn from_value(value: &Value) -> Result<Self, ColorError> {
        match value {
            Value::String(s) => Ok(Self::Name(s.clone())),
            Value::Array(items) if items.len() == 3 => {
                let mut channels = [0_i64; 3];
                for (channel, item) in channels.iter_mut().zip(items) {
                    *channel = item.as_i64().ok_or(ColorError::UnmatchedShape)?;
                }
                Ok(Self::Rgb(channels[0], channels[1], channels[2]))
            }
            Value::Number(n) => n.as_i64().map(Self::Int).ok_or(ColorError::UnmatchedShape),
            _ => Err(ColorError::UnmatchedShape),
        }
    }

    /// Resolve against the builtin Discord palette.
    pub fn resolve(self) -> Result<Color, ColorError> {
        self.resolve_with(&BUILTIN_TABLE)
    }

    /// Resolve against a caller-supplied named-color table.
    pub fn resolve_with(self, table: &ColorTable) -> Result<Color, ColorError> {
        match self {
            Self::Name(name) if name == "RANDOM" => {
                Ok(Color(rand::rng().random_range(0..=Color::MAX)))
            }
            Self::Name(name) if name == "DEFAULT" => Ok(Color::DEFAULT),
            Self::Name(name) => {
                if name.is_empty() {
                    return Err(ColorError::UnmatchedShape);
                }
                if let Some(color) = table.get(&name) {
                    return Ok(color);
                }
                let hex = name.strip_prefix('#').unwrap_or(&name);
                let value = u32::from_str_radix(hex, 16)
                    .map_err(|_| ColorError::UnknownName { input: name.clone() })?;
                Color::new(value)
            }
            Self::Rgb(r, g, b) => {
                let (r, g, b) = (byte(r)?, byte(g)?, byte(b)?);
                Ok(Color::from_rgb(r, g, b))
            }
            Self::Int(value) => match u32::try_from(value) {
                Ok(packed) if packed <= Color::MAX => Ok(Color(packed)),
                _ => Err(ColorError::OutOfRange { value }),
            },
        }
    }
}

impl From<&str> for ColorResolvable {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for ColorResolvable {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<(u8, u8, u8)> for ColorResolvable {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(i64::from(r), i64::from(g), i64::from(b))
    }
}

impl From<i64> for ColorResolvable {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ColorResolvable {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Color> for ColorResolvable {
    fn from(color: Color) -> Self {
        Self::Int(i64::from(color.value()))
    }
}
