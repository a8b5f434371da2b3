//! Palette color values.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

/// A tile color, stored as canonical lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse `#RGB` or `#RRGGBB` (any case) into a normalized color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if the value is not a hex color.
    pub fn parse(raw: &str) -> Result<Self, ColorError> {
        let (r, g, b) = parse_hex_rgb(raw)?;
        Ok(Self::from_rgb(r, g, b))
    }

    /// Build a color from RGB channels.
    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.0
    }
}

fn parse_hex_rgb(raw: &str) -> Result<(u8, u8, u8), ColorError> {
    let trimmed = raw.trim();
    let Some(hex) = trimmed.strip_prefix('#') else {
        return Err(ColorError::MissingHash(raw.to_owned()));
    };
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::BadDigit(raw.to_owned()));
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| ColorError::BadDigit(raw.to_owned()));
    match hex.len() {
        3 => Ok((channel(&hex[0..1].repeat(2))?, channel(&hex[1..2].repeat(2))?, channel(&hex[2..3].repeat(2))?)),
        6 => Ok((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => Err(ColorError::BadLength(raw.to_owned())),
    }
}
