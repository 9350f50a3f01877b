//! Color values and parsing.
//!
//! Two syntaxes are accepted, the ones globe configurations are written in:
//! `#RRGGBB` / `#RRGGBBAA` hex and CSS-style `rgba(r,g,b,a)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error from parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The string is neither hex nor `rgba(...)` syntax.
    #[error("unrecognized color syntax '{0}'")]
    Syntax(String),
    /// A hex literal had the wrong length or bad digits.
    #[error("bad hex color '{0}'")]
    Hex(String),
    /// An `rgba(...)` component was missing or out of form.
    #[error("bad rgba() component in '{0}'")]
    Component(String),
}

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red, 0..=255 (sRGB).
    pub r: u8,
    /// Green, 0..=255 (sRGB).
    pub g: u8,
    /// Blue, 0..=255 (sRGB).
    pub b: u8,
    /// Straight alpha in [0, 1].
    pub a: f32,
}

impl Color {
    /// Opaque color from sRGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from sRGB components and straight alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linear-light RGBA, the form shaders consume.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        [
            srgb_to_linear(f32::from(self.r) / 255.0),
            srgb_to_linear(f32::from(self.g) / 255.0),
            srgb_to_linear(f32::from(self.b) / 255.0),
            self.a,
        ]
    }

    /// sRGB components as unit floats (no transfer function applied).
    pub fn to_srgb_f32(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            self.a,
        ]
    }
}

/// sRGB transfer function, one channel.
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
    let digits = &s[1..];
    let bad = || ColorParseError::Hex(s.to_string());
    if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
        return Err(bad());
    }
    let byte_at = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad());
    let r = byte_at(0)?;
    let g = byte_at(2)?;
    let b = byte_at(4)?;
    let a = if digits.len() == 8 { f32::from(byte_at(6)?) / 255.0 } else { 1.0 };
    Ok(Color { r, g, b, a })
}

fn parse_rgba(s: &str) -> Result<Color, ColorParseError> {
    let bad = || ColorParseError::Component(s.to_string());
    let open = s.find('(').ok_or_else(bad)?;
    let close = s.rfind(')').ok_or_else(bad)?;
    if close <= open {
        return Err(bad());
    }
    let parts: Vec<&str> = s[open + 1..close].split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(bad());
    }
    let chan = |t: &str| t.parse::<u8>().map_err(|_| bad());
    let r = chan(parts[0])?;
    let g = chan(parts[1])?;
    let b = chan(parts[2])?;
    let a = if parts.len() == 4 {
        let v: f32 = parts[3].parse().map_err(|_| bad())?;
        if !(0.0..=1.0).contains(&v) {
            return Err(bad());
        }
        v
    } else {
        1.0
    };
    Ok(Color { r, g, b, a })
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.starts_with('#') {
            parse_hex(t)
        } else if t.starts_with("rgba(") || t.starts_with("rgb(") {
            parse_rgba(t)
        } else {
            Err(ColorParseError::Syntax(s.to_string()))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.a - 1.0).abs() < f32::EPSILON {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let a = (self.a * 255.0).round().clamp(0.0, 255.0) as u8;
            write!(f, "#{:02x}{:02x}{:02x}{a:02x}", self.r, self.g, self.b)
        }
    }
}
