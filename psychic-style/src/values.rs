//! Style Values - Typed values stored in a style

use alloc::string::String;
use core::fmt;

/// A value that can be assigned to a style property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A color value
    Color(Color),
    /// A floating point value (sizes, spacing, opacity)
    Number(f32),
    /// An integer value (font weight)
    Integer(i32),
    /// A free-form string (font family)
    String(String),
    /// A keyword from a closed set (text alignment, visibility)
    Keyword(String),
}

impl Value {
    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Color(_) => ValueKind::Color,
            Value::Number(_) => ValueKind::Number,
            Value::Integer(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Keyword(_) => ValueKind::Keyword,
        }
    }

    /// Create a keyword value. Keywords are stored lowercase.
    pub fn keyword(k: &str) -> Self {
        Value::Keyword(k.to_ascii_lowercase())
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the text of a string or keyword value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Keyword(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Color(c) => write!(f, "{}", c),
            Value::Number(n) => write!(f, "{}", n),
            Value::Integer(i) => write!(f, "{}", i),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Keyword(k) => write!(f, "{}", k),
        }
    }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self {
        Value::Color(c)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n as f32)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// The type a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Color,
    Number,
    Integer,
    String,
    Keyword,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Color => "color",
            ValueKind::Number => "number",
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::Keyword => "keyword",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Color
// ============================================================================

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGBA values.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Create a new color from RGB values (fully opaque).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Color {
            a: ((argb >> 24) & 0xFF) as u8,
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }

    /// Convert to a 32-bit ARGB value.
    pub const fn to_argb32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    // Named colors
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color::from_argb(argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.to_argb32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_argb_packing() {
        let c = Color::from_argb(0xFF00FF00);
        assert_eq!(c, Color::rgba(0, 255, 0, 255));
        assert_eq!(c.to_argb32(), 0xFF00FF00);
        assert_eq!(Color::from(0x80FF0000u32).a, 0x80);
        assert_eq!(Color::default(), Color::from_argb(0));
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::RED.to_string(), "#ffff0000");
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from(Color::RED).kind(), ValueKind::Color);
        assert_eq!(Value::from(12.0f32).kind(), ValueKind::Number);
        assert_eq!(Value::from(700).kind(), ValueKind::Integer);
        assert_eq!(Value::from("Arial").kind(), ValueKind::String);
        assert_eq!(Value::keyword("CENTER"), Value::Keyword("center".into()));
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
        assert_eq!(Value::Number(1.5).as_color(), None);
        assert_eq!(Value::keyword("left").as_str(), Some("left"));
    }
}
