//! Style Properties - Property identifiers

use core::fmt;

use crate::values::ValueKind;

/// Style property identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum PropertyId {
    // Typography
    Color,
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    TextAlign,

    // Background & border
    BackgroundColor,
    BorderColor,
    BorderWidth,
    CornerRadius,

    // Effects
    Opacity,
    Visibility,

    // Padding
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    // Margin
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,

    // Dimensions
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
}

impl PropertyId {
    /// Every property, in declaration order.
    pub const ALL: [PropertyId; 27] = [
        PropertyId::Color,
        PropertyId::FontFamily,
        PropertyId::FontSize,
        PropertyId::FontWeight,
        PropertyId::LineHeight,
        PropertyId::LetterSpacing,
        PropertyId::TextAlign,
        PropertyId::BackgroundColor,
        PropertyId::BorderColor,
        PropertyId::BorderWidth,
        PropertyId::CornerRadius,
        PropertyId::Opacity,
        PropertyId::Visibility,
        PropertyId::PaddingTop,
        PropertyId::PaddingRight,
        PropertyId::PaddingBottom,
        PropertyId::PaddingLeft,
        PropertyId::MarginTop,
        PropertyId::MarginRight,
        PropertyId::MarginBottom,
        PropertyId::MarginLeft,
        PropertyId::Width,
        PropertyId::Height,
        PropertyId::MinWidth,
        PropertyId::MinHeight,
        PropertyId::MaxWidth,
        PropertyId::MaxHeight,
    ];

    /// Get the property name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            PropertyId::Color => "color",
            PropertyId::FontFamily => "font-family",
            PropertyId::FontSize => "font-size",
            PropertyId::FontWeight => "font-weight",
            PropertyId::LineHeight => "line-height",
            PropertyId::LetterSpacing => "letter-spacing",
            PropertyId::TextAlign => "text-align",
            PropertyId::BackgroundColor => "background-color",
            PropertyId::BorderColor => "border-color",
            PropertyId::BorderWidth => "border-width",
            PropertyId::CornerRadius => "corner-radius",
            PropertyId::Opacity => "opacity",
            PropertyId::Visibility => "visibility",
            PropertyId::PaddingTop => "padding-top",
            PropertyId::PaddingRight => "padding-right",
            PropertyId::PaddingBottom => "padding-bottom",
            PropertyId::PaddingLeft => "padding-left",
            PropertyId::MarginTop => "margin-top",
            PropertyId::MarginRight => "margin-right",
            PropertyId::MarginBottom => "margin-bottom",
            PropertyId::MarginLeft => "margin-left",
            PropertyId::Width => "width",
            PropertyId::Height => "height",
            PropertyId::MinWidth => "min-width",
            PropertyId::MinHeight => "min-height",
            PropertyId::MaxWidth => "max-width",
            PropertyId::MaxHeight => "max-height",
        }
    }

    /// Look up a property by name (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Option<PropertyId> {
        PropertyId::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// The kind of value this property accepts.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            PropertyId::Color | PropertyId::BackgroundColor | PropertyId::BorderColor => {
                ValueKind::Color
            }
            PropertyId::FontFamily => ValueKind::String,
            PropertyId::FontWeight => ValueKind::Integer,
            PropertyId::TextAlign | PropertyId::Visibility => ValueKind::Keyword,
            _ => ValueKind::Number,
        }
    }

    /// Check if this property is inherited by default.
    pub fn is_inherited(&self) -> bool {
        matches!(
            self,
            PropertyId::Color
                | PropertyId::FontFamily
                | PropertyId::FontSize
                | PropertyId::FontWeight
                | PropertyId::LineHeight
                | PropertyId::LetterSpacing
                | PropertyId::TextAlign
                | PropertyId::Visibility
        )
    }

    /// Iterate over the inherited properties.
    pub fn inherited() -> impl Iterator<Item = PropertyId> {
        PropertyId::ALL.into_iter().filter(|p| p.is_inherited())
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
