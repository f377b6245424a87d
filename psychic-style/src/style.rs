//! Style - Sparse table of explicitly set property values
//!
//! A [`Style`] only holds the properties that were explicitly set. Reading an
//! unset property yields `None`; there are no implicit defaults at this level.

use alloc::collections::BTreeMap;
use core::fmt;

use crate::properties::PropertyId;
use crate::values::{Color, Value, ValueKind};

/// Shared sentinel returned by the style manager for selector text that cannot
/// be registered. It is never mutated and is told apart by address, not value.
pub static DUMMY_STYLE: Style = Style::new();

/// Error raised when a value does not fit a property.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    /// The value kind does not match the kind the property accepts
    TypeMismatch {
        property: PropertyId,
        expected: ValueKind,
        found: ValueKind,
    },
    /// The target is the dummy style
    DummyStyle,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::TypeMismatch {
                property,
                expected,
                found,
            } => write!(f, "Property {} expects a {} value, got {}", property, expected, found),
            StyleError::DummyStyle => write!(f, "Cannot modify the dummy style"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StyleError {}

/// A set of explicitly declared property values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    values: BTreeMap<PropertyId, Value>,
}

impl Style {
    /// Create an empty style.
    pub const fn new() -> Self {
        Style {
            values: BTreeMap::new(),
        }
    }

    /// Check whether this is the shared dummy style.
    pub fn is_dummy(&self) -> bool {
        core::ptr::eq(self, &DUMMY_STYLE)
    }

    /// Get the value of a property, if set.
    pub fn get(&self, property: PropertyId) -> Option<&Value> {
        self.values.get(&property)
    }

    pub fn color(&self, property: PropertyId) -> Option<Color> {
        self.get(property).and_then(Value::as_color)
    }

    pub fn number(&self, property: PropertyId) -> Option<f32> {
        self.get(property).and_then(Value::as_number)
    }

    pub fn integer(&self, property: PropertyId) -> Option<i32> {
        self.get(property).and_then(Value::as_integer)
    }

    /// Get a string or keyword property.
    pub fn string(&self, property: PropertyId) -> Option<&str> {
        self.get(property).and_then(Value::as_str)
    }

    /// Set a property, checking that the value kind fits.
    pub fn try_set(&mut self, property: PropertyId, value: impl Into<Value>) -> Result<(), StyleError> {
        let value = value.into();
        let expected = property.value_kind();
        let found = value.kind();
        if expected != found {
            return Err(StyleError::TypeMismatch {
                property,
                expected,
                found,
            });
        }
        self.values.insert(property, value);
        Ok(())
    }

    /// Set a property. A value of the wrong kind is logged and dropped.
    pub fn set(&mut self, property: PropertyId, value: impl Into<Value>) -> &mut Self {
        if let Err(e) = self.try_set(property, value) {
            log::warn!("[Style] {}", e);
        }
        self
    }

    /// Unset a property, returning its previous value.
    pub fn remove(&mut self, property: PropertyId) -> Option<Value> {
        self.values.remove(&property)
    }

    /// Check if a property is set.
    pub fn contains(&self, property: PropertyId) -> bool {
        self.values.contains_key(&property)
    }

    /// Number of explicitly set properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over set properties in property order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &Value)> {
        self.values.iter().map(|(p, v)| (*p, v))
    }

    /// Copy `other`'s set properties onto this style; `other` wins.
    pub fn overlay(&mut self, other: &Style) {
        for (property, value) in other.iter() {
            self.values.insert(property, value.clone());
        }
    }

    /// Return a new style with `other` layered over a copy of this one.
    #[must_use]
    pub fn merge(&self, other: &Style) -> Style {
        let mut merged = self.clone();
        merged.overlay(other);
        merged
    }

    /// Copy inherited properties from `parent` that are unset here.
    pub fn inherit_from(&mut self, parent: &Style) {
        for property in PropertyId::inherited() {
            if self.contains(property) {
                continue;
            }
            if let Some(value) = parent.get(property) {
                self.values.insert(property, value.clone());
            }
        }
    }

    /// Check whether any inherited property is still unset.
    pub fn missing_inherited(&self) -> bool {
        PropertyId::inherited().any(|p| !self.contains(p))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (property, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, " {}: {}", property, value)?;
        }
        write!(f, " }}")
    }
}
