//! Selectors - Compounds chained by the descendant combinator

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::parser::{ParseError, SelectorParser};

/// A parsed selector.
///
/// Compounds are stored left to right, exactly as written. Adjacent compounds
/// are joined by the descendant combinator; there is no other combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub compounds: Vec<Compound>,
}

impl Selector {
    /// Parse selector text.
    pub fn parse(text: &str) -> Result<Selector, ParseError> {
        SelectorParser::new(text).parse()
    }

    /// The rightmost compound, which must match the target itself.
    pub fn subject(&self) -> Option<&Compound> {
        self.compounds.last()
    }

    /// Compounds that must match ancestors, rightmost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &Compound> {
        let n = self.compounds.len().saturating_sub(1);
        self.compounds[..n].iter().rev()
    }

    /// Number of compounds in the chain.
    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    /// Calculate the specificity of this selector.
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        for compound in &self.compounds {
            if compound.type_name.is_some() {
                spec.element = spec.element.saturating_add(1);
            }
            let tests = compound.classes.len().saturating_add(compound.pseudos.len());
            spec.class = spec
                .class
                .saturating_add(u32::try_from(tests).unwrap_or(u32::MAX));
            spec.compounds = spec.compounds.saturating_add(1);
        }
        spec
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", compound)?;
        }
        Ok(())
    }
}

/// A single node test: optional type name, required classes and pseudo-states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    /// Type name test; `None` matches any type
    pub type_name: Option<String>,
    /// Class names the target must carry
    pub classes: Vec<String>,
    /// Pseudo-states that must be active on the target
    pub pseudos: Vec<String>,
}

impl Compound {
    /// Create an empty compound (matches nothing until filled in).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a type-name compound.
    pub fn element(name: &str) -> Self {
        Compound {
            type_name: Some(name.to_ascii_lowercase()),
            ..Self::default()
        }
    }

    /// Add a required class.
    pub fn with_class(mut self, name: &str) -> Self {
        self.add_class(name.to_ascii_lowercase());
        self
    }

    /// Add a required pseudo-state.
    pub fn with_pseudo(mut self, name: &str) -> Self {
        self.add_pseudo(name.to_ascii_lowercase());
        self
    }

    pub(crate) fn add_class(&mut self, name: String) {
        if !self.classes.contains(&name) {
            self.classes.push(name);
        }
    }

    pub(crate) fn add_pseudo(&mut self, name: String) {
        if !self.pseudos.contains(&name) {
            self.pseudos.push(name);
        }
    }

    /// A compound with no test at all is not a valid selector part.
    pub fn is_empty(&self) -> bool {
        self.type_name.is_none() && self.classes.is_empty() && self.pseudos.is_empty()
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.type_name {
            write!(f, "{}", name)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        for pseudo in &self.pseudos {
            write!(f, ":{}", pseudo)?;
        }
        Ok(())
    }
}

/// Selector specificity.
///
/// Ordered by:
/// - `class`: number of class and pseudo-state tests
/// - `element`: number of compounds with a type-name test
/// - `compounds`: length of the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Specificity {
    pub class: u32,
    pub element: u32,
    pub compounds: u32,
}

impl Specificity {
    /// Create a new specificity.
    pub const fn new(class: u32, element: u32, compounds: u32) -> Self {
        Specificity {
            class,
            element,
            compounds,
        }
    }
}

impl PartialOrd for Specificity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Specificity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then(self.element.cmp(&other.element))
            .then(self.compounds.cmp(&other.compounds))
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.class, self.element, self.compounds)
    }
}
