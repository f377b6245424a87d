//! Psychic Style - Selector matching and style cascade for UI components
//!
//! This crate resolves, for any component in a tree, the single set of style
//! values that apply to it: rules are registered against selector text, matched
//! against the component and its ancestors, ordered by specificity and
//! registration order, merged, and completed with inherited values.
//! It's designed to work in no_std environments.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod manager;
pub mod matching;
pub mod parser;
pub mod properties;
pub mod selector;
pub mod style;
pub mod values;


pub use manager::{MatchedRule, StyleManager, StyleRef, StyleRule};
pub use matching::{matches_compound, matches_selector, Element};
pub use parser::{ParseError, SelectorParser};
pub use properties::PropertyId;
pub use selector::{Compound, Selector, Specificity};
pub use style::{Style, StyleError, DUMMY_STYLE};
pub use values::{Color, Value, ValueKind};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Color, Element, PropertyId, Selector, Specificity, Style, StyleManager, StyleRef, Value,
    };
}
