//! Style Manager - Selector registry and cascade resolution
//!
//! The manager owns one [`Style`] per distinct selector. Selector text is
//! parsed and looked up by its canonical form (names lowercased, compounds
//! separated by a single space), so `Button`, `button` and ` button ` name
//! the same rule.
//! Rules are kept in the order they were first registered; that order breaks
//! ties between rules of equal specificity, the later rule winning.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Deref;

use hashbrown::HashMap;

use crate::matching::{match_ancestors, Element};
use crate::properties::PropertyId;
use crate::selector::{Selector, Specificity};
use crate::style::{Style, StyleError, DUMMY_STYLE};
use crate::values::Value;

/// A registered rule: selector plus the style it declares.
#[derive(Debug, Clone)]
pub struct StyleRule {
    text: String,
    selector: Selector,
    specificity: Specificity,
    style: Style,
}

impl StyleRule {
    /// Canonical selector text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub fn style(&self) -> &Style {
        &self.style
    }
}

/// A rule that applies to a component, as reported by
/// [`StyleManager::matching_rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRule<'a> {
    /// Canonical selector text
    pub selector: &'a str,
    pub specificity: Specificity,
    /// Registration order of the rule
    pub order: usize,
}

/// Handle returned by [`StyleManager::style`].
///
/// Either the registered style for a selector, or the shared dummy style when
/// the selector text was rejected. Writes through the dummy are dropped.
#[derive(Debug)]
pub enum StyleRef<'a> {
    Rule(&'a mut Style),
    Dummy,
}

impl<'a> StyleRef<'a> {
    pub fn is_dummy(&self) -> bool {
        matches!(self, StyleRef::Dummy)
    }

    /// Set a property on the rule's style.
    pub fn set(&mut self, property: PropertyId, value: impl Into<Value>) -> &mut Self {
        match self {
            StyleRef::Rule(style) => {
                style.set(property, value);
            }
            StyleRef::Dummy => {
                log::warn!("[Style] Ignoring {} on the dummy style", property);
            }
        }
        self
    }

    pub fn try_set(&mut self, property: PropertyId, value: impl Into<Value>) -> Result<(), StyleError> {
        match self {
            StyleRef::Rule(style) => style.try_set(property, value),
            StyleRef::Dummy => Err(StyleError::DummyStyle),
        }
    }

    /// Mutable access to the registered style; `None` for the dummy.
    pub fn as_mut(&mut self) -> Option<&mut Style> {
        match self {
            StyleRef::Rule(style) => Some(style),
            StyleRef::Dummy => None,
        }
    }
}

impl Deref for StyleRef<'_> {
    type Target = Style;

    fn deref(&self) -> &Style {
        match self {
            StyleRef::Rule(style) => style,
            StyleRef::Dummy => &DUMMY_STYLE,
        }
    }
}

/// Registry of selector rules and resolver of computed styles.
#[derive(Debug, Clone, Default)]
pub struct StyleManager {
    /// Rules in registration order
    rules: Vec<StyleRule>,
    /// Canonical selector text -> index into `rules`
    index: HashMap<String, usize>,
}

impl StyleManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the style for a selector, registering the selector on first use.
    ///
    /// Empty or unparseable text yields [`StyleRef::Dummy`] and registers
    /// nothing.
    pub fn style(&mut self, text: &str) -> StyleRef<'_> {
        let selector = match Selector::parse(text) {
            Ok(selector) => selector,
            Err(e) => {
                log::warn!("[Style] Rejected selector {:?}: {}", text, e);
                return StyleRef::Dummy;
            }
        };

        let key = selector.to_string();
        if let Some(&slot) = self.index.get(key.as_str()) {
            return StyleRef::Rule(&mut self.rules[slot].style);
        }

        let slot = self.rules.len();
        let specificity = selector.specificity();
        log::debug!("[Style] Registered {:?} as rule {} {}", key, slot, specificity);
        self.rules.push(StyleRule {
            text: key.clone(),
            selector,
            specificity,
            style: Style::new(),
        });
        self.index.insert(key, slot);
        StyleRef::Rule(&mut self.rules[slot].style)
    }

    /// Look up a registered style without registering anything.
    pub fn get(&self, text: &str) -> Option<&Style> {
        let key = Selector::parse(text).ok()?.to_string();
        self.index.get(key.as_str()).map(|&slot| &self.rules[slot].style)
    }

    /// Check if a selector is registered.
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    /// Rules matching `element`, lowest priority first.
    pub fn matching_rules<E: Element>(&self, element: &E) -> Vec<MatchedRule<'_>> {
        let mut matched: Vec<MatchedRule<'_>> = Vec::new();

        for (order, rule) in self.rules.iter().enumerate() {
            if let Some(ancestors) = match_ancestors(&rule.selector, element) {
                log::trace!(
                    "[Style] {:?} matches {} ({} ancestors)",
                    rule.text,
                    element.type_name(),
                    ancestors.len()
                );
                matched.push(MatchedRule {
                    selector: &rule.text,
                    specificity: rule.specificity,
                    order,
                });
            }
        }

        matched.sort_unstable_by_key(|m| (m.specificity, m.order));
        matched
    }

    /// Compute the style of `element`.
    ///
    /// Matching rules are merged lowest priority first. Inherited properties
    /// left unset are then taken from the nearest ancestor whose own rules set
    /// them. The walk up stops as soon as nothing inheritable is missing.
    pub fn compute_style<E: Element>(&self, element: &E) -> Style {
        let mut style = self.cascade(element);
        let mut ancestor = element.parent();

        while let Some(current) = ancestor {
            if !style.missing_inherited() {
                break;
            }
            style.inherit_from(&self.cascade(&current));
            ancestor = current.parent();
        }

        style
    }

    /// Compute the style of `element` given its parent's computed style.
    pub fn compute_style_with_parent<E: Element>(&self, element: &E, parent: Option<&Style>) -> Style {
        let mut style = self.cascade(element);
        if let Some(parent) = parent {
            style.inherit_from(parent);
        }
        style
    }

    /// Merge every rule matching `element` into a new style.
    fn cascade<E: Element>(&self, element: &E) -> Style {
        let mut style = Style::new();
        for rule in self.matching_rules(element) {
            style.overlay(&self.rules[rule.order].style);
        }
        style
    }
}
