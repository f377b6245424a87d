//! Selector Matching - Test a selector against a component in its tree
//!
//! Selectors are matched right to left. The rightmost compound must match the
//! target itself; each compound further left must match some strict ancestor
//! above the one matched before it. The search frontier only ever moves up,
//! so a selector costs at most one walk of the ancestor chain.

use alloc::vec::Vec;

use crate::selector::{Compound, Selector};

/// What the matcher needs to know about a component.
///
/// Implementors are cheap handles (a reference, or a tree plus an id) so that
/// `parent` can hand back another handle by value. Names passed to
/// `has_class` and `is_pseudo_active` are lowercase.
pub trait Element: Sized {
    /// The fixed type name of the component, lowercase.
    fn type_name(&self) -> &str;

    /// Check whether the component carries a class name.
    fn has_class(&self, name: &str) -> bool;

    /// Check whether a pseudo-state (e.g. `hover`) is currently active.
    fn is_pseudo_active(&self, name: &str) -> bool;

    /// The parent component, if any.
    fn parent(&self) -> Option<Self>;
}

/// Test a single compound against one component.
pub fn matches_compound<E: Element>(compound: &Compound, element: &E) -> bool {
    if let Some(name) = &compound.type_name {
        if !element.type_name().eq_ignore_ascii_case(name) {
            return false;
        }
    }

    compound.classes.iter().all(|c| element.has_class(c))
        && compound.pseudos.iter().all(|p| element.is_pseudo_active(p))
}

/// Test whether `element` matches a full selector.
pub fn matches_selector<E: Element>(selector: &Selector, element: &E) -> bool {
    match_ancestors(selector, element).is_some()
}

/// Match `selector` against `element`, returning the ancestors that satisfied
/// the non-rightmost compounds (rightmost compound's ancestor first).
pub(crate) fn match_ancestors<E: Element>(selector: &Selector, element: &E) -> Option<Vec<E>> {
    let subject = selector.subject()?;
    if !matches_compound(subject, element) {
        return None;
    }

    let mut matched = Vec::with_capacity(selector.len() - 1);
    let mut frontier = element.parent();

    for compound in selector.ancestors() {
        loop {
            let ancestor = frontier?;
            frontier = ancestor.parent();
            if matches_compound(compound, &ancestor) {
                matched.push(ancestor);
                break;
            }
        }
    }

    Some(matched)
}
