//! Component - A node of the component tree

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Component ID - unique identifier within a tree.
pub type ComponentId = usize;

/// Pseudo-state set while the pointer is over a component.
pub const HOVER: &str = "hover";
/// Pseudo-state set while the pointer is pressed on a component.
pub const ACTIVE: &str = "active";
/// Pseudo-state set while a component has keyboard focus.
pub const FOCUS: &str = "focus";

/// A component in the tree.
#[derive(Debug, Clone)]
pub struct Component {
    /// Unique ID of this component.
    pub id: ComponentId,
    /// Fixed type name, lowercase.
    pub(crate) type_name: String,
    /// Class names, lowercase and deduplicated.
    pub(crate) classes: Vec<String>,
    /// Active pseudo-states, lowercase and deduplicated.
    pub(crate) pseudos: Vec<String>,
    /// Parent component ID.
    pub parent: Option<ComponentId>,
    /// First child component ID.
    pub first_child: Option<ComponentId>,
    /// Last child component ID.
    pub last_child: Option<ComponentId>,
    /// Previous sibling component ID.
    pub prev_sibling: Option<ComponentId>,
    /// Next sibling component ID.
    pub next_sibling: Option<ComponentId>,
}

impl Component {
    /// Create a detached component.
    pub fn new(id: ComponentId, type_name: &str) -> Self {
        Component {
            id,
            type_name: type_name.to_ascii_lowercase(),
            classes: Vec::new(),
            pseudos: Vec::new(),
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn pseudos(&self) -> &[String] {
        &self.pseudos
    }

    /// Check for a class name, ignoring case.
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c.eq_ignore_ascii_case(name))
    }

    /// Check whether a pseudo-state is active, ignoring case.
    pub fn has_pseudo(&self, name: &str) -> bool {
        self.pseudos.iter().any(|p| p.eq_ignore_ascii_case(name))
    }

    /// Replace the class list.
    pub fn set_class_names<S: AsRef<str>>(&mut self, names: &[S]) {
        self.classes.clear();
        for name in names {
            self.add_class(name.as_ref());
        }
    }

    /// Add a class name. Returns false if it was already present.
    pub fn add_class(&mut self, name: &str) -> bool {
        insert_name(&mut self.classes, name)
    }

    /// Remove a class name. Returns false if it was not present.
    pub fn remove_class(&mut self, name: &str) -> bool {
        remove_name(&mut self.classes, name)
    }

    /// Turn a pseudo-state on or off.
    pub fn set_pseudo(&mut self, name: &str, active: bool) {
        if active {
            insert_name(&mut self.pseudos, name);
        } else {
            remove_name(&mut self.pseudos, name);
        }
    }

    pub fn is_mouse_over(&self) -> bool {
        self.has_pseudo(HOVER)
    }

    pub fn is_mouse_down(&self) -> bool {
        self.has_pseudo(ACTIVE)
    }

    pub fn is_focused(&self) -> bool {
        self.has_pseudo(FOCUS)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name)?;
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        for pseudo in &self.pseudos {
            write!(f, ":{}", pseudo)?;
        }
        Ok(())
    }
}

fn insert_name(names: &mut Vec<String>, name: &str) -> bool {
    let name = name.trim().to_ascii_lowercase();
    if name.is_empty() || names.contains(&name) {
        return false;
    }
    names.push(name);
    true
}

fn remove_name(names: &mut Vec<String>, name: &str) -> bool {
    let name = name.trim().to_ascii_lowercase();
    let before = names.len();
    names.retain(|n| *n != name);
    names.len() != before
}
