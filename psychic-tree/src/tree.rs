//! Component Tree - Arena of components and their parent/child links
//!
//! Components are never freed; removing a child only detaches it, so a
//! `ComponentId` stays valid for the lifetime of the tree.

use alloc::vec::Vec;
use core::fmt;

use psychic_style::Element;

use crate::component::{Component, ComponentId, ACTIVE, FOCUS, HOVER};

/// Type name given to components created with [`ComponentTree::create_component`].
pub const COMPONENT: &str = "component";

/// Tree manipulation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// No component with this ID
    UnknownComponent(ComponentId),
    /// The child is the parent or one of its ancestors
    Cycle {
        parent: ComponentId,
        child: ComponentId,
    },
    /// The component is not a child of the given parent
    NotAChild {
        parent: ComponentId,
        child: ComponentId,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::UnknownComponent(id) => write!(f, "Unknown component {}", id),
            TreeError::Cycle { parent, child } => {
                write!(f, "Appending {} under {} would create a cycle", child, parent)
            }
            TreeError::NotAChild { parent, child } => {
                write!(f, "Component {} is not a child of {}", child, parent)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TreeError {}

/// A tree of components.
#[derive(Debug, Default)]
pub struct ComponentTree {
    components: Vec<Component>,
}

impl ComponentTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        ComponentTree {
            components: Vec::new(),
        }
    }

    /// Create a detached component with the given type name.
    pub fn create(&mut self, type_name: &str) -> ComponentId {
        let id = self.components.len();
        self.components.push(Component::new(id, type_name));
        id
    }

    /// Create a detached plain `component`.
    pub fn create_component(&mut self) -> ComponentId {
        self.create(COMPONENT)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get a handle usable for selector matching.
    pub fn get(&self, id: ComponentId) -> Option<ComponentRef<'_>> {
        self.components.get(id).map(|_| ComponentRef { tree: self, id })
    }

    fn require_mut(&mut self, id: ComponentId) -> Result<&mut Component, TreeError> {
        self.components
            .get_mut(id)
            .ok_or(TreeError::UnknownComponent(id))
    }

    /// Get the parent of a component.
    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.components.get(id).and_then(|c| c.parent)
    }

    /// Check whether `ancestor` is `id` or above it.
    pub fn is_inclusive_ancestor(&self, ancestor: ComponentId, id: ComponentId) -> bool {
        let mut current = Some(id);
        while let Some(cid) = current {
            if cid == ancestor {
                return true;
            }
            current = self.parent(cid);
        }
        false
    }

    /// Append `child` as the last child of `parent`, detaching it first if
    /// it already has a parent.
    pub fn append_child(&mut self, parent_id: ComponentId, child_id: ComponentId) -> Result<(), TreeError> {
        self.require_mut(parent_id)?;
        self.require_mut(child_id)?;

        if self.is_inclusive_ancestor(child_id, parent_id) {
            log::warn!("[Style] refusing to append {} under {}", child_id, parent_id);
            return Err(TreeError::Cycle {
                parent: parent_id,
                child: child_id,
            });
        }

        if self.parent(child_id).is_some() {
            self.detach(child_id);
        }

        let old_last_child = self.components[parent_id].last_child;

        if let Some(old_last_id) = old_last_child {
            self.components[old_last_id].next_sibling = Some(child_id);
        }

        let child = &mut self.components[child_id];
        child.parent = Some(parent_id);
        child.prev_sibling = old_last_child;

        let parent = &mut self.components[parent_id];
        if parent.first_child.is_none() {
            parent.first_child = Some(child_id);
        }
        parent.last_child = Some(child_id);

        Ok(())
    }

    /// Detach `child` from `parent`.
    pub fn remove_child(&mut self, parent_id: ComponentId, child_id: ComponentId) -> Result<(), TreeError> {
        self.require_mut(parent_id)?;
        if self.require_mut(child_id)?.parent != Some(parent_id) {
            return Err(TreeError::NotAChild {
                parent: parent_id,
                child: child_id,
            });
        }
        self.detach(child_id);
        Ok(())
    }

    fn detach(&mut self, child_id: ComponentId) {
        let (parent_id, prev_id, next_id) = {
            let child = &self.components[child_id];
            (child.parent, child.prev_sibling, child.next_sibling)
        };

        if let Some(prev_id) = prev_id {
            self.components[prev_id].next_sibling = next_id;
        } else if let Some(parent_id) = parent_id {
            self.components[parent_id].first_child = next_id;
        }

        if let Some(next_id) = next_id {
            self.components[next_id].prev_sibling = prev_id;
        } else if let Some(parent_id) = parent_id {
            self.components[parent_id].last_child = prev_id;
        }

        let child = &mut self.components[child_id];
        child.parent = None;
        child.prev_sibling = None;
        child.next_sibling = None;
    }

    /// Get children of a component, in order.
    pub fn children(&self, parent_id: ComponentId) -> Vec<ComponentId> {
        let mut children = Vec::new();
        let mut child_id = self.components.get(parent_id).and_then(|p| p.first_child);

        while let Some(id) = child_id {
            children.push(id);
            child_id = self.components.get(id).and_then(|c| c.next_sibling);
        }

        children
    }

    // ========================================================================
    // Classes and pseudo-states
    // ========================================================================

    /// Replace the class list of a component.
    pub fn set_class_names<S: AsRef<str>>(&mut self, id: ComponentId, names: &[S]) -> Result<(), TreeError> {
        self.require_mut(id)?.set_class_names(names);
        Ok(())
    }

    pub fn add_class(&mut self, id: ComponentId, name: &str) -> Result<bool, TreeError> {
        Ok(self.require_mut(id)?.add_class(name))
    }

    pub fn remove_class(&mut self, id: ComponentId, name: &str) -> Result<bool, TreeError> {
        Ok(self.require_mut(id)?.remove_class(name))
    }

    pub fn has_class(&self, id: ComponentId, name: &str) -> bool {
        self.components.get(id).map_or(false, |c| c.has_class(name))
    }

    /// Turn a named pseudo-state on or off.
    pub fn set_pseudo(&mut self, id: ComponentId, name: &str, active: bool) -> Result<(), TreeError> {
        self.require_mut(id)?.set_pseudo(name, active);
        Ok(())
    }

    /// Toggle `:hover`.
    pub fn set_mouse_over(&mut self, id: ComponentId, over: bool) -> Result<(), TreeError> {
        self.set_pseudo(id, HOVER, over)
    }

    /// Toggle `:active`.
    pub fn set_mouse_down(&mut self, id: ComponentId, down: bool) -> Result<(), TreeError> {
        self.set_pseudo(id, ACTIVE, down)
    }

    /// Toggle `:focus`.
    pub fn set_focused(&mut self, id: ComponentId, focused: bool) -> Result<(), TreeError> {
        self.set_pseudo(id, FOCUS, focused)
    }
}

/// A component viewed through its tree, so that it can walk to its parent.
#[derive(Debug, Clone, Copy)]
pub struct ComponentRef<'a> {
    tree: &'a ComponentTree,
    id: ComponentId,
}

impl<'a> ComponentRef<'a> {
    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn tree(&self) -> &'a ComponentTree {
        self.tree
    }

    /// The underlying component.
    pub fn component(&self) -> &'a Component {
        // Only built for IDs that exist, and components are never freed.
        &self.tree.components[self.id]
    }
}

impl Element for ComponentRef<'_> {
    fn type_name(&self) -> &str {
        self.component().type_name()
    }

    fn has_class(&self, name: &str) -> bool {
        self.component().has_class(name)
    }

    fn is_pseudo_active(&self, name: &str) -> bool {
        self.component().has_pseudo(name)
    }

    fn parent(&self) -> Option<Self> {
        self.component().parent.map(|id| ComponentRef {
            tree: self.tree,
            id,
        })
    }
}
