//! Tree Style - Resolve computed styles for a whole component subtree

use alloc::vec::Vec;

use psychic_style::{Style, StyleManager};

use crate::component::ComponentId;
use crate::tree::ComponentTree;

/// A component with its computed style.
#[derive(Debug, Clone)]
pub struct StyledComponent {
    pub id: ComponentId,
    /// Parent within the resolved subtree; `None` for its root.
    pub parent: Option<ComponentId>,
    /// Distance from the root of the resolved subtree.
    pub depth: usize,
    pub style: Style,
}

/// Computed styles of a subtree, in pre-order (root first, then each child
/// followed by its own descendants).
#[derive(Debug, Clone, Default)]
pub struct StyledTree {
    components: Vec<StyledComponent>,
}

impl StyledTree {
    pub fn root(&self) -> Option<&StyledComponent> {
        self.components.first()
    }

    /// Find a component anywhere in this subtree.
    pub fn get(&self, id: ComponentId) -> Option<&StyledComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Direct children of a component, in tree order.
    pub fn children(&self, id: ComponentId) -> impl Iterator<Item = &StyledComponent> {
        self.components.iter().filter(move |c| c.parent == Some(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyledComponent> {
        self.components.iter()
    }

    /// Number of components in this subtree.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Style resolver for a component tree.
///
/// Each component is computed once; its style is then handed to its
/// children as their parent style, instead of each child recomputing its
/// ancestor chain.
pub struct StyleResolver<'a> {
    tree: &'a ComponentTree,
    manager: &'a StyleManager,
}

impl<'a> StyleResolver<'a> {
    /// Create a new style resolver.
    pub fn new(tree: &'a ComponentTree, manager: &'a StyleManager) -> Self {
        StyleResolver { tree, manager }
    }

    /// Compute the style of a single component.
    pub fn compute(&self, id: ComponentId) -> Option<Style> {
        let component = self.tree.get(id)?;
        Some(self.manager.compute_style(&component))
    }

    /// Resolve styles for the subtree rooted at `root`.
    ///
    /// `root` need not be a tree root: its own ancestors are taken into
    /// account for matching and inheritance.
    pub fn resolve(&self, root: ComponentId) -> Option<StyledTree> {
        let parent_style = match self.tree.parent(root) {
            Some(parent) => self.compute(parent),
            None => None,
        };
        self.resolve_component(root, parent_style.as_ref())
    }

    /// Resolve styles for a subtree given the computed style of its root's
    /// parent.
    pub fn resolve_component(
        &self,
        id: ComponentId,
        parent_style: Option<&Style>,
    ) -> Option<StyledTree> {
        let root = self.tree.get(id)?;
        let mut resolved = StyledTree::default();
        let computed = self.manager.compute_style_with_parent(&root, parent_style);
        log::trace!("[Style] resolved {} -> {}", root.component(), computed);
        resolved.components.push(StyledComponent {
            id,
            parent: None,
            depth: 0,
            style: computed,
        });

        // (component, slot of its parent in `resolved`), popped in pre-order
        let mut pending: Vec<(ComponentId, usize)> =
            self.tree.children(id).into_iter().rev().map(|c| (c, 0)).collect();

        while let Some((child_id, parent_slot)) = pending.pop() {
            let child = match self.tree.get(child_id) {
                Some(child) => child,
                None => continue,
            };

            let parent = &resolved.components[parent_slot];
            let (parent_id, depth) = (parent.id, parent.depth + 1);
            let computed = self
                .manager
                .compute_style_with_parent(&child, Some(&parent.style));
            log::trace!("[Style] resolved {} -> {}", child.component(), computed);

            let slot = resolved.components.len();
            resolved.components.push(StyledComponent {
                id: child_id,
                parent: Some(parent_id),
                depth,
                style: computed,
            });
            pending.extend(self.tree.children(child_id).into_iter().rev().map(|c| (c, slot)));
        }

        Some(resolved)
    }
}
