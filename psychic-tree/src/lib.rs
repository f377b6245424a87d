//! Psychic Tree - Component tree for PsychicUI
//!
//! This crate provides the component arena that selectors are matched
//! against, and resolves computed styles for whole subtrees.
//! It's designed to work in no_std environments.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod component;
pub mod style;
pub mod tree;

pub use component::{Component, ComponentId, ACTIVE, FOCUS, HOVER};
pub use style::{StyleResolver, StyledComponent, StyledTree};
pub use tree::{ComponentRef, ComponentTree, TreeError, COMPONENT};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Component, ComponentId, ComponentRef, ComponentTree};
    pub use crate::{StyleResolver, StyledComponent, StyledTree};
}

#[cfg(test)]
mod tests {
    use super::*;
    use psychic_style::{Color, PropertyId, StyleManager};

    /// Register `text` alone and report whether `target` computes exactly
    /// that rule's style. The font family is inherited, so a rule matching
    /// an ancestor reaches the target too.
    fn retrieves(tree: &ComponentTree, target: ComponentId, text: &str) -> bool {
        let mut manager = StyleManager::new();
        manager.style(text).set(PropertyId::FontFamily, text);
        let registered = manager.get(text).cloned().unwrap();
        manager.compute_style(&tree.get(target).unwrap()) == registered
    }

    fn check(tree: &ComponentTree, target: ComponentId, cases: &[(&str, bool)]) {
        for &(text, expected) in cases {
            assert_eq!(retrieves(tree, target, text), expected, "selector {:?}", text);
        }
    }

    fn pair() -> (ComponentTree, ComponentId, ComponentId) {
        let mut tree = ComponentTree::new();
        let parent = tree.create_component();
        let child = tree.create_component();
        tree.append_child(parent, child).unwrap();
        (tree, parent, child)
    }

    /// Test 1: Registry lookups
    #[test]
    fn test_registry_lookups() {
        let mut manager = StyleManager::new();
        assert!(manager.style("").is_dummy());

        let a: *const psychic_style::Style = &*manager.style("component");
        let b: *const psychic_style::Style = &*manager.style("Component");
        let c: *const psychic_style::Style = &*manager.style("cOmPoNeNt");
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    /// Test 2: Single component without classes
    #[test]
    fn test_single_component_without_classes() {
        let mut tree = ComponentTree::new();
        let component = tree.create_component();
        check(
            &tree,
            component,
            &[
                ("component", true),
                ("component.class", false),
                ("component .class", false),
                (".class", false),
            ],
        );
    }

    /// Test 3: Single component with one class
    #[test]
    fn test_single_component_with_class() {
        let mut tree = ComponentTree::new();
        let component = tree.create_component();
        tree.set_class_names(component, &["class"]).unwrap();
        check(
            &tree,
            component,
            &[
                ("component", true),
                ("component.class", true),
                ("component .class", false),
                (".class", true),
                (".other", false),
                (".class.other", false),
            ],
        );
    }

    /// Test 4: Single component with two classes
    #[test]
    fn test_single_component_with_classes() {
        let mut tree = ComponentTree::new();
        let component = tree.create_component();
        tree.set_class_names(component, &["class", "other"]).unwrap();
        check(
            &tree,
            component,
            &[
                ("component", true),
                ("component.class", true),
                ("component.class.other", true),
                ("component.other.class", true),
                ("component .class", false),
                (".class", true),
                (".other", true),
                (".class.other", true),
                (".other.class", true),
            ],
        );
    }

    /// Test 5: Parent and child without classes
    #[test]
    fn test_pair_without_classes() {
        let (tree, _, child) = pair();
        check(
            &tree,
            child,
            &[
                ("component", true),
                ("component component", true),
                ("component.class", false),
                ("component.class component", false),
                ("component .class", false),
                ("component component.class", false),
            ],
        );
    }

    /// Test 6: Parent has a class
    #[test]
    fn test_pair_parent_class() {
        let (mut tree, parent, child) = pair();
        tree.set_class_names(parent, &["class"]).unwrap();
        check(
            &tree,
            child,
            &[
                ("component", true),
                ("component component", true),
                // Matches the parent, reaches the child by inheritance.
                ("component.class", true),
                ("component.class component", true),
                ("component .class", false),
                ("component component.class", false),
                (".class component", true),
                (".class", true),
                (".class .other", false),
            ],
        );
    }

    /// Test 7: Child has a class
    #[test]
    fn test_pair_child_class() {
        let (mut tree, _, child) = pair();
        tree.set_class_names(child, &["class"]).unwrap();
        check(
            &tree,
            child,
            &[
                ("component", true),
                ("component component", true),
                ("component.class", true),
                ("component.class component", false),
                ("component .class", true),
                ("component component.class", true),
                (".class component", false),
                (".class", true),
                (".class .other", false),
            ],
        );
    }

    /// Test 8: Both have classes
    #[test]
    fn test_pair_both_classes() {
        let (mut tree, parent, child) = pair();
        tree.set_class_names(parent, &["class"]).unwrap();
        tree.set_class_names(child, &["other"]).unwrap();
        check(
            &tree,
            child,
            &[
                ("component", true),
                ("component component", true),
                ("component.class", true),
                ("component.class component", true),
                ("component .class", false),
                ("component component.class", false),
                (".class component", true),
                (".class", true),
                (".class .other", true),
                (".class component.other", true),
            ],
        );
    }

    /// Test 9: Descendant selectors skip intermediate components
    #[test]
    fn test_three_level_skip() {
        let mut tree = ComponentTree::new();
        let a = tree.create_component();
        let b = tree.create_component();
        let c = tree.create_component();
        tree.append_child(a, b).unwrap();
        tree.append_child(b, c).unwrap();
        tree.set_class_names(a, &["first"]).unwrap();
        tree.set_class_names(c, &["last"]).unwrap();
        check(
            &tree,
            c,
            &[
                (".first", true),
                (".first .last", true),
                (".first component .last", true),
            ],
        );
    }

    /// Test 10: Hovered button transfers its color to its label
    #[test]
    fn test_hovered_button_transfers_color_to_label() {
        let mut manager = StyleManager::new();
        manager.style(".window").set(PropertyId::Color, Color::from_argb(0xFF00FF00));
        manager.style(".button").set(PropertyId::Color, Color::from_argb(0xFFFF0000));
        manager.style(".button:hover").set(PropertyId::Color, Color::from_argb(0xFF0000FF));

        let mut tree = ComponentTree::new();
        let window = tree.create_component();
        let button = tree.create_component();
        let label = tree.create_component();
        tree.set_class_names(window, &["window"]).unwrap();
        tree.set_class_names(button, &["button"]).unwrap();
        tree.append_child(window, button).unwrap();
        tree.append_child(button, label).unwrap();

        let color_of = |tree: &ComponentTree, id| {
            manager
                .compute_style(&tree.get(id).unwrap())
                .color(PropertyId::Color)
        };
        assert_eq!(color_of(&tree, button), Some(Color::from_argb(0xFFFF0000)));
        assert_eq!(color_of(&tree, label), Some(Color::from_argb(0xFFFF0000)));

        tree.set_mouse_over(button, true).unwrap();
        assert_eq!(color_of(&tree, button), Some(Color::from_argb(0xFF0000FF)));
        assert_eq!(color_of(&tree, label), Some(Color::from_argb(0xFF0000FF)));
    }

    /// Test 11: Pseudo-states outrank plain class rules
    #[test]
    fn test_pseudos_are_prioritized() {
        let mut manager = StyleManager::new();
        manager.style(".test").set(PropertyId::Color, Color::from_argb(0xFFFF0000));
        manager.style(".test:hover").set(PropertyId::Color, Color::from_argb(0xFF0000FF));
        manager.style(".test:active").set(PropertyId::Color, Color::from_argb(0xFF00FF00));

        let mut tree = ComponentTree::new();
        let component = tree.create_component();
        tree.set_class_names(component, &["test"]).unwrap();

        let color = |tree: &ComponentTree| {
            manager
                .compute_style(&tree.get(component).unwrap())
                .color(PropertyId::Color)
                .map(|c| c.to_argb32())
        };
        assert_eq!(color(&tree), Some(0xFFFF0000));

        tree.set_mouse_over(component, true).unwrap();
        assert_eq!(color(&tree), Some(0xFF0000FF));

        tree.set_mouse_down(component, true).unwrap();
        assert_eq!(color(&tree), Some(0xFF00FF00));
    }

    /// Test 12: Resolver agrees with per-component computation after edits
    #[test]
    fn test_resolver_follows_tree_edits() {
        let mut manager = StyleManager::new();
        manager.style(".panel label").set(PropertyId::Color, Color::GREEN);
        manager.style("label:focus").set(PropertyId::BorderWidth, 2.0);

        let mut tree = ComponentTree::new();
        let panel = tree.create_component();
        let label = tree.create("label");
        tree.append_child(panel, label).unwrap();
        tree.add_class(panel, "panel").unwrap();
        tree.set_focused(label, true).unwrap();

        let styled = StyleResolver::new(&tree, &manager).resolve(panel).unwrap();
        let label_style = &styled.get(label).unwrap().style;
        assert_eq!(label_style.color(PropertyId::Color), Some(Color::GREEN));
        assert_eq!(label_style.number(PropertyId::BorderWidth), Some(2.0));

        tree.remove_child(panel, label).unwrap();
        let detached = StyleResolver::new(&tree, &manager).resolve(label).unwrap();
        let detached = &detached.root().unwrap().style;
        assert!(detached.get(PropertyId::Color).is_none());
        assert_eq!(detached.number(PropertyId::BorderWidth), Some(2.0));
    }

    /// Test 13: Deep chains inherit from the root without exhausting the stack
    #[test]
    fn test_deep_chain() {
        const DEPTH: usize = 5_000;

        let mut manager = StyleManager::new();
        manager.style(".root").set(PropertyId::Color, Color::BLUE);
        manager.style("component").set(PropertyId::Width, 3.0);

        let mut tree = ComponentTree::new();
        let root = tree.create_component();
        tree.add_class(root, "root").unwrap();
        let mut leaf = root;
        for _ in 0..DEPTH {
            let next = tree.create_component();
            tree.append_child(leaf, next).unwrap();
            leaf = next;
        }

        let computed = manager.compute_style(&tree.get(leaf).unwrap());
        assert_eq!(computed.color(PropertyId::Color), Some(Color::BLUE));
        assert_eq!(computed.number(PropertyId::Width), Some(3.0));

        let styled = StyleResolver::new(&tree, &manager).resolve(root).unwrap();
        assert_eq!(styled.len(), DEPTH + 1);
        let last = styled.get(leaf).unwrap();
        assert_eq!(last.depth, DEPTH);
        assert_eq!(last.style, computed);
    }
}
