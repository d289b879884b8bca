//! Pure structural edits over a component forest.
//!
//! Every function takes the current forest and returns a new one; the
//! input is never mutated. Unknown ids yield the input unchanged — callers
//! that need to surface a failed edit validate first (the editor crate's
//! mutation layer does exactly that).
//!
//! The whole forest is cloned before the clone is edited in place.
//! Structural sharing with the caller's retained reference would be an
//! aliasing hazard, and these trees are property-panel sized.

use serde_json::{Map, Value};

use crate::id::IdGenerator;
use crate::locate::find_node_mut;
use crate::node::{ComponentNode, Forest};
use crate::walk::walk_mut;

/// Insert `node` into the children of `parent_id`, or into the top level
/// when `parent_id` is `None`.
///
/// `position` is clamped to `[0, children.len()]`, so an oversized
/// sentinel (e.g. 999) appends. An unknown parent returns the input
/// unchanged.
pub fn insert(
    forest: &[ComponentNode],
    parent_id: Option<&str>,
    node: ComponentNode,
    position: usize,
) -> Forest {
    let mut next = forest.to_vec();
    match parent_id {
        None => {
            let at = position.min(next.len());
            next.insert(at, node);
        }
        Some(pid) => match find_node_mut(&mut next, pid) {
            Some(parent) => {
                let at = position.min(parent.children.len());
                parent.children.insert(at, node);
            }
            None => return forest.to_vec(),
        },
    }
    next
}

/// Remove the node with `id` from wherever it lives, along with its
/// entire subtree. Unknown ids return the input unchanged.
///
/// External bindings keyed by removed ids become orphans; pruning them is
/// the caller's job (see the bindings crate).
pub fn remove(forest: &[ComponentNode], id: &str) -> Forest {
    let mut next = forest.to_vec();
    remove_node(&mut next, id);
    next
}

/// Detach the node with `id` and return it, or `None` if absent.
pub(crate) fn remove_node(siblings: &mut Vec<ComponentNode>, id: &str) -> Option<ComponentNode> {
    if let Some(pos) = siblings.iter().position(|n| n.id == id) {
        return Some(siblings.remove(pos));
    }
    for node in siblings.iter_mut() {
        if let Some(removed) = remove_node(&mut node.children, id) {
            return Some(removed);
        }
    }
    None
}

/// Deep-clone the subtree rooted at `id`, mint a fresh id for every node
/// in the clone, and place the clone immediately after the original in
/// the same sibling list.
pub fn duplicate(forest: &[ComponentNode], id: &str, ids: &mut IdGenerator) -> Forest {
    let mut next = forest.to_vec();
    duplicate_in(&mut next, id, ids);
    next
}

fn duplicate_in(siblings: &mut Vec<ComponentNode>, id: &str, ids: &mut IdGenerator) -> bool {
    if let Some(pos) = siblings.iter().position(|n| n.id == id) {
        let mut clone = siblings[pos].clone();
        reassign_ids(&mut clone, ids);
        siblings.insert(pos + 1, clone);
        return true;
    }
    for node in siblings.iter_mut() {
        if duplicate_in(&mut node.children, id, ids) {
            return true;
        }
    }
    false
}

/// Mint a fresh id for `node` and every descendant.
///
/// Used by duplicate and by template expansion: any subtree entering a
/// forest gets ids no earlier node can share.
pub fn reassign_ids(node: &mut ComponentNode, ids: &mut IdGenerator) {
    walk_mut(node, &mut |n| n.id = ids.new_id());
}

/// Shallow-merge `partial` into the target node's props. `id`, `type` and
/// `children` are untouched.
pub fn update_props(forest: &[ComponentNode], id: &str, partial: Map<String, Value>) -> Forest {
    let mut next = forest.to_vec();
    if let Some(node) = find_node_mut(&mut next, id) {
        for (key, value) in partial {
            node.props.insert(key, value);
        }
    }
    next
}

/// Replace the target node's props wholesale. Property panels committing a
/// full form use this; so does undo, since a shallow merge cannot take
/// keys away.
pub fn replace_props(forest: &[ComponentNode], id: &str, props: Map<String, Value>) -> Forest {
    let mut next = forest.to_vec();
    if let Some(node) = find_node_mut(&mut next, id) {
        node.props = props;
    }
    next
}

/// Shallow-merge `partial` into the target node's styles.
pub fn update_styles(forest: &[ComponentNode], id: &str, partial: Map<String, Value>) -> Forest {
    let mut next = forest.to_vec();
    if let Some(node) = find_node_mut(&mut next, id) {
        for (key, value) in partial {
            node.styles.insert(key, value);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::{collect_ids, contains};
    use serde_json::json;
    use std::collections::HashSet;

    fn props(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_insert_into_empty_forest() {
        let node = ComponentNode::new("n-1", "Button").with_prop("text", json!("Click me"));

        let forest = insert(&[], None, node, 0);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].type_name, "Button");
        assert_eq!(forest[0].props["text"], "Click me");
    }

    #[test]
    fn test_insert_position_clamps_to_append() {
        let forest = insert(&[], None, ComponentNode::new("a", "Divider"), 0);
        let forest = insert(&forest, None, ComponentNode::new("b", "Divider"), 999);

        assert_eq!(collect_ids(&forest), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_under_parent() {
        let forest = vec![ComponentNode::new("a", "Container")
            .with_child(ComponentNode::new("x", "Heading"))];

        let next = insert(&forest, Some("a"), ComponentNode::new("y", "Button"), 0);

        assert_eq!(collect_ids(&next), vec!["a", "y", "x"]);
        // input untouched
        assert_eq!(collect_ids(&forest), vec!["a", "x"]);
    }

    #[test]
    fn test_insert_under_missing_parent_is_noop() {
        let forest = vec![ComponentNode::new("a", "Container")];
        let next = insert(&forest, Some("ghost"), ComponentNode::new("y", "Button"), 0);
        assert_eq!(next, forest);
    }

    #[test]
    fn test_remove_carries_away_subtree() {
        let forest = vec![
            ComponentNode::new("a", "Container")
                .with_child(ComponentNode::new("x", "Heading"))
                .with_child(ComponentNode::new("y", "Button")),
            ComponentNode::new("b", "Divider"),
        ];

        let next = remove(&forest, "a");

        assert_eq!(collect_ids(&next), vec!["b"]);
        assert!(!contains(&next, "x"));
        assert!(contains(&forest, "x"));
    }

    #[test]
    fn test_remove_missing_id_returns_input_unchanged() {
        let forest = vec![ComponentNode::new("a", "Divider")];
        assert_eq!(remove(&forest, "ghost"), forest);
    }

    #[test]
    fn test_duplicate_mints_fresh_ids_for_whole_subtree() {
        let forest = vec![ComponentNode::new("a", "Container")
            .with_prop("title", json!("Hero"))
            .with_child(ComponentNode::new("x", "Heading"))
            .with_child(ComponentNode::new("y", "Button"))];
        let mut ids = IdGenerator::seeded("copy");

        let next = duplicate(&forest, "a", &mut ids);

        assert_eq!(next.len(), 2);
        let clone = &next[1];
        assert_ne!(clone.id, "a");
        assert_ne!(clone.children[0].id, "x");
        assert_ne!(clone.children[1].id, "y");
        assert_eq!(clone.props, next[0].props);

        let all: Vec<String> = collect_ids(&next);
        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn test_duplicate_places_clone_after_original() {
        let forest = vec![
            ComponentNode::new("a", "Divider"),
            ComponentNode::new("b", "Divider"),
        ];
        let mut ids = IdGenerator::seeded("copy");

        let next = duplicate(&forest, "a", &mut ids);

        assert_eq!(next[0].id, "a");
        assert_eq!(next[1].id, "copy-1");
        assert_eq!(next[2].id, "b");
    }

    #[test]
    fn test_duplicate_is_isolated_from_original() {
        let forest = vec![ComponentNode::new("a", "Button").with_prop("text", json!("Buy"))];
        let mut ids = IdGenerator::seeded("copy");

        let next = duplicate(&forest, "a", &mut ids);
        let clone_id = next[1].id.clone();

        // Mutating the original's props leaves the clone untouched.
        let next = update_props(&next, "a", props(&[("text", json!("Sell"))]));
        assert_eq!(next[0].props["text"], "Sell");
        assert_eq!(next[1].props["text"], "Buy");

        // And the other way around.
        let next = update_props(&next, &clone_id, props(&[("text", json!("Rent"))]));
        assert_eq!(next[0].props["text"], "Sell");
        assert_eq!(next[1].props["text"], "Rent");
    }

    #[test]
    fn test_update_props_is_shallow_merge() {
        let forest = vec![ComponentNode::new("a", "Button")
            .with_prop("text", json!("Go"))
            .with_prop("variant", json!("primary"))];

        let next = update_props(&forest, "a", props(&[("text", json!("Stop"))]));

        assert_eq!(next[0].props["text"], "Stop");
        assert_eq!(next[0].props["variant"], "primary");
        assert_eq!(next[0].id, "a");
        assert_eq!(next[0].type_name, "Button");
    }

    #[test]
    fn test_replace_props_drops_absent_keys() {
        let forest = vec![ComponentNode::new("a", "Button")
            .with_prop("text", json!("Go"))
            .with_prop("variant", json!("primary"))];

        let next = replace_props(&forest, "a", props(&[("text", json!("Go"))]));

        assert_eq!(next[0].props["text"], "Go");
        assert!(next[0].props.get("variant").is_none());
    }

    #[test]
    fn test_update_styles_leaves_props_alone() {
        let forest = vec![ComponentNode::new("a", "Button").with_prop("text", json!("Go"))];

        let next = update_styles(&forest, "a", props(&[("color", json!("#fff"))]));

        assert_eq!(next[0].styles["color"], "#fff");
        assert_eq!(next[0].props["text"], "Go");
    }

    #[test]
    fn test_update_on_missing_id_is_noop() {
        let forest = vec![ComponentNode::new("a", "Button")];
        let next = update_props(&forest, "ghost", props(&[("text", json!("x"))]));
        assert_eq!(next, forest);
    }
}
