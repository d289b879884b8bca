use crate::node::ComponentNode;

/// Visit `node` and every descendant in pre-order.
pub fn walk<'a, F: FnMut(&'a ComponentNode)>(node: &'a ComponentNode, f: &mut F) {
    f(node);
    for child in &node.children {
        walk(child, f);
    }
}

/// Visit every node in the forest in pre-order.
pub fn walk_forest<'a, F: FnMut(&'a ComponentNode)>(forest: &'a [ComponentNode], f: &mut F) {
    for node in forest {
        walk(node, f);
    }
}

/// Mutably visit `node` and every descendant in pre-order.
pub fn walk_mut<F: FnMut(&mut ComponentNode)>(node: &mut ComponentNode, f: &mut F) {
    f(node);
    for child in &mut node.children {
        walk_mut(child, f);
    }
}

/// Mutably visit every node in the forest in pre-order.
pub fn walk_forest_mut<F: FnMut(&mut ComponentNode)>(forest: &mut [ComponentNode], f: &mut F) {
    for node in forest.iter_mut() {
        walk_mut(node, f);
    }
}

/// All node ids in the forest, in pre-order.
pub fn collect_ids(forest: &[ComponentNode]) -> Vec<String> {
    let mut ids = Vec::new();
    walk_forest(forest, &mut |node| ids.push(node.id.clone()));
    ids
}

/// Whether a node with `id` exists anywhere in the forest.
pub fn contains(forest: &[ComponentNode], id: &str) -> bool {
    crate::locate(forest, id).is_some()
}

/// Total number of nodes in the forest.
pub fn count_nodes(forest: &[ComponentNode]) -> usize {
    let mut count = 0;
    walk_forest(forest, &mut |_| count += 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_forest() -> Vec<ComponentNode> {
        vec![
            ComponentNode::new("a", "Container")
                .with_child(
                    ComponentNode::new("b", "Container")
                        .with_child(ComponentNode::new("c", "Text")),
                )
                .with_child(ComponentNode::new("d", "Button")),
            ComponentNode::new("e", "Divider"),
        ]
    }

    #[test]
    fn test_collect_ids_is_preorder() {
        let forest = sample_forest();
        assert_eq!(collect_ids(&forest), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_count_and_contains() {
        let forest = sample_forest();
        assert_eq!(count_nodes(&forest), 5);
        assert!(contains(&forest, "c"));
        assert!(!contains(&forest, "z"));
    }

    #[test]
    fn test_walk_mut_reaches_every_node() {
        let mut forest = sample_forest();
        walk_forest_mut(&mut forest, &mut |node| {
            node.styles.insert("visited".into(), true.into());
        });

        let mut visited = 0;
        walk_forest(&forest, &mut |node| {
            assert_eq!(node.styles.get("visited"), Some(&true.into()));
            visited += 1;
        });
        assert_eq!(visited, 5);
    }
}
