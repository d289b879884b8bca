//! Sibling reordering.
//!
//! `reorder` only ever moves a node within its own sibling list.
//! Cross-parent reparenting is a different operation with different
//! failure modes (the subtree must survive the trip) and is composed from
//! remove + insert by the editor's move mutation.

use crate::locate::{find_node_mut, locate};
use crate::node::{ComponentNode, Forest};

/// Move the node `active_id` to the position currently held by `over_id`.
///
/// Array-move semantics: the element is removed from `active_index` and
/// reinserted at `over_index` as measured after the removal, shifting the
/// elements in between by one. Not a swap.
///
/// No-ops: `active_id == over_id`, either id missing, or the two nodes
/// having different parents.
pub fn reorder(forest: &[ComponentNode], active_id: &str, over_id: &str) -> Forest {
    if active_id == over_id {
        return forest.to_vec();
    }
    let (from, to, parent_id) = {
        let (Some(active), Some(over)) = (locate(forest, active_id), locate(forest, over_id))
        else {
            return forest.to_vec();
        };
        if active.parent.id() != over.parent.id() {
            return forest.to_vec();
        }
        (
            active.index,
            over.index,
            active.parent.id().map(str::to_owned),
        )
    };

    move_within(forest, parent_id.as_deref(), from, to)
}

/// Move the node `id` to `index` within its current sibling list, clamped
/// to the list length. Positional counterpart of [`reorder`], used for
/// keyboard reordering and undo.
pub fn move_to_index(forest: &[ComponentNode], id: &str, index: usize) -> Forest {
    let (from, parent_id) = {
        let Some(found) = locate(forest, id) else {
            return forest.to_vec();
        };
        (found.index, found.parent.id().map(str::to_owned))
    };

    move_within(forest, parent_id.as_deref(), from, index)
}

fn move_within(
    forest: &[ComponentNode],
    parent_id: Option<&str>,
    from: usize,
    to: usize,
) -> Forest {
    let mut next = forest.to_vec();
    match parent_id {
        None => array_move(&mut next, from, to),
        Some(pid) => {
            if let Some(parent) = find_node_mut(&mut next, pid) {
                array_move(&mut parent.children, from, to);
            }
        }
    }
    next
}

fn array_move(siblings: &mut Vec<ComponentNode>, from: usize, to: usize) {
    if from == to || from >= siblings.len() {
        return;
    }
    let node = siblings.remove(from);
    let at = to.min(siblings.len());
    siblings.insert(at, node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::collect_ids;

    fn flat(ids: &[&str]) -> Vec<ComponentNode> {
        ids.iter()
            .map(|id| ComponentNode::new(*id, "Divider"))
            .collect()
    }

    #[test]
    fn test_move_last_before_first() {
        let forest = flat(&["a", "b", "c"]);
        let next = reorder(&forest, "c", "a");
        assert_eq!(collect_ids(&next), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_shifts_intermediates_not_swaps() {
        let forest = flat(&["a", "b", "c"]);
        let next = reorder(&forest, "a", "c");
        assert_eq!(collect_ids(&next), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_adjacent_swap_restored_by_inverse() {
        let forest = flat(&["a", "b", "c"]);
        let swapped = reorder(&forest, "a", "b");
        assert_eq!(collect_ids(&swapped), vec!["b", "a", "c"]);

        let back = reorder(&swapped, "b", "a");
        assert_eq!(back, forest);
    }

    #[test]
    fn test_non_adjacent_inverse_accounts_for_shift() {
        // Moving a→c shifts b and c left; moving c back to a's slot lands
        // on the shifted positions, not the original order.
        let forest = flat(&["a", "b", "c"]);
        let moved = reorder(&forest, "a", "c");
        assert_eq!(collect_ids(&moved), vec!["b", "c", "a"]);

        let back = reorder(&moved, "c", "a");
        assert_eq!(collect_ids(&back), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reorder_within_nested_parent() {
        let forest = vec![ComponentNode::new("root", "Container")
            .with_children(flat(&["x", "y", "z"]))];

        let next = reorder(&forest, "z", "x");

        assert_eq!(collect_ids(&next), vec!["root", "z", "x", "y"]);
        assert_eq!(collect_ids(&forest), vec!["root", "x", "y", "z"]);
    }

    #[test]
    fn test_cross_parent_reorder_rejected() {
        let forest = vec![
            ComponentNode::new("p1", "Container").with_children(flat(&["x"])),
            ComponentNode::new("p2", "Container").with_children(flat(&["y"])),
        ];

        let next = reorder(&forest, "x", "y");
        assert_eq!(next, forest);

        // Top level vs nested is also a parent mismatch.
        let next = reorder(&forest, "p1", "y");
        assert_eq!(next, forest);
    }

    #[test]
    fn test_degenerate_reorders_are_noops() {
        let forest = flat(&["a", "b"]);
        assert_eq!(reorder(&forest, "a", "a"), forest);
        assert_eq!(reorder(&forest, "a", "ghost"), forest);
        assert_eq!(reorder(&forest, "ghost", "a"), forest);
    }

    #[test]
    fn test_move_to_index_clamps() {
        let forest = flat(&["a", "b", "c"]);

        let next = move_to_index(&forest, "a", 99);
        assert_eq!(collect_ids(&next), vec!["b", "c", "a"]);

        let next = move_to_index(&forest, "c", 0);
        assert_eq!(collect_ids(&next), vec!["c", "a", "b"]);

        assert_eq!(move_to_index(&forest, "ghost", 0), forest);
    }
}
