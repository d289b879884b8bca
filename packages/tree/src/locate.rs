use crate::node::ComponentNode;

/// The owner of a located node's sibling list.
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    /// The node lives in the top-level `content` list.
    Root,
    Node(&'a ComponentNode),
}

impl<'a> Parent<'a> {
    pub fn is_root(&self) -> bool {
        matches!(self, Parent::Root)
    }

    /// Owning node's id, or `None` for the top level.
    pub fn id(&self) -> Option<&'a str> {
        match self {
            Parent::Root => None,
            Parent::Node(node) => Some(node.id.as_str()),
        }
    }
}

/// A node found by [`locate`], with enough context to reason about its
/// position: the owning parent, the exact sibling list it lives in, and
/// its index within that list.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    pub node: &'a ComponentNode,
    pub parent: Parent<'a>,
    pub siblings: &'a [ComponentNode],
    pub index: usize,
}

/// Find a node by id anywhere in the forest.
///
/// Pre-order depth-first; should two nodes ever share an id (an invariant
/// violation upstream), the first match in pre-order wins. Not-found is a
/// normal outcome: callers check before mutating.
pub fn locate<'a>(forest: &'a [ComponentNode], id: &str) -> Option<Location<'a>> {
    locate_in(forest, Parent::Root, id)
}

fn locate_in<'a>(
    siblings: &'a [ComponentNode],
    parent: Parent<'a>,
    id: &str,
) -> Option<Location<'a>> {
    for (index, node) in siblings.iter().enumerate() {
        if node.id == id {
            return Some(Location {
                node,
                parent,
                siblings,
                index,
            });
        }
        if let Some(found) = locate_in(&node.children, Parent::Node(node), id) {
            return Some(found);
        }
    }
    None
}

/// Mutable lookup used by the in-place halves of the pure operations.
pub(crate) fn find_node_mut<'a>(
    siblings: &'a mut [ComponentNode],
    id: &str,
) -> Option<&'a mut ComponentNode> {
    for node in siblings.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}
