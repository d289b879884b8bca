//! # Layout Mutations
//!
//! High-level semantic operations on a page layout.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: Each mutation represents one user action
//! 2. **Validated**: Structural constraints are checked before applying
//! 3. **Functional**: Applying never touches the input layout; a new one
//!    is returned
//!
//! ## Mutation Semantics
//!
//! ### InsertNode
//! - Position clamps to the target child list; oversized values append
//! - Inserting under a missing parent is an error, not a silent no-op:
//!   a failed palette drop must reach the user
//!
//! ### RemoveNode
//! - Removes node and all descendants
//! - Bindings keyed by removed ids are the caller's to prune
//!
//! ### DuplicateNode
//! - Every node of the clone gets a freshly minted id
//! - The clone lands immediately after the original among its siblings
//!
//! ### Reorder
//! - Same-parent only; a cross-parent drag is rejected so the UI can
//!   refuse the drop (reparenting is MoveNode's job)
//!
//! ### MoveNode
//! - Remove + insert composition with a cycle guard: a node cannot move
//!   under itself or any of its descendants

use pagecraft_tree::{
    collect_ids, locate, move_to_index, ops, reorder, ComponentNode, IdGenerator, LayoutData,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a node under a parent (`None` = top level) at a clamped
    /// position
    InsertNode {
        parent_id: Option<String>,
        node: ComponentNode,
        position: usize,
    },

    /// Remove a node and its subtree
    RemoveNode { node_id: String },

    /// Clone a subtree with fresh ids, placing the clone after the
    /// original
    DuplicateNode { node_id: String },

    /// Shallow-merge values into the node's props
    UpdateProps {
        node_id: String,
        props: Map<String, Value>,
    },

    /// Replace the node's props wholesale
    ReplaceProps {
        node_id: String,
        props: Map<String, Value>,
    },

    /// Shallow-merge values into the node's styles
    UpdateStyles {
        node_id: String,
        styles: Map<String, Value>,
    },

    /// Move a node to another node's position within the same sibling
    /// list
    Reorder { active_id: String, over_id: String },

    /// Reparent a node (`None` = top level) at an index
    MoveNode {
        node_id: String,
        new_parent_id: Option<String>,
        index: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Node id already present in tree: {0}")]
    IdCollision(String),

    #[error("Moving {node_id} under {parent_id} would create a cycle")]
    CycleDetected { node_id: String, parent_id: String },

    #[error("Cannot reorder {active_id} over {over_id}: different parents")]
    CrossParentReorder {
        active_id: String,
        over_id: String,
    },
}

/// A mutation's effect on the document.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedMutation {
    pub layout: LayoutData,

    /// Ids minted or introduced by this mutation (insert and duplicate),
    /// in pre-order. Callers use these to re-key bindings and selection.
    pub created_ids: Vec<String>,
}

impl Mutation {
    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::InsertNode { .. } => "InsertNode",
            Mutation::RemoveNode { .. } => "RemoveNode",
            Mutation::DuplicateNode { .. } => "DuplicateNode",
            Mutation::UpdateProps { .. } => "UpdateProps",
            Mutation::ReplaceProps { .. } => "ReplaceProps",
            Mutation::UpdateStyles { .. } => "UpdateStyles",
            Mutation::Reorder { .. } => "Reorder",
            Mutation::MoveNode { .. } => "MoveNode",
        }
    }

    /// Validate without applying
    pub fn validate(&self, layout: &LayoutData) -> Result<(), MutationError> {
        let content = &layout.content;
        match self {
            Mutation::InsertNode {
                parent_id, node, ..
            } => {
                if let Some(pid) = parent_id {
                    if locate(content, pid).is_none() {
                        return Err(MutationError::ParentNotFound(pid.clone()));
                    }
                }
                let existing: std::collections::HashSet<String> =
                    collect_ids(content).into_iter().collect();
                for id in collect_ids(std::slice::from_ref(node)) {
                    if existing.contains(&id) {
                        return Err(MutationError::IdCollision(id));
                    }
                }
                Ok(())
            }

            Mutation::RemoveNode { node_id }
            | Mutation::DuplicateNode { node_id }
            | Mutation::UpdateProps { node_id, .. }
            | Mutation::ReplaceProps { node_id, .. }
            | Mutation::UpdateStyles { node_id, .. } => {
                if locate(content, node_id).is_none() {
                    return Err(MutationError::NodeNotFound(node_id.clone()));
                }
                Ok(())
            }

            Mutation::Reorder {
                active_id,
                over_id,
            } => {
                let active = locate(content, active_id)
                    .ok_or_else(|| MutationError::NodeNotFound(active_id.clone()))?;
                let over = locate(content, over_id)
                    .ok_or_else(|| MutationError::NodeNotFound(over_id.clone()))?;
                if active.parent.id() != over.parent.id() {
                    return Err(MutationError::CrossParentReorder {
                        active_id: active_id.clone(),
                        over_id: over_id.clone(),
                    });
                }
                Ok(())
            }

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                ..
            } => {
                let found = locate(content, node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                if let Some(pid) = new_parent_id {
                    // The subtree being moved cannot contain its target:
                    // after the remove step the parent would be gone and
                    // the subtree lost.
                    let subtree: Vec<String> = collect_ids(std::slice::from_ref(found.node));
                    if subtree.iter().any(|id| id == pid) {
                        return Err(MutationError::CycleDetected {
                            node_id: node_id.clone(),
                            parent_id: pid.clone(),
                        });
                    }
                    if locate(content, pid).is_none() {
                        return Err(MutationError::ParentNotFound(pid.clone()));
                    }
                }
                Ok(())
            }
        }
    }

    /// Validate, then produce the mutated layout.
    pub fn apply(
        &self,
        layout: &LayoutData,
        ids: &mut IdGenerator,
    ) -> Result<AppliedMutation, MutationError> {
        self.validate(layout)?;

        let content = &layout.content;
        let (content, created_ids) = match self {
            Mutation::InsertNode {
                parent_id,
                node,
                position,
            } => {
                let created = collect_ids(std::slice::from_ref(node));
                (
                    ops::insert(content, parent_id.as_deref(), node.clone(), *position),
                    created,
                )
            }

            Mutation::RemoveNode { node_id } => (ops::remove(content, node_id), Vec::new()),

            Mutation::DuplicateNode { node_id } => {
                let before: std::collections::HashSet<String> =
                    collect_ids(content).into_iter().collect();
                let next = ops::duplicate(content, node_id, ids);
                let created = collect_ids(&next)
                    .into_iter()
                    .filter(|id| !before.contains(id))
                    .collect();
                (next, created)
            }

            Mutation::UpdateProps { node_id, props } => (
                ops::update_props(content, node_id, props.clone()),
                Vec::new(),
            ),

            Mutation::ReplaceProps { node_id, props } => (
                ops::replace_props(content, node_id, props.clone()),
                Vec::new(),
            ),

            Mutation::UpdateStyles { node_id, styles } => (
                ops::update_styles(content, node_id, styles.clone()),
                Vec::new(),
            ),

            Mutation::Reorder {
                active_id,
                over_id,
            } => (reorder(content, active_id, over_id), Vec::new()),

            Mutation::MoveNode {
                node_id,
                new_parent_id,
                index,
            } => (
                move_node(content, node_id, new_parent_id.as_deref(), *index),
                Vec::new(),
            ),
        };

        Ok(AppliedMutation {
            layout: LayoutData {
                content,
                root: layout.root.clone(),
            },
            created_ids,
        })
    }
}

/// Reparent as remove + insert. Validation has already established that
/// the node exists and the target parent is outside the moved subtree.
fn move_node(
    content: &[ComponentNode],
    node_id: &str,
    new_parent_id: Option<&str>,
    index: usize,
) -> Vec<ComponentNode> {
    let Some(found) = locate(content, node_id) else {
        return content.to_vec();
    };

    // Moving within the same parent is a positional move, not a
    // remove+insert: removal first would shift the target index.
    if found.parent.id() == new_parent_id {
        return move_to_index(content, node_id, index);
    }

    let node = found.node.clone();
    let without = ops::remove(content, node_id);
    ops::insert(&without, new_parent_id, node, index)
}
