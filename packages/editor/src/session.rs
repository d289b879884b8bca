//! # Edit Session Management
//!
//! Tracks one client's editing state for a document: current selection
//! and locally applied mutations awaiting server acknowledgment.

use chrono::Utc;

use crate::{Document, EditorError, Mutation};

/// Single edit session (single-user or one client in multi-user)
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    /// Currently selected node ids
    pub selected_nodes: Vec<String>,

    /// Locally applied mutations not yet acknowledged by the backend
    pub pending_mutations: Vec<PendingMutation>,

    /// Monotonic counter for mutation ids; never reused after confirm
    next_seq: u64,
}

/// Mutation waiting for server acknowledgment
#[derive(Debug, Clone)]
pub struct PendingMutation {
    /// Unique mutation ID (`{session}-{n}`)
    pub id: String,

    /// The mutation
    pub mutation: Mutation,

    /// Unix timestamp of local application
    pub timestamp: i64,
}

impl EditSession {
    /// Create new edit session
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selected_nodes: Vec::new(),
            pending_mutations: Vec::new(),
            next_seq: 0,
        }
    }

    /// Apply a mutation to the local document and queue it as pending.
    ///
    /// The mutation only becomes pending if it applied cleanly; a failed
    /// edit has nothing for the backend to acknowledge.
    pub fn apply_optimistic(
        &mut self,
        doc: &mut Document,
        mutation: Mutation,
    ) -> Result<String, EditorError> {
        doc.apply(mutation.clone())?;

        let mutation_id = format!("{}-{}", self.id, self.next_seq);
        self.next_seq += 1;

        self.pending_mutations.push(PendingMutation {
            id: mutation_id.clone(),
            mutation,
            timestamp: Utc::now().timestamp(),
        });

        Ok(mutation_id)
    }

    /// Confirm that a mutation was accepted by the backend
    pub fn confirm_mutation(&mut self, mutation_id: &str) {
        self.pending_mutations.retain(|m| m.id != mutation_id);
    }

    /// Reject a mutation (the backend refused it)
    pub fn reject_mutation(&mut self, mutation_id: &str) {
        self.pending_mutations.retain(|m| m.id != mutation_id);
    }

    /// Update selection
    pub fn set_selection(&mut self, node_ids: Vec<String>) {
        self.selected_nodes = node_ids;
    }

    /// Drop selected ids that no longer exist in the document.
    ///
    /// Called after removals and undo, which can take selected nodes
    /// away.
    pub fn sync_selection(&mut self, doc: &Document) {
        self.selected_nodes
            .retain(|id| pagecraft_tree::contains(doc.content(), id));
    }

    /// Number of pending mutations
    pub fn pending_count(&self) -> usize {
        self.pending_mutations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_tree::{ComponentNode, LayoutData};

    fn sample_doc() -> Document {
        Document::from_layout(LayoutData::new(vec![
            ComponentNode::new("a", "Container"),
            ComponentNode::new("b", "Divider"),
        ]))
    }

    #[test]
    fn test_session_creation() {
        let session = EditSession::new("client-1");

        assert_eq!(session.id, "client-1");
        assert_eq!(session.pending_count(), 0);
        assert!(session.selected_nodes.is_empty());
    }

    #[test]
    fn test_optimistic_apply_queues_pending() {
        let mut doc = sample_doc();
        let mut session = EditSession::new("client-1");

        let id = session
            .apply_optimistic(
                &mut doc,
                Mutation::RemoveNode {
                    node_id: "b".to_string(),
                },
            )
            .unwrap();

        assert_eq!(id, "client-1-0");
        assert_eq!(session.pending_count(), 1);
        assert_eq!(doc.content().len(), 1);

        session.confirm_mutation(&id);
        assert_eq!(session.pending_count(), 0);
    }

    #[test]
    fn test_failed_apply_queues_nothing() {
        let mut doc = sample_doc();
        let mut session = EditSession::new("client-1");

        let result = session.apply_optimistic(
            &mut doc,
            Mutation::RemoveNode {
                node_id: "ghost".to_string(),
            },
        );

        assert!(result.is_err());
        assert_eq!(session.pending_count(), 0);
    }

    #[test]
    fn test_mutation_ids_are_not_reused() {
        let mut doc = sample_doc();
        let mut session = EditSession::new("client-1");

        let first = session
            .apply_optimistic(
                &mut doc,
                Mutation::RemoveNode {
                    node_id: "b".to_string(),
                },
            )
            .unwrap();
        session.confirm_mutation(&first);

        let second = session
            .apply_optimistic(
                &mut doc,
                Mutation::RemoveNode {
                    node_id: "a".to_string(),
                },
            )
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(second, "client-1-1");
    }

    #[test]
    fn test_sync_selection_drops_dead_ids() {
        let mut doc = sample_doc();
        let mut session = EditSession::new("client-1");
        session.set_selection(vec!["a".to_string(), "b".to_string()]);

        session
            .apply_optimistic(
                &mut doc,
                Mutation::RemoveNode {
                    node_id: "b".to_string(),
                },
            )
            .unwrap();
        session.sync_selection(&doc);

        assert_eq!(session.selected_nodes, vec!["a".to_string()]);
    }
}
