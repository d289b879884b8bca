//! # Undo/Redo Stack
//!
//! Tracks edit history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Every layout operation is a pure whole-document transform, so the
//!   inverse of any edit batch is exactly the layout captured before it;
//!   the stack stores snapshots, not inverse mutations
//! - Undo restores the snapshot and moves the entry to the redo stack
//! - Redo restores the post-edit layout the same way in reverse
//! - New edits clear the redo stack
//! - Supports batched edits (group multiple mutations as one undo step)
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let mut doc = Document::from_layout(...);
//!
//! stack.apply(Mutation::RemoveNode { node_id }, &mut doc)?;
//! stack.undo(&mut doc);
//! stack.redo(&mut doc);
//! ```

use pagecraft_tree::LayoutData;

use crate::{Document, EditorError, Mutation, MutationOutcome};

#[derive(Debug, Clone)]
struct Snapshot {
    /// Layout as it was before the recorded edit(s)
    layout: LayoutData,

    /// Optional description of the edit
    description: Option<String>,
}

/// Undo/redo stack for document editing
#[derive(Debug)]
pub struct UndoStack {
    /// Pre-edit snapshots of applied edits (most recent last)
    undo_stack: Vec<Snapshot>,

    /// Pre-undo snapshots of undone edits (most recent last)
    redo_stack: Vec<Snapshot>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<Batch>,
}

#[derive(Debug)]
struct Batch {
    snapshot: Snapshot,
    edits: usize,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo
    pub fn apply(
        &mut self,
        mutation: Mutation,
        doc: &mut Document,
    ) -> Result<MutationOutcome, EditorError> {
        let before = doc.layout().clone();
        let outcome = doc.apply(mutation)?;

        if let Some(batch) = &mut self.current_batch {
            // The batch's snapshot was taken at begin_batch; later edits
            // only mark it non-empty.
            batch.edits += 1;
        } else {
            self.push(Snapshot {
                layout: before,
                description: None,
            });
        }

        Ok(outcome)
    }

    /// Start a batch of mutations (undone/redone together)
    pub fn begin_batch(&mut self, doc: &Document) {
        self.current_batch = Some(Batch {
            snapshot: Snapshot {
                layout: doc.layout().clone(),
                description: None,
            },
            edits: 0,
        });
    }

    /// End the current batch and push it to the undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if batch.edits > 0 {
                self.push(batch.snapshot);
            }
        }
    }

    /// Set description for the current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.snapshot.description = Some(description.into());
        }
    }

    fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates the redo future
        self.redo_stack.clear();
    }

    /// Undo the most recent edit/batch
    pub fn undo(&mut self, doc: &mut Document) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.redo_stack.push(Snapshot {
                    layout: doc.layout().clone(),
                    description: snapshot.description.clone(),
                });
                doc.restore(snapshot.layout);
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone edit/batch
    pub fn redo(&mut self, doc: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                self.undo_stack.push(Snapshot {
                    layout: doc.layout().clone(),
                    description: snapshot.description.clone(),
                });
                doc.restore(snapshot.layout);
                true
            }
            None => false,
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    /// Description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }

    /// Description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
