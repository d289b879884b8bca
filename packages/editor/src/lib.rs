//! # Pagecraft Editor
//!
//! Document editing engine for Pagecraft pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ tree: pure forest operations                │
//! └─────────────────────────────────────────────┘
//!                     ↑
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Load/save page layouts (JSON)            │
//! │  - Apply mutations with validation          │
//! │  - Undo/redo over layout snapshots          │
//! │  - Per-client edit sessions                 │
//! └─────────────────────────────────────────────┘
//!                     ↑
//! ┌─────────────────────────────────────────────┐
//! │ UI: canvas, palette, property panels        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The layout is the source of truth**: selection, panels and
//!    bindings are derived or external views
//! 2. **Validate, then apply**: failed drops surface as errors; the
//!    document never half-applies an edit
//! 3. **Functional updates**: a mutation replaces the layout wholesale,
//!    which is also what makes snapshot undo exact
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{Document, Mutation};
//!
//! let mut doc = Document::load("landing.json")?;
//!
//! doc.apply(Mutation::UpdateProps {
//!     node_id: "01J9...".to_string(),
//!     props: [("text".to_string(), "Click me!".into())].into_iter().collect(),
//! })?;
//!
//! doc.save()?;
//! ```

mod document;
mod errors;
mod mutations;
mod session;
mod undo_stack;

pub use document::{Document, DocumentStorage, MutationOutcome};
pub use errors::EditorError;
pub use mutations::{AppliedMutation, Mutation, MutationError};
pub use session::{EditSession, PendingMutation};
pub use undo_stack::UndoStack;

// Re-export the tree types mutations are built from
pub use pagecraft_tree::{ComponentNode, Forest, IdGenerator, LayoutData};
