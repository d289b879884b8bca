//! # Pagecraft Tree
//!
//! Canonical in-memory representation of a page's component tree and the
//! pure operations that edit it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ tree: ComponentNode forest + pure edits     │
//! │  - Locate node by id (parent/siblings/idx)  │
//! │  - Insert / remove / duplicate / update     │
//! │  - Reorder siblings (array-move semantics)  │
//! │  - Persisted layout shape (content + root)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: semantic mutations, undo, sessions  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The forest is the source of truth**: panels, palettes and canvases
//!    all read the same ordered tree.
//! 2. **Functional updates**: every operation takes the current forest and
//!    returns a new one; the input is never mutated in place.
//! 3. **Total operations**: an id that cannot be found yields the input
//!    forest unchanged, never a panic.
//! 4. **Ids are minted, not reused**: duplicate and template expansion
//!    assign fresh ids to every node they produce.
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_tree::{ComponentNode, IdGenerator, ops, locate};
//!
//! let mut ids = IdGenerator::new();
//! let button = ComponentNode::new(ids.new_id(), "Button")
//!     .with_prop("text", "Click me".into());
//! let button_id = button.id.clone();
//!
//! let forest = ops::insert(&[], None, button, 0);
//! assert!(locate(&forest, &button_id).is_some());
//! ```

mod id;
mod locate;
mod node;
pub mod ops;
mod reorder;
mod walk;

pub use id::IdGenerator;
pub use locate::{locate, Location, Parent};
pub use node::{ComponentNode, Forest, LayoutData};
pub use reorder::{move_to_index, reorder};
pub use walk::{collect_ids, contains, count_nodes, walk, walk_forest, walk_forest_mut, walk_mut};
