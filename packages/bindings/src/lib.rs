//! # Pagecraft Bindings
//!
//! Connections from data-bearing components (DataTable, Chart, Form) to
//! named tables in named datasources, stored separately from the
//! component tree and keyed by component id.
//!
//! Binding lifetime is independent of the tree: removing or duplicating a
//! component does not touch its binding automatically. The store makes
//! the required synchronization explicit instead — [`BindingStore::prune_orphans`]
//! after removals, [`BindingStore::clone_for`] after duplications — so
//! stale bindings keyed by dead ids cannot silently accumulate.

mod binding;
mod columns;
mod store;

pub use binding::{
    ComponentDataBinding, FilterOp, FilterRule, PaginationSettings, SortDirection, SortRule,
};
pub use columns::{effective_columns, ColumnOverride, EffectiveColumn};
pub use store::BindingStore;
