//! # Pagecraft Store
//!
//! Project-level page state: the ordered set of pages, each holding one
//! persisted layout, plus JSON persistence for the whole project.
//!
//! The store is the single writer for page layouts. UI flows read a
//! page's layout, run an editor operation, and hand the result back via
//! [`PageStore::update_layout`], which replaces the layout wholesale —
//! there is no partial in-place editing of stored state. Single-threaded
//! event dispatch keeps one read-modify-write cycle in flight at a time;
//! no locking is involved.

mod page;
mod store;

pub use page::Page;
pub use store::{PageStore, StoreError};
