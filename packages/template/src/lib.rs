//! # Pagecraft Templates
//!
//! Named section templates — canonical subtrees of primitives ("Hero",
//! "Pricing", "Navbar", ...) used to seed page structure from a single
//! drop.
//!
//! Stored templates carry readable placeholder ids. Expansion deep-clones
//! the stored subtree and mints a fresh id for every node, so dropping the
//! same template twice never collides with an earlier instance. An unknown
//! template name is `None`; callers fall back to creating a single
//! default-props primitive from the registry.

mod registry;
mod sections;

pub use registry::TemplateRegistry;
