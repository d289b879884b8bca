//! # Pagecraft Registry
//!
//! The component catalog: which primitive types exist, what a freshly
//! dropped instance looks like, and which property form each type gets.
//!
//! Adding a component type is a data registration — a descriptor plus a
//! property schema — not a new branch in a dispatch function. Palettes
//! iterate [`ComponentRegistry::descriptors`], property panels render
//! [`ComponentRegistry::schema`], and drops call
//! [`ComponentRegistry::create_node`].

mod catalog;
mod descriptor;
mod schema;

pub use catalog::ComponentRegistry;
pub use descriptor::{ComponentCategory, ComponentDescriptor};
pub use schema::{PropertyControl, PropertyField, PropertySchema};
