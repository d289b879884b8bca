use std::collections::BTreeMap;

use pagecraft_tree::{ops, ComponentNode, IdGenerator};

use crate::sections;

/// Lookup table from template name to its canonical subtree.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, ComponentNode>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in landing-page sections.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("Hero", sections::hero());
        registry.register("Navbar", sections::navbar());
        registry.register("Pricing", sections::pricing());
        registry.register("Features", sections::features());
        registry.register("Footer", sections::footer());
        registry
    }

    /// Register (or replace) a named template.
    pub fn register(&mut self, name: impl Into<String>, template: ComponentNode) {
        self.templates.insert(name.into(), template);
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Expand a named template into a concrete subtree.
    ///
    /// Every node in the result — root and descendants — gets a freshly
    /// minted id, so expanding the same template twice never collides.
    /// Unknown names return `None`.
    pub fn expand(&self, name: &str, ids: &mut IdGenerator) -> Option<ComponentNode> {
        let mut node = self.templates.get(name)?.clone();
        ops::reassign_ids(&mut node, ids);
        Some(node)
    }
}
