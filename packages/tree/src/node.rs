use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The top-level ordered list of root nodes composing a page.
pub type Forest = Vec<ComponentNode>;

/// One element of the page's component tree: a widget instance plus its
/// configuration and children.
///
/// Child order is display order. Parentage is derived from tree position;
/// nodes never hold back-references, so the tree is acyclic by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Unique within a page's tree, immutable once created.
    pub id: String,

    /// Primitive tag selecting what this node renders as ("Button",
    /// "Container", "DataTable", ...).
    #[serde(rename = "type")]
    pub type_name: String,

    /// Component-specific configuration (text, bindings, links).
    #[serde(default)]
    pub props: Map<String, Value>,

    /// Presentation-only settings. Tree logic never reads these.
    #[serde(default)]
    pub styles: Map<String, Value>,

    /// Ordered children; empty for leaf component types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            props: Map::new(),
            styles: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: Value) -> Self {
        self.styles.insert(key.into(), value);
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<ComponentNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Persisted page layout: `{ "content": [...], "root": {} }`.
///
/// `root` carries page-level settings and is kept as an open map for
/// forward compatibility with stored documents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutData {
    #[serde(default)]
    pub content: Forest,

    #[serde(default)]
    pub root: Map<String, Value>,
}

impl LayoutData {
    pub fn new(content: Forest) -> Self {
        Self {
            content,
            root: Map::new(),
        }
    }
}
