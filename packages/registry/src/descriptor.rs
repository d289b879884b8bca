use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Palette grouping for a component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentCategory {
    Basic,
    Layout,
    Form,
    Data,
}

/// Everything the editor needs to know about one component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Tag stored in `ComponentNode::type_name`.
    pub type_name: String,

    /// Human-readable palette label.
    pub display_name: String,

    pub category: ComponentCategory,

    /// Containers accept drops; leaves do not.
    pub accepts_children: bool,

    /// Props a freshly created instance starts with.
    #[serde(default)]
    pub default_props: Map<String, Value>,

    /// Styles a freshly created instance starts with.
    #[serde(default)]
    pub default_styles: Map<String, Value>,
}

impl ComponentDescriptor {
    pub fn new(
        type_name: impl Into<String>,
        display_name: impl Into<String>,
        category: ComponentCategory,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            display_name: display_name.into(),
            category,
            accepts_children: false,
            default_props: Map::new(),
            default_styles: Map::new(),
        }
    }

    pub fn container(mut self) -> Self {
        self.accepts_children = true;
        self
    }

    pub fn default_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.default_props.insert(key.into(), value);
        self
    }

    pub fn default_style(mut self, key: impl Into<String>, value: Value) -> Self {
        self.default_styles.insert(key.into(), value);
        self
    }
}
