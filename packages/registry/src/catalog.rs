use std::collections::BTreeMap;

use pagecraft_tree::{ComponentNode, IdGenerator};
use serde_json::json;

use crate::descriptor::{ComponentCategory, ComponentDescriptor};
use crate::schema::{PropertyControl, PropertyField, PropertySchema};

/// Lookup table from component type to descriptor and property schema.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    descriptors: BTreeMap<String, ComponentDescriptor>,
    schemas: BTreeMap<String, PropertySchema>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in primitives.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(
            ComponentDescriptor::new("Button", "Button", ComponentCategory::Basic)
                .default_prop("text", json!("Button"))
                .default_prop("variant", json!("primary")),
            PropertySchema::new(vec![
                PropertyField::new("text", "Label", PropertyControl::Text).required(),
                PropertyField::new(
                    "variant",
                    "Variant",
                    PropertyControl::Select {
                        options: vec!["primary".into(), "secondary".into(), "ghost".into()],
                    },
                )
                .with_default(json!("primary")),
                PropertyField::new("url", "Link URL", PropertyControl::Text),
            ]),
        );

        registry.register(
            ComponentDescriptor::new("Heading", "Heading", ComponentCategory::Basic)
                .default_prop("text", json!("Heading"))
                .default_prop("level", json!("h2")),
            PropertySchema::new(vec![
                PropertyField::new("text", "Text", PropertyControl::Text).required(),
                PropertyField::new(
                    "level",
                    "Level",
                    PropertyControl::Select {
                        options: vec![
                            "h1".into(),
                            "h2".into(),
                            "h3".into(),
                            "h4".into(),
                        ],
                    },
                )
                .with_default(json!("h2")),
            ]),
        );

        registry.register(
            ComponentDescriptor::new("Text", "Text", ComponentCategory::Basic)
                .default_prop("text", json!("Lorem ipsum dolor sit amet.")),
            PropertySchema::new(vec![PropertyField::new(
                "text",
                "Text",
                PropertyControl::TextArea,
            )
            .required()]),
        );

        registry.register(
            ComponentDescriptor::new("Image", "Image", ComponentCategory::Basic)
                .default_prop("src", json!(""))
                .default_prop("alt", json!("")),
            PropertySchema::new(vec![
                PropertyField::new("src", "Source URL", PropertyControl::Text).required(),
                PropertyField::new("alt", "Alt text", PropertyControl::Text),
            ]),
        );

        registry.register(
            ComponentDescriptor::new("Divider", "Divider", ComponentCategory::Basic),
            PropertySchema::default(),
        );

        registry.register(
            ComponentDescriptor::new("Container", "Container", ComponentCategory::Layout)
                .container()
                .default_prop("direction", json!("column"))
                .default_style("gap", json!("16px"))
                .default_style("padding", json!("16px")),
            PropertySchema::new(vec![
                PropertyField::new(
                    "direction",
                    "Direction",
                    PropertyControl::Select {
                        options: vec!["row".into(), "column".into()],
                    },
                )
                .with_default(json!("column")),
                PropertyField::new("background", "Background", PropertyControl::Color),
            ]),
        );

        registry.register(
            ComponentDescriptor::new("Form", "Form", ComponentCategory::Form)
                .container()
                .default_prop("submitLabel", json!("Submit")),
            PropertySchema::new(vec![
                PropertyField::new("submitLabel", "Submit label", PropertyControl::Text)
                    .with_default(json!("Submit")),
                PropertyField::new("action", "Action", PropertyControl::Text),
            ]),
        );

        registry.register(
            ComponentDescriptor::new("Input", "Input", ComponentCategory::Form)
                .default_prop("name", json!(""))
                .default_prop("label", json!("Label"))
                .default_prop("inputType", json!("text")),
            PropertySchema::new(vec![
                PropertyField::new("name", "Field name", PropertyControl::Text).required(),
                PropertyField::new("label", "Label", PropertyControl::Text),
                PropertyField::new("placeholder", "Placeholder", PropertyControl::Text),
                PropertyField::new(
                    "inputType",
                    "Input type",
                    PropertyControl::Select {
                        options: vec![
                            "text".into(),
                            "email".into(),
                            "number".into(),
                            "password".into(),
                        ],
                    },
                )
                .with_default(json!("text")),
                PropertyField::new("required", "Required", PropertyControl::Toggle),
            ]),
        );

        registry.register(
            ComponentDescriptor::new("DataTable", "Data table", ComponentCategory::Data)
                .default_prop("pageSize", json!(25))
                .default_prop("showSearch", json!(true)),
            PropertySchema::new(vec![
                PropertyField::new("datasourceId", "Datasource", PropertyControl::Text).required(),
                PropertyField::new("tableId", "Table", PropertyControl::Text).required(),
                PropertyField::new("pageSize", "Page size", PropertyControl::Number)
                    .with_default(json!(25)),
                PropertyField::new("showSearch", "Show search", PropertyControl::Toggle)
                    .with_default(json!(true)),
            ]),
        );

        registry.register(
            ComponentDescriptor::new("Chart", "Chart", ComponentCategory::Data)
                .default_prop("chartType", json!("bar")),
            PropertySchema::new(vec![
                PropertyField::new(
                    "chartType",
                    "Chart type",
                    PropertyControl::Select {
                        options: vec!["bar".into(), "line".into(), "pie".into()],
                    },
                )
                .with_default(json!("bar")),
                PropertyField::new("datasourceId", "Datasource", PropertyControl::Text).required(),
                PropertyField::new("tableId", "Table", PropertyControl::Text).required(),
            ]),
        );

        registry
    }

    /// Register (or replace) a component type.
    pub fn register(&mut self, descriptor: ComponentDescriptor, schema: PropertySchema) {
        let type_name = descriptor.type_name.clone();
        self.descriptors.insert(type_name.clone(), descriptor);
        self.schemas.insert(type_name, schema);
    }

    pub fn descriptor(&self, type_name: &str) -> Option<&ComponentDescriptor> {
        self.descriptors.get(type_name)
    }

    pub fn schema(&self, type_name: &str) -> Option<&PropertySchema> {
        self.schemas.get(type_name)
    }

    /// All registered descriptors, ordered by type name.
    pub fn descriptors(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.descriptors.values()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.descriptors.contains_key(type_name)
    }

    /// Build a default-props instance for a palette drop. Unknown types
    /// return `None`; the caller decides the fallback.
    pub fn create_node(&self, type_name: &str, ids: &mut IdGenerator) -> Option<ComponentNode> {
        let descriptor = self.descriptor(type_name)?;
        let mut node = ComponentNode::new(ids.new_id(), &descriptor.type_name);
        node.props = descriptor.default_props.clone();
        node.styles = descriptor.default_styles.clone();
        Some(node)
    }
}
