use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Widget the property panel renders for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyControl {
    Text,
    TextArea,
    Number,
    Toggle,
    Select { options: Vec<String> },
    Color,
}

/// One editable prop of a component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyField {
    /// Key within `ComponentNode::props`.
    pub key: String,

    pub label: String,

    pub control: PropertyControl,

    #[serde(default)]
    pub required: bool,

    /// Value the panel shows when the prop is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl PropertyField {
    pub fn new(key: impl Into<String>, label: impl Into<String>, control: PropertyControl) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            control,
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

/// The property form for one component type, in display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertySchema {
    pub fields: Vec<PropertyField>,
}

impl PropertySchema {
    pub fn new(fields: Vec<PropertyField>) -> Self {
        Self { fields }
    }

    pub fn field(&self, key: &str) -> Option<&PropertyField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_control_serialization_is_tagged() {
        let control = PropertyControl::Select {
            options: vec!["primary".into(), "secondary".into()],
        };

        let value = serde_json::to_value(&control).unwrap();
        assert_eq!(value["kind"], "select");
        assert_eq!(value["options"][0], "primary");
    }

    #[test]
    fn test_field_lookup_by_key() {
        let schema = PropertySchema::new(vec![
            PropertyField::new("text", "Text", PropertyControl::Text)
                .required()
                .with_default(json!("Button")),
            PropertyField::new("disabled", "Disabled", PropertyControl::Toggle),
        ]);

        let field = schema.field("text").unwrap();
        assert!(field.required);
        assert_eq!(field.default, Some(json!("Button")));
        assert!(schema.field("ghost").is_none());
    }
}
