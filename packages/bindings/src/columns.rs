use serde::{Deserialize, Serialize};

use crate::binding::ComponentDataBinding;

/// Display tweaks for one table column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// `Some(false)` hides the column; unset means visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    /// Display format hint ("date", "currency", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl ColumnOverride {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn hidden() -> Self {
        Self {
            visible: Some(false),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}

/// A column as the component should render it after overrides and field
/// mappings are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveColumn {
    /// Field name in the source table.
    pub source: String,

    /// Key the component addresses the value by.
    pub key: String,

    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// Merge a binding's per-column overrides over the table's field list.
///
/// Table field order is preserved, hidden columns are dropped, and
/// overrides for fields the table no longer has are ignored (a stale
/// override must not invent a column).
pub fn effective_columns(
    binding: &ComponentDataBinding,
    table_fields: &[String],
) -> Vec<EffectiveColumn> {
    table_fields
        .iter()
        .filter_map(|field| {
            let column = binding.column_overrides.get(field);
            if column.and_then(|c| c.visible) == Some(false) {
                return None;
            }
            let label = column
                .and_then(|c| c.label.clone())
                .unwrap_or_else(|| field.clone());
            Some(EffectiveColumn {
                source: field.clone(),
                key: binding.mapped_field(field).to_string(),
                label,
                format: column.and_then(|c| c.format.clone()),
                width: column.and_then(|c| c.width),
            })
        })
        .collect()
}
