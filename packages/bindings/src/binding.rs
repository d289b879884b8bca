use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::columns::ColumnOverride;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortRule {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRule {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationSettings {
    pub page_size: u32,
    pub page: u32,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_size: 25,
            page: 1,
        }
    }
}

/// How one component instance connects to a data table.
///
/// Looked up by `component_id`; the component tree never stores this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDataBinding {
    pub component_id: String,

    pub datasource: String,
    pub table: String,

    #[serde(default)]
    pub pagination: PaginationSettings,

    #[serde(default)]
    pub sort: Vec<SortRule>,

    #[serde(default)]
    pub filters: Vec<FilterRule>,

    /// Automatic refetch cadence; `None` means manual refresh only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,

    /// Per-column display tweaks, keyed by table field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub column_overrides: BTreeMap<String, ColumnOverride>,

    /// Renames from table field names to the keys the component expects.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_mappings: BTreeMap<String, String>,
}

impl ComponentDataBinding {
    pub fn new(
        component_id: impl Into<String>,
        datasource: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            component_id: component_id.into(),
            datasource: datasource.into(),
            table: table.into(),
            pagination: PaginationSettings::default(),
            sort: Vec::new(),
            filters: Vec::new(),
            refresh_interval_secs: None,
            column_overrides: BTreeMap::new(),
            field_mappings: BTreeMap::new(),
        }
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.push(SortRule {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, op: FilterOp, value: Value) -> Self {
        self.filters.push(FilterRule {
            field: field.into(),
            op,
            value,
        });
        self
    }

    pub fn with_column_override(
        mut self,
        field: impl Into<String>,
        column: ColumnOverride,
    ) -> Self {
        self.column_overrides.insert(field.into(), column);
        self
    }

    pub fn with_field_mapping(
        mut self,
        table_field: impl Into<String>,
        component_key: impl Into<String>,
    ) -> Self {
        self.field_mappings
            .insert(table_field.into(), component_key.into());
        self
    }

    /// The key the component sees for a table field, after mappings.
    pub fn mapped_field<'a>(&'a self, table_field: &'a str) -> &'a str {
        self.field_mappings
            .get(table_field)
            .map(String::as_str)
            .unwrap_or(table_field)
    }
}
