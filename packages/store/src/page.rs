use chrono::{DateTime, Utc};
use pagecraft_tree::LayoutData;
use serde::{Deserialize, Serialize};

/// One page of a project: identity, slug, and its persisted layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,

    pub name: String,

    /// URL path segment the published page is served under.
    pub slug: String,

    pub layout: LayoutData,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            layout: LayoutData::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
