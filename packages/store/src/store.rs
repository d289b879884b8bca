use std::path::Path;

use pagecraft_tree::{IdGenerator, LayoutData};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::page::Page;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Page not found: {0}")]
    PageNotFound(String),
}

/// All pages of one project, in display order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageStore {
    pages: Vec<Page>,

    #[serde(skip)]
    ids: IdGenerator,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page and return its id.
    pub fn create_page(&mut self, name: impl Into<String>, slug: impl Into<String>) -> String {
        let id = self.ids.new_id();
        self.pages.push(Page::new(id.clone(), name, slug));
        id
    }

    pub fn get(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    pub fn get_mut(&mut self, page_id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == page_id)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Replace a page's layout wholesale with an editor result.
    pub fn update_layout(&mut self, page_id: &str, layout: LayoutData) -> Result<(), StoreError> {
        let page = self
            .get_mut(page_id)
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))?;
        page.layout = layout;
        page.updated_at = chrono::Utc::now();
        Ok(())
    }

    /// Rename a page and/or change its slug.
    pub fn update_meta(
        &mut self,
        page_id: &str,
        name: Option<String>,
        slug: Option<String>,
    ) -> Result<(), StoreError> {
        let page = self
            .get_mut(page_id)
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))?;
        if let Some(name) = name {
            page.name = name;
        }
        if let Some(slug) = slug {
            page.slug = slug;
        }
        page.updated_at = chrono::Utc::now();
        Ok(())
    }

    pub fn remove_page(&mut self, page_id: &str) -> Result<Page, StoreError> {
        let pos = self
            .pages
            .iter()
            .position(|p| p.id == page_id)
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))?;
        Ok(self.pages.remove(pos))
    }

    /// Write the whole project to one JSON file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), pages = self.pages.len(), "saved project");
        Ok(())
    }

    /// Load a project file written by [`PageStore::save_to`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&source)?;
        info!(path = %path.display(), pages = store.pages.len(), "loaded project");
        Ok(store)
    }
}
