//! # Document Handle
//!
//! A Document is one page's layout and its editing state.
//!
//! Documents can be:
//! - **Memory-backed**: Temporary, for testing or unsaved pages
//! - **File-backed**: Editing with JSON persistence to disk
//!
//! ## Lifecycle
//!
//! ```text
//! Load → Edit → Save
//!   ↓      ↓      ↓
//! JSON  Mutations JSON
//! ```
//!
//! Each applied mutation replaces the layout wholesale with the new one
//! produced by the pure tree operations; callers holding the previous
//! layout keep an unchanged value.

use std::path::{Path, PathBuf};

use pagecraft_tree::{Forest, IdGenerator, LayoutData};
use tracing::debug;

use crate::{EditorError, Mutation};

/// Editable page document
#[derive(Debug)]
pub struct Document {
    /// Path to the backing file (if any)
    pub path: Option<PathBuf>,

    /// Current version number (increments on each applied mutation)
    pub version: u64,

    /// Mints node ids for duplicate operations
    ids: IdGenerator,

    /// Backing storage strategy
    storage: DocumentStorage,
}

/// Storage backend for a document
#[derive(Debug)]
pub enum DocumentStorage {
    /// In-memory only (for testing, unsaved pages)
    Memory { layout: LayoutData },

    /// File-backed (saved pages)
    File { layout: LayoutData, dirty: bool },
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    /// New version number
    pub version: u64,

    /// Ids introduced by the mutation (insert/duplicate)
    pub created_ids: Vec<String>,
}

impl Document {
    /// Create a memory-backed document from a layout
    pub fn from_layout(layout: LayoutData) -> Self {
        Self {
            path: None,
            version: 0,
            ids: IdGenerator::new(),
            storage: DocumentStorage::Memory { layout },
        }
    }

    /// Load a document from a JSON layout file (file-backed)
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, EditorError> {
        let path = path.into();
        let source = std::fs::read_to_string(&path)?;
        let layout: LayoutData = serde_json::from_str(&source)?;
        debug!(path = %path.display(), "loaded document");

        Ok(Self {
            path: Some(path),
            version: 0,
            ids: IdGenerator::new(),
            storage: DocumentStorage::File {
                layout,
                dirty: false,
            },
        })
    }

    /// Swap the id generator (tests use a seeded one)
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn layout(&self) -> &LayoutData {
        match &self.storage {
            DocumentStorage::Memory { layout } => layout,
            DocumentStorage::File { layout, .. } => layout,
        }
    }

    /// The page's top-level component list
    pub fn content(&self) -> &Forest {
        &self.layout().content
    }

    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    /// Apply a mutation
    ///
    /// Validation failures leave the document untouched (same layout,
    /// same version) so the caller can surface the failed edit.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationOutcome, EditorError> {
        let applied = {
            let layout = match &self.storage {
                DocumentStorage::Memory { layout } => layout,
                DocumentStorage::File { layout, .. } => layout,
            };
            mutation.apply(layout, &mut self.ids)?
        };

        self.version += 1;
        self.install(applied.layout);
        debug!(
            mutation = mutation.name(),
            version = self.version,
            "applied mutation"
        );

        Ok(MutationOutcome {
            version: self.version,
            created_ids: applied.created_ids,
        })
    }

    /// Replace the layout wholesale (undo/redo and store sync)
    pub fn restore(&mut self, layout: LayoutData) {
        self.version += 1;
        self.install(layout);
    }

    fn install(&mut self, next: LayoutData) {
        match &mut self.storage {
            DocumentStorage::Memory { layout } => *layout = next,
            DocumentStorage::File { layout, dirty } => {
                *layout = next;
                *dirty = true;
            }
        }
    }

    /// Check if the document has unsaved changes
    pub fn is_dirty(&self) -> bool {
        match &self.storage {
            DocumentStorage::File { dirty, .. } => *dirty,
            DocumentStorage::Memory { .. } => false,
        }
    }

    /// Save the layout to disk (if file-backed)
    pub fn save(&mut self) -> Result<(), EditorError> {
        let path = self.path.clone().ok_or(EditorError::NotFileBacked)?;
        match &mut self.storage {
            DocumentStorage::File { layout, dirty } => {
                write_layout(&path, layout)?;
                *dirty = false;
                debug!(path = %path.display(), "saved document");
                Ok(())
            }
            DocumentStorage::Memory { .. } => Err(EditorError::NotFileBacked),
        }
    }

    /// Convert a memory-backed document to file-backed and save it
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<(), EditorError> {
        let path = path.into();
        let layout = self.layout().clone();
        write_layout(&path, &layout)?;
        self.path = Some(path);
        self.storage = DocumentStorage::File {
            layout,
            dirty: false,
        };
        Ok(())
    }
}

fn write_layout(path: &Path, layout: &LayoutData) -> Result<(), EditorError> {
    let json = serde_json::to_string_pretty(layout)?;
    std::fs::write(path, json)?;
    Ok(())
}
