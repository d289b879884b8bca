use std::collections::HashMap;

use pagecraft_tree::{collect_ids, ComponentNode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::binding::ComponentDataBinding;

/// All data bindings for one page, keyed by component id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingStore {
    bindings: HashMap<String, ComponentDataBinding>,
}

impl BindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the binding for its component.
    pub fn set(&mut self, binding: ComponentDataBinding) {
        self.bindings
            .insert(binding.component_id.clone(), binding);
    }

    pub fn get(&self, component_id: &str) -> Option<&ComponentDataBinding> {
        self.bindings.get(component_id)
    }

    pub fn get_mut(&mut self, component_id: &str) -> Option<&mut ComponentDataBinding> {
        self.bindings.get_mut(component_id)
    }

    pub fn remove(&mut self, component_id: &str) -> Option<ComponentDataBinding> {
        self.bindings.remove(component_id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDataBinding> {
        self.bindings.values()
    }

    /// Drop bindings whose component no longer exists in the tree.
    ///
    /// Called after removals (or any bulk tree replacement); returns the
    /// pruned component ids so callers can cancel in-flight fetches.
    pub fn prune_orphans(&mut self, forest: &[ComponentNode]) -> Vec<String> {
        let live: std::collections::HashSet<String> = collect_ids(forest).into_iter().collect();
        let orphaned: Vec<String> = self
            .bindings
            .keys()
            .filter(|id| !live.contains(*id))
            .cloned()
            .collect();

        for id in &orphaned {
            self.bindings.remove(id);
            debug!(component_id = %id, "pruned orphaned binding");
        }
        orphaned
    }

    /// Copy the binding of `source_id` (if any) for a duplicated
    /// component's fresh id. Returns whether a binding was copied.
    pub fn clone_for(&mut self, source_id: &str, new_id: &str) -> bool {
        let Some(source) = self.bindings.get(source_id) else {
            return false;
        };
        let mut copy = source.clone();
        copy.component_id = new_id.to_string();
        self.bindings.insert(new_id.to_string(), copy);
        true
    }
}
