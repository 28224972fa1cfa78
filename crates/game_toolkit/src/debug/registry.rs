//! Identifier -> active primitives bookkeeping

use crate::foundation::collections::PrimitiveHandle;
use std::collections::HashMap;

/// Primitives currently shown, grouped by caller identifier
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    entries: HashMap<String, Vec<PrimitiveHandle>>,
}

impl ShapeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `handle` under `id`, creating the entry on first use
    pub fn insert(&mut self, id: &str, handle: PrimitiveHandle) {
        match self.entries.get_mut(id) {
            Some(handles) => handles.push(handle),
            None => {
                self.entries.insert(id.to_string(), vec![handle]);
            }
        }
    }

    /// Remove the entry for `id` and hand over its primitives
    pub fn take(&mut self, id: &str) -> Option<Vec<PrimitiveHandle>> {
        self.entries.remove(id)
    }

    /// Remove every entry
    pub fn drain(&mut self) -> impl Iterator<Item = (String, Vec<PrimitiveHandle>)> + '_ {
        self.entries.drain()
    }

    /// Primitives registered under `id`
    pub fn get(&self, id: &str) -> Option<&[PrimitiveHandle]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Whether `id` has an entry
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered identifiers, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total primitives across all entries
    pub fn handle_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether `handle` appears in any entry
    pub fn contains_handle(&self, handle: PrimitiveHandle) -> bool {
        self.entries.values().any(|handles| handles.contains(&handle))
    }
}
