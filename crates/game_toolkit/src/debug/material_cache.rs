//! One shared material per debug color
//!
//! Materials are cloned from the solid-color template on first use and kept
//! for the lifetime of the cache.

use super::color::DebugColor;
use crate::render::material::{Material, MaterialTemplate};
use std::collections::HashMap;
use std::sync::Arc;

/// Lazily populated color -> material map
#[derive(Debug)]
pub struct ColorMaterialCache {
    template: MaterialTemplate,
    cache: HashMap<DebugColor, Arc<Material>>,
}

impl ColorMaterialCache {
    /// Create an empty cache cloning from `template`
    pub fn new(template: MaterialTemplate) -> Self {
        Self {
            template,
            cache: HashMap::new(),
        }
    }

    /// Shared material for `color`, created on first request
    pub fn material_for(&mut self, color: DebugColor) -> Arc<Material> {
        let template = &self.template;
        let material = self.cache.entry(color).or_insert_with(|| {
            log::debug!("Creating '{}' material variant for {}", template.name, color);
            Arc::new(
                Material::from_template(template, color.rgba())
                    .with_name(format!("{}_{}", template.name, color)),
            )
        });
        Arc::clone(material)
    }

    /// Get a cached material without creating it
    pub fn get_cached(&self, color: DebugColor) -> Option<Arc<Material>> {
        self.cache.get(&color).map(Arc::clone)
    }

    /// Check if a color already has a material
    pub fn is_cached(&self, color: DebugColor) -> bool {
        self.cache.contains_key(&color)
    }

    /// Get the number of cached materials
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
