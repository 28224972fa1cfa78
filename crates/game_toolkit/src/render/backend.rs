//! Backend abstraction for render primitives
//!
//! The overlay never talks to a graphics API directly. A host engine exposes
//! its scene objects through [`PrimitiveBackend`]: spawn an object from a
//! template, toggle it, give it a material and feed it geometry.

use crate::foundation::collections::PrimitiveHandle;
use crate::foundation::math::Vec3;
use crate::render::material::Material;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shape class of a render primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Single positioned dot
    Point,
    /// Polyline, open or looped
    Line,
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Line => write!(f, "line"),
        }
    }
}

/// Prefab-like description of a primitive the backend can instantiate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveTemplate {
    /// Name used for debugging
    pub name: String,
    /// Shape class of instances
    pub kind: PrimitiveKind,
    /// Dot diameter for points, stroke width for lines
    pub size: f32,
}

impl PrimitiveTemplate {
    /// Default dot template
    pub fn point() -> Self {
        Self {
            name: "debug_dot".to_string(),
            kind: PrimitiveKind::Point,
            size: 0.1,
        }
    }

    /// Default line template
    pub fn line() -> Self {
        Self {
            name: "debug_line".to_string(),
            kind: PrimitiveKind::Line,
            size: 0.02,
        }
    }

    /// Override the size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Host engine operations the visual debug overlay relies on
///
/// Instantiation cannot fail from the overlay's point of view; a backend that
/// can run out of resources must deal with it internally.
pub trait PrimitiveBackend {
    /// Create a new inactive primitive from a template
    fn instantiate(&mut self, template: &PrimitiveTemplate) -> PrimitiveHandle;

    /// Show or hide a primitive
    fn set_active(&mut self, handle: PrimitiveHandle, active: bool);

    /// Whether a primitive is currently shown
    fn is_active(&self, handle: PrimitiveHandle) -> bool;

    /// Assign the shared material a primitive renders with
    fn set_material(&mut self, handle: PrimitiveHandle, material: Arc<Material>);

    /// Move a point primitive
    fn set_position(&mut self, handle: PrimitiveHandle, position: Vec3);

    /// Replace the vertices of a line primitive
    fn set_polyline(&mut self, handle: PrimitiveHandle, points: &[Vec3], looped: bool);
}
