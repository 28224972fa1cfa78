//! In-memory scene used when no graphics engine is attached
//!
//! Keeps every instantiated primitive in a slot map so tests and tools can
//! inspect exactly what a real backend would have been asked to draw.

use super::backend::{PrimitiveBackend, PrimitiveKind, PrimitiveTemplate};
use super::material::Material;
use crate::foundation::collections::{HandleMap, PrimitiveHandle};
use crate::foundation::math::{Vec3, Vec4};
use serde::Serialize;
use std::sync::Arc;

/// State of one primitive held by [`HeadlessBackend`]
#[derive(Debug, Clone)]
pub struct PrimitiveState {
    /// Template the primitive was created from
    pub template: String,
    /// Shape class
    pub kind: PrimitiveKind,
    /// Size copied from the template
    pub size: f32,
    /// Visibility flag
    pub active: bool,
    /// Assigned material, if any
    pub material: Option<Arc<Material>>,
    /// Position for point primitives
    pub position: Vec3,
    /// Vertices for line primitives
    pub points: Vec<Vec3>,
    /// Whether the last vertex connects back to the first
    pub looped: bool,
}

/// Serializable view of a visible primitive
#[derive(Debug, Clone, Serialize)]
pub struct PrimitiveSnapshot {
    /// Shape class
    pub kind: PrimitiveKind,
    /// Material name, empty when unassigned
    pub material: String,
    /// RGBA color of the material
    pub color: Vec4,
    /// Position for points
    pub position: Vec3,
    /// Vertices for lines
    pub points: Vec<Vec3>,
    /// Closed polyline flag
    pub looped: bool,
}

/// Everything currently visible in a [`HeadlessBackend`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct SceneSnapshot {
    /// Visible primitives
    pub primitives: Vec<PrimitiveSnapshot>,
    /// Number of instantiated primitives, visible or not
    pub instantiated: usize,
}

/// Backend that records primitive state without rendering anything
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    primitives: HandleMap<PrimitiveState>,
}

impl HeadlessBackend {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a primitive
    pub fn primitive(&self, handle: PrimitiveHandle) -> Option<&PrimitiveState> {
        self.primitives.get(handle)
    }

    /// Number of primitives ever instantiated
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether nothing has been instantiated
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Number of visible primitives
    pub fn active_count(&self) -> usize {
        self.primitives.values().filter(|state| state.active).count()
    }

    /// Iterate over all primitives
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveHandle, &PrimitiveState)> {
        self.primitives.iter()
    }

    /// Capture the visible part of the scene
    pub fn snapshot(&self) -> SceneSnapshot {
        let primitives = self
            .primitives
            .values()
            .filter(|state| state.active)
            .map(|state| {
                let (material, color) = state
                    .material
                    .as_ref()
                    .map_or_else(|| (String::new(), Vec4::zeros()), |m| (m.name.clone(), m.color));
                PrimitiveSnapshot {
                    kind: state.kind,
                    material,
                    color,
                    position: state.position,
                    points: state.points.clone(),
                    looped: state.looped,
                }
            })
            .collect();

        SceneSnapshot {
            primitives,
            instantiated: self.primitives.len(),
        }
    }

    fn state_mut(&mut self, handle: PrimitiveHandle) -> Option<&mut PrimitiveState> {
        let state = self.primitives.get_mut(handle);
        if state.is_none() {
            log::warn!("Unknown primitive handle {:?}", handle);
        }
        state
    }
}

impl PrimitiveBackend for HeadlessBackend {
    fn instantiate(&mut self, template: &PrimitiveTemplate) -> PrimitiveHandle {
        let handle = self.primitives.insert(PrimitiveState {
            template: template.name.clone(),
            kind: template.kind,
            size: template.size,
            active: true,
            material: None,
            position: Vec3::zeros(),
            points: Vec::new(),
            looped: false,
        });
        log::trace!("Instantiated {} primitive {:?} from '{}'", template.kind, handle, template.name);
        handle
    }

    fn set_active(&mut self, handle: PrimitiveHandle, active: bool) {
        if let Some(state) = self.state_mut(handle) {
            state.active = active;
        }
    }

    fn is_active(&self, handle: PrimitiveHandle) -> bool {
        self.primitives.get(handle).is_some_and(|state| state.active)
    }

    fn set_material(&mut self, handle: PrimitiveHandle, material: Arc<Material>) {
        if let Some(state) = self.state_mut(handle) {
            state.material = Some(material);
        }
    }

    fn set_position(&mut self, handle: PrimitiveHandle, position: Vec3) {
        if let Some(state) = self.state_mut(handle) {
            state.position = position;
        }
    }

    fn set_polyline(&mut self, handle: PrimitiveHandle, points: &[Vec3], looped: bool) {
        if let Some(state) = self.state_mut(handle) {
            state.points.clear();
            state.points.extend_from_slice(points);
            state.looped = looped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instantiate_and_toggle() {
        let mut backend = HeadlessBackend::new();
        let handle = backend.instantiate(&PrimitiveTemplate::point());
        assert!(backend.is_active(handle));

        backend.set_active(handle, false);
        assert!(!backend.is_active(handle));
        assert_eq!(backend.len(), 1);
        assert_eq!(backend.active_count(), 0);
    }

    #[test]
    fn test_snapshot_only_lists_visible_primitives() {
        let mut backend = HeadlessBackend::new();
        let shown = backend.instantiate(&PrimitiveTemplate::line());
        let hidden = backend.instantiate(&PrimitiveTemplate::line());
        backend.set_polyline(shown, &[Vec3::zeros(), Vec3::x()], false);
        backend.set_active(hidden, false);

        let snapshot = backend.snapshot();
        assert_eq!(snapshot.instantiated, 2);
        assert_eq!(snapshot.primitives.len(), 1);
        assert_eq!(snapshot.primitives[0].points.len(), 2);
        assert!(snapshot.primitives[0].material.is_empty());
    }

    #[test]
    fn test_set_polyline_replaces_previous_points() {
        let mut backend = HeadlessBackend::new();
        let handle = backend.instantiate(&PrimitiveTemplate::line());
        backend.set_polyline(handle, &[Vec3::zeros(), Vec3::x(), Vec3::y()], true);
        backend.set_polyline(handle, &[Vec3::zeros(), Vec3::y()], false);

        let state = backend.primitive(handle).unwrap();
        assert_eq!(state.points, vec![Vec3::zeros(), Vec3::y()]);
        assert!(!state.looped);
    }
}
