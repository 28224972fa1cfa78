//! Visual debug overlay
//!
//! Draws points, segments, triangles and circles under caller-chosen
//! identifiers so that everything drawn under one identifier can later be
//! hidden in one call. Each shape occupies one pooled primitive; hiding
//! returns the primitives to their pool instead of destroying them.
//!
//! ```ignore
//! let mut overlay = VisualDebugManager::new(HeadlessBackend::new(), settings)?;
//! overlay.show_circle("sensor", Circle::new(Point::new(0.0, 0.0), 3.0), DebugColor::Lime);
//! overlay.show_point("sensor", Point::new(0.0, 0.0), DebugColor::Red);
//! // next frame
//! overlay.hide_circles("sensor");
//! overlay.hide_points("sensor");
//! ```

use super::color::DebugColor;
use super::material_cache::ColorMaterialCache;
use super::pool::{PoolStats, PrimitivePool};
use super::registry::ShapeRegistry;
use super::shapes::{Circle, LineSegment, Point, Triangle};
use crate::config::ConfigError;
use crate::core::config::VisualDebugSettings;
use crate::foundation::collections::PrimitiveHandle;
use crate::render::backend::{PrimitiveBackend, PrimitiveKind};

/// Identifier used when a caller passes no identifier or an empty one
pub const DEFAULT_ID: &str = "default";

/// Independent groups of shapes; each has its own identifier namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeCategory {
    /// Shown with `show_point`
    Points,
    /// Shown with `show_line_segment`
    LineSegments,
    /// Shown with `show_triangle`
    Triangles,
    /// Shown with `show_circle`
    Circles,
}

impl ShapeCategory {
    /// Every category
    pub const ALL: [Self; 4] = [Self::Points, Self::LineSegments, Self::Triangles, Self::Circles];

    /// Primitive kind backing this category
    pub const fn primitive_kind(self) -> PrimitiveKind {
        match self {
            Self::Points => PrimitiveKind::Point,
            Self::LineSegments | Self::Triangles | Self::Circles => PrimitiveKind::Line,
        }
    }
}

/// Pool counters of a [`VisualDebugManager`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayStats {
    /// Point primitive pool
    pub dots: PoolStats,
    /// Line primitive pool, shared by segments, triangles and circles
    pub lines: PoolStats,
}

/// Replace a missing or empty identifier with [`DEFAULT_ID`]
pub fn normalize_id(id: Option<&str>) -> &str {
    match id {
        Some(id) if !id.is_empty() => id,
        _ => {
            log::warn!("Debug shape id is missing or empty, using '{}'", DEFAULT_ID);
            DEFAULT_ID
        }
    }
}

/// Pooled debug-shape renderer over a [`PrimitiveBackend`]
pub struct VisualDebugManager<B: PrimitiveBackend> {
    backend: B,
    settings: VisualDebugSettings,

    dot_pool: PrimitivePool,
    line_pool: PrimitivePool,
    materials: ColorMaterialCache,

    points: ShapeRegistry,
    line_segments: ShapeRegistry,
    triangles: ShapeRegistry,
    circles: ShapeRegistry,
}

impl<B: PrimitiveBackend> VisualDebugManager<B> {
    /// Create an overlay drawing into `backend`
    ///
    /// Fails only when the settings do not validate.
    pub fn new(backend: B, settings: VisualDebugSettings) -> Result<Self, ConfigError> {
        settings.validate()?;

        log::info!(
            "Visual debug overlay ready (dot '{}', line '{}', material '{}')",
            settings.dot_template.name,
            settings.line_template.name,
            settings.solid_color_material.name
        );

        Ok(Self {
            dot_pool: PrimitivePool::new(settings.dot_template.clone()),
            line_pool: PrimitivePool::new(settings.line_template.clone()),
            materials: ColorMaterialCache::new(settings.solid_color_material.clone()),
            points: ShapeRegistry::new(),
            line_segments: ShapeRegistry::new(),
            triangles: ShapeRegistry::new(),
            circles: ShapeRegistry::new(),
            backend,
            settings,
        })
    }

    // Show

    /// Show a point under `id`
    pub fn show_point<'a>(&mut self, id: impl Into<Option<&'a str>>, point: Point, color: DebugColor) {
        self.show(ShapeCategory::Points, id.into(), color, |backend, handle| {
            backend.set_position(handle, point.to_world());
        });
    }

    /// Show an open two-point line under `id`
    pub fn show_line_segment<'a>(
        &mut self,
        id: impl Into<Option<&'a str>>,
        segment: LineSegment,
        color: DebugColor,
    ) {
        self.show(ShapeCategory::LineSegments, id.into(), color, |backend, handle| {
            backend.set_polyline(handle, &segment.polyline(), false);
        });
    }

    /// Show a triangle outline under `id`, corners visited in the given order
    pub fn show_triangle<'a>(&mut self, id: impl Into<Option<&'a str>>, triangle: Triangle, color: DebugColor) {
        self.show(ShapeCategory::Triangles, id.into(), color, |backend, handle| {
            backend.set_polyline(handle, &triangle.polyline(), true);
        });
    }

    /// Show a circle outline under `id`
    pub fn show_circle<'a>(&mut self, id: impl Into<Option<&'a str>>, circle: Circle, color: DebugColor) {
        self.show(ShapeCategory::Circles, id.into(), color, |backend, handle| {
            backend.set_polyline(handle, &circle.outline(), true);
        });
    }

    fn show(
        &mut self,
        category: ShapeCategory,
        id: Option<&str>,
        color: DebugColor,
        configure: impl FnOnce(&mut B, PrimitiveHandle),
    ) {
        let id = normalize_id(id);
        let material = self.materials.material_for(color);

        let (registry, pool, backend) = self.parts_mut(category);
        let handle = pool.acquire(backend);
        backend.set_material(handle, material);
        configure(backend, handle);
        backend.set_active(handle, true);
        registry.insert(id, handle);

        log::trace!("Showing {:?} '{}' as {:?}", category, id, handle);
    }

    // Hide

    /// Hide every point drawn under `id`
    pub fn hide_points<'a>(&mut self, id: impl Into<Option<&'a str>>) {
        self.hide(ShapeCategory::Points, normalize_id(id.into()));
    }

    /// Hide every line segment drawn under `id`
    pub fn hide_line_segments<'a>(&mut self, id: impl Into<Option<&'a str>>) {
        self.hide(ShapeCategory::LineSegments, normalize_id(id.into()));
    }

    /// Hide every triangle drawn under `id`
    pub fn hide_triangles<'a>(&mut self, id: impl Into<Option<&'a str>>) {
        self.hide(ShapeCategory::Triangles, normalize_id(id.into()));
    }

    /// Hide every circle drawn under `id`
    pub fn hide_circles<'a>(&mut self, id: impl Into<Option<&'a str>>) {
        self.hide(ShapeCategory::Circles, normalize_id(id.into()));
    }

    /// Hide shapes of every category drawn under `id`
    pub fn hide_all<'a>(&mut self, id: impl Into<Option<&'a str>>) {
        let id = normalize_id(id.into());
        for category in ShapeCategory::ALL {
            self.hide(category, id);
        }
    }

    /// Hide everything currently shown
    pub fn clear(&mut self) {
        for category in ShapeCategory::ALL {
            let (registry, pool, backend) = self.parts_mut(category);
            for (_, handles) in registry.drain() {
                for handle in handles {
                    pool.release(backend, handle);
                }
            }
        }
    }

    fn hide(&mut self, category: ShapeCategory, id: &str) {
        let (registry, pool, backend) = self.parts_mut(category);
        if let Some(handles) = registry.take(id) {
            log::trace!("Hiding {} {:?} under '{}'", handles.len(), category, id);
            for handle in handles {
                pool.release(backend, handle);
            }
        }
    }

    // Inspection

    /// Identifiers with shapes shown in `category`
    pub fn ids(&self, category: ShapeCategory) -> Vec<&str> {
        self.registry(category).ids().collect()
    }

    /// Primitives shown under `id` in `category`
    pub fn active_handles(&self, category: ShapeCategory, id: &str) -> Option<&[PrimitiveHandle]> {
        self.registry(category).get(id)
    }

    /// Number of primitives shown across all categories
    pub fn active_count(&self) -> usize {
        ShapeCategory::ALL
            .iter()
            .map(|category| self.registry(*category).handle_count())
            .sum()
    }

    /// Whether `handle` is waiting in one of the pools
    pub fn is_pooled(&self, handle: PrimitiveHandle) -> bool {
        self.dot_pool.contains(handle) || self.line_pool.contains(handle)
    }

    /// Pool counters
    pub fn stats(&self) -> OverlayStats {
        OverlayStats {
            dots: self.dot_pool.stats(),
            lines: self.line_pool.stats(),
        }
    }

    /// Settings the overlay was built with
    pub fn settings(&self) -> &VisualDebugSettings {
        &self.settings
    }

    /// The backend primitives are drawn into
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn registry(&self, category: ShapeCategory) -> &ShapeRegistry {
        match category {
            ShapeCategory::Points => &self.points,
            ShapeCategory::LineSegments => &self.line_segments,
            ShapeCategory::Triangles => &self.triangles,
            ShapeCategory::Circles => &self.circles,
        }
    }

    fn parts_mut(&mut self, category: ShapeCategory) -> (&mut ShapeRegistry, &mut PrimitivePool, &mut B) {
        let registry = match category {
            ShapeCategory::Points => &mut self.points,
            ShapeCategory::LineSegments => &mut self.line_segments,
            ShapeCategory::Triangles => &mut self.triangles,
            ShapeCategory::Circles => &mut self.circles,
        };
        let pool = match category.primitive_kind() {
            PrimitiveKind::Point => &mut self.dot_pool,
            PrimitiveKind::Line => &mut self.line_pool,
        };
        (registry, pool, &mut self.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::pool::POOL_BATCH_SIZE;
    use crate::debug::shapes::CIRCLE_SEGMENTS;
    use crate::foundation::math::Vec3;
    use crate::render::HeadlessBackend;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn overlay() -> VisualDebugManager<HeadlessBackend> {
        VisualDebugManager::new(HeadlessBackend::new(), VisualDebugSettings::default()).unwrap()
    }

    /// Every spawned primitive is either active in one registry entry or
    /// inactive in one pool.
    fn assert_ownership(overlay: &VisualDebugManager<HeadlessBackend>) {
        let stats = overlay.stats();
        assert_eq!(overlay.backend().len(), stats.dots.spawned + stats.lines.spawned);
        assert_eq!(overlay.active_count(), stats.dots.in_use() + stats.lines.in_use());
        assert_eq!(overlay.backend().active_count(), overlay.active_count());

        for (handle, state) in overlay.backend().iter() {
            let registered = ShapeCategory::ALL
                .iter()
                .flat_map(|category| {
                    overlay
                        .ids(*category)
                        .into_iter()
                        .filter_map(move |id| overlay.active_handles(*category, id))
                })
                .filter(|handles| handles.contains(&handle))
                .count();
            if state.active {
                assert_eq!(registered, 1);
                assert!(!overlay.is_pooled(handle));
            } else {
                assert_eq!(registered, 0);
                assert!(overlay.is_pooled(handle));
            }
        }
    }

    fn state_of(overlay: &VisualDebugManager<HeadlessBackend>, handle: PrimitiveHandle) -> &crate::render::PrimitiveState {
        overlay.backend().primitive(handle).unwrap()
    }

    #[test]
    fn test_show_then_hide_point() {
        let mut overlay = overlay();
        overlay.show_point("target", Point::new(2.0, 3.0), DebugColor::Red);

        let handle = overlay.active_handles(ShapeCategory::Points, "target").unwrap()[0];
        let state = state_of(&overlay, handle);
        assert!(state.active);
        assert_eq!(state.kind, PrimitiveKind::Point);
        assert_eq!(state.position, Vec3::new(2.0, 3.0, 0.0));
        assert_eq!(state.material.as_ref().unwrap().color, DebugColor::Red.rgba());

        overlay.hide_points("target");
        assert!(overlay.active_handles(ShapeCategory::Points, "target").is_none());
        assert!(!overlay.backend().is_active(handle));
        assert!(overlay.is_pooled(handle));
        assert_ownership(&overlay);
    }

    #[test]
    fn test_repeated_show_accumulates_under_one_id() {
        let mut overlay = overlay();
        let segment = LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        overlay.show_line_segment("path", segment, DebugColor::Blue);
        overlay.show_line_segment("path", segment, DebugColor::Yellow);

        let handles = overlay.active_handles(ShapeCategory::LineSegments, "path").unwrap().to_vec();
        assert_eq!(handles.len(), 2);
        assert_ne!(handles[0], handles[1]);
        assert_ownership(&overlay);

        overlay.hide_line_segments("path");
        assert!(handles.iter().all(|h| !overlay.backend().is_active(*h)));
        assert_eq!(overlay.active_count(), 0);
        assert_ownership(&overlay);
    }

    #[test]
    fn test_segment_is_open_polyline() {
        let mut overlay = overlay();
        overlay.show_line_segment(
            "seg",
            LineSegment::new(Point::new(-1.0, 0.5), Point::new(4.0, 2.0)),
            DebugColor::Gray,
        );

        let handle = overlay.active_handles(ShapeCategory::LineSegments, "seg").unwrap()[0];
        let state = state_of(&overlay, handle);
        assert!(!state.looped);
        assert_eq!(state.points, vec![Vec3::new(-1.0, 0.5, 0.0), Vec3::new(4.0, 2.0, 0.0)]);
    }

    #[test]
    fn test_triangle_winding_and_loop() {
        let mut overlay = overlay();
        let (a, b, c) = (Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 3.0));
        overlay.show_triangle("tri", Triangle::new(a, b, c), DebugColor::Purple);

        let handle = overlay.active_handles(ShapeCategory::Triangles, "tri").unwrap()[0];
        let state = state_of(&overlay, handle);
        assert!(state.looped);
        assert_eq!(state.points, vec![a.to_world(), b.to_world(), c.to_world()]);
    }

    #[test]
    fn test_unit_circle_has_32_points_on_radius() {
        let mut overlay = overlay();
        overlay.show_circle("ring", Circle::new(Point::new(0.0, 0.0), 1.0), DebugColor::Red);

        let handle = overlay.active_handles(ShapeCategory::Circles, "ring").unwrap()[0];
        let state = state_of(&overlay, handle);
        assert_eq!(state.points.len(), CIRCLE_SEGMENTS);
        assert_eq!(state.points.len(), 32);
        assert!(state.looped);
        assert_relative_eq!(state.points[0], Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
        for point in &state.points {
            assert_relative_eq!(point.norm(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_empty_and_missing_ids_share_default() {
        let mut overlay = overlay();
        let p = Point::new(1.0, 1.0);
        overlay.show_point("", p, DebugColor::Blue);
        overlay.show_point(None, p, DebugColor::Blue);

        assert_eq!(overlay.ids(ShapeCategory::Points), vec![DEFAULT_ID]);
        assert_eq!(overlay.active_handles(ShapeCategory::Points, DEFAULT_ID).unwrap().len(), 2);

        overlay.hide_points(None);
        assert!(overlay.active_handles(ShapeCategory::Points, DEFAULT_ID).is_none());

        overlay.show_point(None, p, DebugColor::Blue);
        overlay.hide_points("");
        assert_eq!(overlay.active_count(), 0);
        assert_ownership(&overlay);
    }

    #[test]
    fn test_hide_unknown_id_is_noop() {
        let mut overlay = overlay();
        overlay.show_circle("kept", Circle::new(Point::new(0.0, 0.0), 2.0), DebugColor::Teal);

        overlay.hide_circles("never-shown");
        overlay.hide_points("kept");

        assert_eq!(overlay.active_count(), 1);
        assert_ownership(&overlay);
    }

    #[test]
    fn test_categories_are_independent() {
        let mut overlay = overlay();
        let origin = Point::new(0.0, 0.0);
        overlay.show_triangle("shared", Triangle::new(origin, Point::new(1.0, 0.0), Point::new(0.0, 1.0)), DebugColor::Lime);
        overlay.show_circle("shared", Circle::new(origin, 1.0), DebugColor::Lime);

        overlay.hide_triangles("shared");

        assert!(overlay.active_handles(ShapeCategory::Triangles, "shared").is_none());
        assert_eq!(overlay.active_handles(ShapeCategory::Circles, "shared").unwrap().len(), 1);
        assert_ownership(&overlay);
    }

    #[test]
    fn test_triangles_and_circles_share_line_pool() {
        let mut overlay = overlay();
        let origin = Point::new(0.0, 0.0);
        overlay.show_triangle("t", Triangle::new(origin, Point::new(1.0, 0.0), Point::new(0.0, 1.0)), DebugColor::White);
        let triangle_handle = overlay.active_handles(ShapeCategory::Triangles, "t").unwrap()[0];
        overlay.hide_triangles("t");

        overlay.show_circle("c", Circle::new(origin, 1.0), DebugColor::White);
        let circle_handle = overlay.active_handles(ShapeCategory::Circles, "c").unwrap()[0];

        assert_eq!(triangle_handle, circle_handle);
        assert_eq!(overlay.stats().lines.spawned, POOL_BATCH_SIZE);
        assert_eq!(overlay.stats().dots.spawned, 0);
    }

    #[test]
    fn test_recycled_primitive_gets_fresh_geometry_and_material() {
        let mut overlay = overlay();
        overlay.show_circle("c", Circle::new(Point::new(0.0, 0.0), 1.0), DebugColor::Red);
        overlay.hide_circles("c");
        overlay.show_line_segment("s", LineSegment::new(Point::new(0.0, 0.0), Point::new(5.0, 0.0)), DebugColor::Navy);

        let handle = overlay.active_handles(ShapeCategory::LineSegments, "s").unwrap()[0];
        let state = state_of(&overlay, handle);
        assert_eq!(state.points.len(), 2);
        assert!(!state.looped);
        assert_eq!(state.material.as_ref().unwrap().color, DebugColor::Navy.rgba());
    }

    #[test]
    fn test_same_color_shares_material_instance() {
        let mut overlay = overlay();
        overlay.show_point("a", Point::new(0.0, 0.0), DebugColor::Maroon);
        overlay.show_point("b", Point::new(1.0, 0.0), DebugColor::Maroon);

        let a = overlay.active_handles(ShapeCategory::Points, "a").unwrap()[0];
        let b = overlay.active_handles(ShapeCategory::Points, "b").unwrap()[0];
        let material_a = state_of(&overlay, a).material.clone().unwrap();
        let material_b = state_of(&overlay, b).material.clone().unwrap();
        assert!(Arc::ptr_eq(&material_a, &material_b));
    }

    #[test]
    fn test_pool_grows_in_batches() {
        let mut overlay = overlay();
        for i in 0..=POOL_BATCH_SIZE {
            overlay.show_point("many", Point::new(i as f32, 0.0), DebugColor::Silver);
        }
        assert_eq!(overlay.stats().dots.spawned, POOL_BATCH_SIZE * 2);
        assert_eq!(overlay.stats().dots.available, POOL_BATCH_SIZE - 1);

        overlay.hide_points("many");
        for i in 0..=POOL_BATCH_SIZE {
            overlay.show_point("again", Point::new(i as f32, 0.0), DebugColor::Silver);
        }
        assert_eq!(overlay.stats().dots.spawned, POOL_BATCH_SIZE * 2);
        assert_ownership(&overlay);
    }

    #[test]
    fn test_hide_all_and_clear() {
        let mut overlay = overlay();
        let origin = Point::new(0.0, 0.0);
        overlay.show_point("x", origin, DebugColor::Aqua);
        overlay.show_circle("x", Circle::new(origin, 1.0), DebugColor::Aqua);
        overlay.show_line_segment("y", LineSegment::new(origin, Point::new(1.0, 0.0)), DebugColor::Fuchsia);

        overlay.hide_all("x");
        assert_eq!(overlay.active_count(), 1);
        assert_ownership(&overlay);

        overlay.clear();
        assert_eq!(overlay.active_count(), 0);
        assert_eq!(overlay.backend().active_count(), 0);
        assert_ownership(&overlay);
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let mut settings = VisualDebugSettings::default();
        std::mem::swap(&mut settings.dot_template, &mut settings.line_template);

        let result = VisualDebugManager::new(HeadlessBackend::new(), settings);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
