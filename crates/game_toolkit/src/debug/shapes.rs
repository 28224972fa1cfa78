//! Planar shapes accepted by the visual debug overlay
//!
//! Shapes live in the XY plane. Their outlines are produced as 3D vertices
//! with z = 0 so they can be handed straight to a line primitive.

use crate::foundation::math::{constants::TAU, utils, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Number of vertices used to approximate a circle outline
pub const CIRCLE_SEGMENTS: usize = 32;

/// A position in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Planar coordinates
    pub position: Vec2,
}

impl Point {
    /// Create a point from coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { position: Vec2::new(x, y) }
    }

    /// Position on the z = 0 plane
    pub fn to_world(self) -> Vec3 {
        utils::lift(self.position)
    }
}

impl From<Vec2> for Point {
    fn from(position: Vec2) -> Self {
        Self { position }
    }
}

/// Straight segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Start point
    pub a: Point,
    /// End point
    pub b: Point,
}

impl LineSegment {
    /// Create a segment
    pub fn new(a: impl Into<Point>, b: impl Into<Point>) -> Self {
        Self { a: a.into(), b: b.into() }
    }

    /// Open polyline through both endpoints
    pub fn polyline(&self) -> [Vec3; 2] {
        [self.a.to_world(), self.b.to_world()]
    }
}

/// Triangle given by its three corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First corner
    pub a: Point,
    /// Second corner
    pub b: Point,
    /// Third corner
    pub c: Point,
}

impl Triangle {
    /// Create a triangle; winding follows argument order
    pub fn new(a: impl Into<Point>, b: impl Into<Point>, c: impl Into<Point>) -> Self {
        Self { a: a.into(), b: b.into(), c: c.into() }
    }

    /// Corners in the order given, to be drawn as a closed loop
    pub fn polyline(&self) -> [Vec3; 3] {
        [self.a.to_world(), self.b.to_world(), self.c.to_world()]
    }
}

/// Circle given by center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point
    pub center: Point,
    /// Radius
    pub radius: f32,
}

impl Circle {
    /// Create a circle
    pub fn new(center: impl Into<Point>, radius: f32) -> Self {
        Self { center: center.into(), radius }
    }

    /// Closed-loop approximation with `CIRCLE_SEGMENTS` vertices
    pub fn outline(&self) -> Vec<Vec3> {
        self.outline_with(CIRCLE_SEGMENTS)
    }

    /// Closed-loop approximation with `segments` vertices, starting at angle 0
    pub fn outline_with(&self, segments: usize) -> Vec<Vec3> {
        let step = TAU / segments as f32;
        (0..segments)
            .map(|i| {
                let angle = i as f32 * step;
                utils::lift(utils::point_on_circle(self.center.position, self.radius, angle))
            })
            .collect()
    }
}
