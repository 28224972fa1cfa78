//! Math utilities and types
//!
//! Thin aliases over nalgebra used by the overlay geometry and the backends.

pub use nalgebra::{Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type, also used for RGBA colors
pub type Vec4 = Vector4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;
}

/// Math utility functions
pub mod utils {
    use super::{Vec2, Vec3};

    /// Lift a planar position onto the z = 0 plane
    pub fn lift(point: Vec2) -> Vec3 {
        Vec3::new(point.x, point.y, 0.0)
    }

    /// Point on a circle of `radius` around `center` at `angle` radians
    pub fn point_on_circle(center: Vec2, radius: f32, angle: f32) -> Vec2 {
        Vec2::new(
            radius.mul_add(angle.cos(), center.x),
            radius.mul_add(angle.sin(), center.y),
        )
    }
}
