//! # Rendering seam
//!
//! The overlay drives a host engine through [`PrimitiveBackend`]. The crate
//! ships [`HeadlessBackend`], which records the scene in memory.

pub mod backend;
pub mod headless;
pub mod material;

pub use backend::{PrimitiveBackend, PrimitiveKind, PrimitiveTemplate};
pub use headless::{HeadlessBackend, PrimitiveSnapshot, PrimitiveState, SceneSnapshot};
pub use material::{Material, MaterialTemplate};
