//! Debug module for visualization tools
//!
//! Based on Game Engine Architecture 3rd Edition, Chapter 10.2:
//! "Debug Drawing Facilities"

pub mod color;
pub mod material_cache;
pub mod pool;
pub mod registry;
pub mod shapes;
pub mod visual_debug;

pub use color::{rgba_for_name, DebugColor, UnknownColor};
pub use material_cache::ColorMaterialCache;
pub use pool::{PoolStats, PrimitivePool, POOL_BATCH_SIZE};
pub use registry::ShapeRegistry;
pub use shapes::{Circle, LineSegment, Point, Triangle, CIRCLE_SEGMENTS};
pub use visual_debug::{normalize_id, OverlayStats, ShapeCategory, VisualDebugManager, DEFAULT_ID};
