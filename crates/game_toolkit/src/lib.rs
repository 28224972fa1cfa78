//! # Game Toolkit
//!
//! Small building blocks shared by game projects.
//!
//! ## Features
//!
//! - **Keyed Databases**: id -> element lookup over RON/TOML authored lists
//! - **Service Registry**: explicit, composition-root replacement for singletons
//! - **Visual Debug Overlay**: pooled points, segments, triangles and circles
//!   grouped by identifier, drawn through a pluggable backend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use game_toolkit::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::default();
//!     logging::init_with_level(&config.logging.log_level);
//!
//!     let mut overlay = VisualDebugManager::new(HeadlessBackend::new(), config.visual_debug)?;
//!     overlay.show_circle("spawn", Circle::new(Point::new(0.0, 0.0), 2.0), DebugColor::Lime);
//!     overlay.hide_circles("spawn");
//!
//!     let services = ServiceRegistry::new().with(overlay);
//!     assert!(services.contains::<VisualDebugManager<HeadlessBackend>>());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core modules
pub mod core;
pub mod config;

pub mod foundation;
pub mod database;
pub mod debug;
pub mod render;

/// Common imports for toolkit users
pub mod prelude {
    pub use crate::{
        core::{ApplicationConfig, Config, ConfigError, ServiceRegistry, VisualDebugSettings},
        database::{Database, DatabaseElement, DatabaseError, DatabaseManager},
        debug::{Circle, DebugColor, LineSegment, Point, ShapeCategory, Triangle, VisualDebugManager},
        foundation::{
            logging,
            math::{Vec2, Vec3, Vec4},
        },
        render::{HeadlessBackend, MaterialTemplate, PrimitiveBackend, PrimitiveTemplate},
    };
}
