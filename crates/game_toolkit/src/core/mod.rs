//! # Core Module
//!
//! Shared abstractions used by every subsystem:
//!
//! - **Config**: Unified configuration for logging and the visual debug overlay
//! - **Services**: Explicit, composition-root service registry

pub mod config;
pub mod services;

// Re-export commonly used config types
pub use config::{
    ApplicationConfig,
    LoggingConfig,
    VisualDebugSettings,
    Config,
    ConfigError,
};
pub use services::ServiceRegistry;
