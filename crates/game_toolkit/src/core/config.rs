//! # Unified Configuration System
//!
//! All configuration structures live here. They are serializable so a whole
//! [`ApplicationConfig`] can be read from TOML or RON through the
//! [`Config`] trait.
//!
//! ## Configuration Categories
//!
//! - **Logging Config**: default log level
//! - **Visual Debug Settings**: primitive templates and the base material
//!   the overlay clones colored variants from

use serde::{Deserialize, Serialize};

use crate::render::backend::{PrimitiveKind, PrimitiveTemplate};
use crate::render::material::MaterialTemplate;

pub use crate::config::{Config, ConfigError};

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level; `RUST_LOG` overrides it
    pub log_level: String,
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Visual Debug Settings
///
/// Supplied once when the overlay is built and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualDebugSettings {
    /// Template for point primitives
    pub dot_template: PrimitiveTemplate,
    /// Template for line primitives
    pub line_template: PrimitiveTemplate,
    /// Base material that colored variants are cloned from
    pub solid_color_material: MaterialTemplate,
}

impl VisualDebugSettings {
    /// Set the point template
    pub fn with_dot_template(mut self, template: PrimitiveTemplate) -> Self {
        self.dot_template = template;
        self
    }

    /// Set the line template
    pub fn with_line_template(mut self, template: PrimitiveTemplate) -> Self {
        self.line_template = template;
        self
    }

    /// Set the base material
    pub fn with_material(mut self, material: MaterialTemplate) -> Self {
        self.solid_color_material = material;
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dot_template.kind != PrimitiveKind::Point {
            return Err(ConfigError::Invalid(format!(
                "dot template '{}' must be a point primitive",
                self.dot_template.name
            )));
        }
        if self.line_template.kind != PrimitiveKind::Line {
            return Err(ConfigError::Invalid(format!(
                "line template '{}' must be a line primitive",
                self.line_template.name
            )));
        }
        for template in [&self.dot_template, &self.line_template] {
            if !(template.size.is_finite() && template.size > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "template '{}' has invalid size {}",
                    template.name, template.size
                )));
            }
        }
        if self.solid_color_material.shader.is_empty() {
            return Err(ConfigError::Invalid("solid color material needs a shader".to_string()));
        }
        Ok(())
    }
}

impl Default for VisualDebugSettings {
    fn default() -> Self {
        Self {
            dot_template: PrimitiveTemplate::point(),
            line_template: PrimitiveTemplate::line(),
            solid_color_material: MaterialTemplate::default(),
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that applications load at start-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Visual debug overlay settings
    pub visual_debug: VisualDebugSettings,
}

impl ApplicationConfig {
    /// Create a new application configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visual debug settings
    pub fn with_visual_debug(mut self, settings: VisualDebugSettings) -> Self {
        self.visual_debug = settings;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.visual_debug.validate()
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_str, ConfigFormat};

    #[test]
    fn test_defaults_validate() {
        assert!(ApplicationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let toml = r#"
            [logging]
            log_level = "debug"

            [visual_debug.line_template]
            name = "thick_line"
            kind = "Line"
            size = 0.5
        "#;
        let config: ApplicationConfig = parse_str(toml, ConfigFormat::Toml).unwrap();

        assert_eq!(config.logging.log_level, "debug");
        assert_eq!(config.visual_debug.line_template.name, "thick_line");
        assert_eq!(config.visual_debug.dot_template, PrimitiveTemplate::point());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ron_settings() {
        let ron = r#"(
            visual_debug: (
                solid_color_material: (name: "overlay", shader: "flat"),
            ),
        )"#;
        let config: ApplicationConfig = parse_str(ron, ConfigFormat::Ron).unwrap();
        assert_eq!(config.visual_debug.solid_color_material, MaterialTemplate::new("overlay", "flat"));
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        let bad_kind = VisualDebugSettings::default().with_dot_template(PrimitiveTemplate::line());
        assert!(matches!(bad_kind.validate(), Err(ConfigError::Invalid(_))));

        let bad_size = VisualDebugSettings::default().with_line_template(PrimitiveTemplate::line().with_size(0.0));
        assert!(matches!(bad_size.validate(), Err(ConfigError::Invalid(_))));

        let bad_material = VisualDebugSettings::default().with_material(MaterialTemplate::new("m", ""));
        assert!(bad_material.validate().is_err());
    }
}
