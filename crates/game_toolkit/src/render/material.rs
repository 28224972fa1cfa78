//! Material templates and colored material instances

use crate::foundation::math::Vec4;
use serde::{Deserialize, Serialize};

/// Source material that colored variants are cloned from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialTemplate {
    /// Name used for debugging and derived instance names
    pub name: String,
    /// Shader the host engine should render this material with
    pub shader: String,
}

impl MaterialTemplate {
    /// Create a new material template
    pub fn new(name: impl Into<String>, shader: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader: shader.into(),
        }
    }
}

impl Default for MaterialTemplate {
    fn default() -> Self {
        Self::new("solid_color", "unlit")
    }
}

/// Material instance with a fixed color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Optional name for debugging
    pub name: String,
    /// Shader inherited from the template
    pub shader: String,
    /// RGBA color
    pub color: Vec4,
}

impl Material {
    /// Clone `template` and tint it with `color`
    pub fn from_template(template: &MaterialTemplate, color: Vec4) -> Self {
        Self {
            name: template.name.clone(),
            shader: template.shader.clone(),
            color,
        }
    }

    /// Set the material name for debugging
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
