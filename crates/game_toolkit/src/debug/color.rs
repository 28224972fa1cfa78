//! Named debug colors

use crate::foundation::math::Vec4;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sixteen basic web colors available to debug drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebugColor {
    /// #00FFFF
    Aqua,
    /// #000000
    Black,
    /// #0000FF
    Blue,
    /// #FF00FF
    Fuchsia,
    /// #808080
    Gray,
    /// #008000
    Green,
    /// #00FF00
    Lime,
    /// #800000
    Maroon,
    /// #000080
    Navy,
    /// #808000
    Olive,
    /// #800080
    Purple,
    /// #FF0000
    Red,
    /// #C0C0C0
    Silver,
    /// #008080
    Teal,
    /// #FFFFFF
    White,
    /// #FFFF00
    Yellow,
}

impl DebugColor {
    /// Every color, in declaration order
    pub const ALL: [Self; 16] = [
        Self::Aqua,
        Self::Black,
        Self::Blue,
        Self::Fuchsia,
        Self::Gray,
        Self::Green,
        Self::Lime,
        Self::Maroon,
        Self::Navy,
        Self::Olive,
        Self::Purple,
        Self::Red,
        Self::Silver,
        Self::Teal,
        Self::White,
        Self::Yellow,
    ];

    /// Opaque RGBA value of this color
    pub fn rgba(self) -> Vec4 {
        let (r, g, b) = match self {
            Self::Black => (0.0, 0.0, 0.0),
            Self::Gray => (0.5, 0.5, 0.5),
            Self::Silver => (0.75, 0.75, 0.75),
            Self::White => (1.0, 1.0, 1.0),

            Self::Red => (1.0, 0.0, 0.0),
            Self::Lime => (0.0, 1.0, 0.0),
            Self::Blue => (0.0, 0.0, 1.0),

            Self::Maroon => (0.5, 0.0, 0.0),
            Self::Green => (0.0, 0.5, 0.0),
            Self::Navy => (0.0, 0.0, 0.5),

            Self::Aqua => (0.0, 1.0, 1.0),
            Self::Fuchsia => (1.0, 0.0, 1.0),
            Self::Yellow => (1.0, 1.0, 0.0),

            Self::Teal => (0.0, 0.5, 0.5),
            Self::Purple => (0.5, 0.0, 0.5),
            Self::Olive => (0.5, 0.5, 0.0),
        };
        Vec4::new(r, g, b, 1.0)
    }

    /// Lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aqua => "aqua",
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Fuchsia => "fuchsia",
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Lime => "lime",
            Self::Maroon => "maroon",
            Self::Navy => "navy",
            Self::Olive => "olive",
            Self::Purple => "purple",
            Self::Red => "red",
            Self::Silver => "silver",
            Self::Teal => "teal",
            Self::White => "white",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for DebugColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name matches none of the sixteen colors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown debug color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for DebugColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// RGBA for a color name; unknown names are fully transparent
pub fn rgba_for_name(name: &str) -> Vec4 {
    name.parse::<DebugColor>().map_or_else(|_| Vec4::zeros(), DebugColor::rgba)
}
