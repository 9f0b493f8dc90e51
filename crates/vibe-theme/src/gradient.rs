//! Background pattern gradients.
//!
//! A [`Gradient`] is typed data, not a string: a shape from the fixed
//! [`GRADIENT_SHAPES`] table plus three translucent palette stops. It only
//! becomes CSS through [`Display`](std::fmt::Display), so every byte it
//! contributes to a stylesheet comes from numbers and hex digits.

use std::fmt;

use vibe_color::Color;

use crate::palette::Palette;
use crate::seed::pick_index;

/// Stop opacities for primary, secondary and accent, layered over the page
/// background.
const STOP_ALPHA: [f32; 3] = [0.55, 0.35, 0.25];

/// The shape of a background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "kebab-case"))]
pub enum GradientShape {
    /// `linear-gradient` at an angle in degrees.
    Linear { angle: u16 },
    /// `radial-gradient` centred at a CSS position keyword pair.
    Radial { at: &'static str },
    /// `conic-gradient` starting at an angle in degrees.
    Conic { from: u16 },
}

/// Every shape a theme can draw, indexed by `(seed / 19) % len`.
pub const GRADIENT_SHAPES: &[GradientShape] = &[
    GradientShape::Linear { angle: 135 },
    GradientShape::Linear { angle: 45 },
    GradientShape::Linear { angle: 160 },
    GradientShape::Linear { angle: 210 },
    GradientShape::Radial { at: "top left" },
    GradientShape::Radial { at: "center" },
    GradientShape::Radial { at: "bottom right" },
    GradientShape::Conic { from: 200 },
];

/// A background gradient over the palette colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub shape: GradientShape,
    pub stops: [Color; 3],
}

impl Gradient {
    /// Pick the shape for `seed` and build stops from `palette`.
    #[must_use]
    pub fn for_seed(seed: u32, palette: &Palette) -> Self {
        let shape = GRADIENT_SHAPES[pick_index(seed, 19, GRADIENT_SHAPES.len())];
        Self::new(shape, palette)
    }

    /// Build a gradient of the given shape from `palette`.
    #[must_use]
    pub fn new(shape: GradientShape, palette: &Palette) -> Self {
        let stops = [
            palette.primary.with_alpha(STOP_ALPHA[0]),
            palette.secondary.with_alpha(STOP_ALPHA[1]),
            palette.accent.with_alpha(STOP_ALPHA[2]),
        ];
        Self { shape, stops }
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.stops;
        match self.shape {
            GradientShape::Linear { angle } => {
                write!(f, "linear-gradient({angle}deg, {a} 0%, {b} 50%, {c} 100%)")
            }
            GradientShape::Radial { at } => {
                write!(f, "radial-gradient(circle at {at}, {a} 0%, {b} 50%, {c} 100%)")
            }
            GradientShape::Conic { from } => {
                write!(f, "conic-gradient(from {from}deg at 50% 50%, {a}, {b}, {c}, {a})")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Gradient {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
