//! Hue harmony patterns: pure mathematical hue generation.
//!
//! Each harmony takes a `base_hue` (0-360) and places the primary,
//! secondary and accent hues around the wheel. The primary is always the
//! `base_hue` itself.

use vibe_color::color::normalize_hue;

use crate::seed::pick_index;

/// The kind of harmony used to spread a theme's hues around the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "kebab-case"))]
pub enum Harmony {
    /// 120-degree spacing.
    Triadic,
    /// Complement +/- 30 degrees.
    SplitComplementary,
    /// Adjacent hues +/- 30 degrees.
    Analogous,
    /// 90-degree spacing.
    Tetradic,
    /// Golden angle (137.508) spacing.
    GoldenRatio,
    /// 72-degree spacing.
    Pentagram,
}

impl Harmony {
    /// Primary, secondary and accent hues for `base_hue`, each in [0, 360).
    ///
    /// Patterns with more than three points (tetradic, golden ratio,
    /// pentagram) contribute their first three.
    #[must_use]
    pub fn generate(self, base_hue: f32) -> [f32; 3] {
        // Golden angle = 360 / phi^2
        const GOLDEN_ANGLE: f32 = 137.507_76;
        let offsets = match self {
            Self::Triadic => [120.0, 240.0],
            Self::SplitComplementary => [150.0, 210.0],
            Self::Analogous => [30.0, -30.0],
            Self::Tetradic => [90.0, 180.0],
            Self::GoldenRatio => [GOLDEN_ANGLE, 2.0 * GOLDEN_ANGLE],
            Self::Pentagram => [72.0, 144.0],
        };
        [0.0, offsets[0], offsets[1]].map(|offset| normalize_hue(base_hue + offset))
    }

    /// The harmony for a seed: `(seed / 360) % 6`, so it varies independently
    /// of the base hue's `seed % span` offset.
    #[must_use]
    pub const fn for_seed(seed: u32) -> Self {
        Self::all()[pick_index(seed, 360, Self::all().len())]
    }

    /// Human-readable name of this harmony.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Analogous => "analogous",
            Self::Tetradic => "tetradic",
            Self::GoldenRatio => "golden-ratio",
            Self::Pentagram => "pentagram",
        }
    }

    /// All harmonies, in seed-selection order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Triadic,
            Self::SplitComplementary,
            Self::Analogous,
            Self::Tetradic,
            Self::GoldenRatio,
            Self::Pentagram,
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
