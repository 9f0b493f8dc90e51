//! Palette generation: the bridge from hue arrays to concrete colors.
//!
//! Takes the hues from a [`Harmony`](crate::pattern::Harmony) and gives each
//! palette role its own OKLCH lightness band. The bands never overlap, so the
//! primary, secondary and accent colors are distinct for every seed, even
//! when a harmony lands two roles on nearby hues.
//!
//! The [`Surface`] colors are what the exported page is painted on: a
//! near-black tint of the base hue, with text and muted copy pushed to WCAG
//! contrast against it.

use vibe_color::Color;

use crate::contrast::{ensure_contrast, text_on};
use crate::pattern::Harmony;
use crate::seed::Xorshift32;

/// OKLCH lightness band for the secondary color.
pub const SECONDARY_LIGHTNESS: (f32, f32) = (0.44, 0.54);
/// OKLCH lightness band for the primary color.
pub const PRIMARY_LIGHTNESS: (f32, f32) = (0.58, 0.68);
/// OKLCH lightness band for the accent color.
pub const ACCENT_LIGHTNESS: (f32, f32) = (0.74, 0.84);
/// Chroma band shared by all three roles (before gamut mapping).
pub const CHROMA: (f32, f32) = (0.10, 0.19);

/// Minimum contrast of body text against the page background.
pub const TEXT_CONTRAST: f64 = 7.0;
/// Minimum contrast of muted copy against the page background.
pub const MUTED_CONTRAST: f64 = 4.5;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The three brand colors of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Palette {
    /// Buttons, the badge dot, the first gradient stop.
    pub primary: Color,
    /// Darker companion hue.
    pub secondary: Color,
    /// Lighter highlight hue.
    pub accent: Color,
}

impl Palette {
    /// Generate a palette from a base hue and harmony.
    ///
    /// - `base_hue`: the primary hue, 0-360
    /// - `harmony`: which pattern spreads the secondary and accent hues
    /// - `seed`: drives lightness/chroma placement inside each band
    #[must_use]
    pub fn generate(base_hue: f32, harmony: Harmony, seed: u32) -> Self {
        let hues = harmony.generate(base_hue);
        let mut rng = Xorshift32::new(seed);

        let mut draw = |band: (f32, f32), hue: f32| {
            let l = rng.range_f32(band.0, band.1);
            let c = rng.range_f32(CHROMA.0, CHROMA.1);
            Color::oklch(l, c, hue).to_gamut()
        };

        let primary = draw(PRIMARY_LIGHTNESS, hues[0]);
        let secondary = draw(SECONDARY_LIGHTNESS, hues[1]);
        let accent = draw(ACCENT_LIGHTNESS, hues[2]);

        Self { primary, secondary, accent }
    }

    /// The labelled swatches the preview shows under the vibe input.
    #[must_use]
    pub const fn swatches(&self) -> [(&'static str, Color); 3] {
        [
            ("Primary", self.primary),
            ("Secondary", self.secondary),
            ("Accent", self.accent),
        ]
    }
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// Page colors that frame the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct Surface {
    /// Page background: near-black, tinted toward the base hue.
    pub background: Color,
    /// Feature card fill: the background nudged toward the primary.
    pub card: Color,
    /// Headings and body text.
    pub text: Color,
    /// Secondary copy (tagline, card bodies, footer).
    pub muted: Color,
    /// Label color on primary-filled buttons.
    pub on_primary: Color,
}

impl Surface {
    /// Derive the page surface for a palette.
    #[must_use]
    pub fn generate(palette: &Palette, seed: u32) -> Self {
        // Offset the stream so surface jitter is not the palette's first draws.
        let mut rng = Xorshift32::new(seed.rotate_left(16));
        let hue = palette.primary.h;

        let background =
            Color::oklch(rng.range_f32(0.14, 0.18), rng.range_f32(0.015, 0.03), hue).to_gamut();
        let card = background.mix(&palette.primary, 0.08).to_gamut();
        let text = ensure_contrast(
            Color::oklch(rng.range_f32(0.94, 0.97), 0.01, hue),
            background,
            TEXT_CONTRAST,
        );
        let muted = ensure_contrast(
            Color::oklch(rng.range_f32(0.74, 0.80), 0.02, hue),
            background,
            MUTED_CONTRAST,
        );
        let on_primary = text_on(palette.primary);

        Self { background, card, text, muted, on_primary }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
