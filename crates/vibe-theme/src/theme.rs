//! The derived [`Theme`] and the function that builds it.

use tracing::debug;
use vibe_color::Color;

use crate::copy::{Archetype, tagline_for, title_for, to_title};
use crate::gradient::Gradient;
use crate::hero::hero_image_for;
use crate::palette::{Palette, Surface};
use crate::pattern::Harmony;
use crate::seed::{normalize, seed_for};
use crate::typography::FontPairing;

/// Everything a landing page needs to look like a vibe.
///
/// A theme is a plain value: two themes are the same theme exactly when
/// their fields are equal, and deriving from the same text always yields
/// the same fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct Theme {
    /// The normalized vibe text this theme came from.
    pub vibe: String,
    pub seed: u32,
    /// Archetype label, lowercase (`"neon noir"`).
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub colors: Palette,
    pub surface: Surface,
    pub harmony: Harmony,
    pub pattern_gradient: Gradient,
    pub typography: FontPairing,
    pub hero_image: String,
}

/// Derive the theme for a vibe.
///
/// Total: any text works, including the empty string, which derives from
/// seed 0. Leading/trailing whitespace and letter case do not matter.
#[must_use]
pub fn derive_theme(text: &str) -> Theme {
    let vibe = normalize(text);
    let seed = seed_for(&vibe);

    let archetype = Archetype::for_vibe(&vibe, seed);
    let base_hue = archetype.base_hue(seed);
    let harmony = Harmony::for_seed(seed);

    let colors = Palette::generate(base_hue, harmony, seed);
    let surface = Surface::generate(&colors, seed);
    let pattern_gradient = Gradient::for_seed(seed, &colors);

    debug!(
        seed,
        archetype = archetype.name,
        harmony = harmony.name(),
        base_hue,
        primary = %colors.primary,
        "derived theme"
    );

    Theme {
        vibe,
        seed,
        name: archetype.name.to_owned(),
        title: title_for(seed),
        tagline: tagline_for(seed),
        colors,
        surface,
        harmony,
        pattern_gradient,
        typography: archetype.typography,
        hero_image: hero_image_for(seed),
    }
}

impl Theme {
    /// The archetype name title-cased for display: `"Neon Noir"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        to_title(&self.name)
    }

    /// Labelled palette swatches, in display order.
    #[must_use]
    pub const fn swatches(&self) -> [(&'static str, Color); 3] {
        self.colors.swatches()
    }

    /// CSS custom properties for this theme, in declaration order.
    ///
    /// This is the only way theme colors reach a document: the caller
    /// applies these to `:root` (the export writes them into its stylesheet,
    /// a live preview sets them on its root element). Deriving a theme never
    /// touches any style state itself.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("--primary", self.colors.primary.to_hex()),
            ("--secondary", self.colors.secondary.to_hex()),
            ("--accent", self.colors.accent.to_hex()),
            ("--bg", self.surface.background.to_hex()),
            ("--card", self.surface.card.to_hex()),
            ("--text", self.surface.text.to_hex()),
            ("--muted", self.surface.muted.to_hex()),
            ("--on-primary", self.surface.on_primary.to_hex()),
            ("--pattern", self.pattern_gradient.to_string()),
            ("--font-serif", self.typography.heading_stack()),
            ("--font-sans", self.typography.body_stack()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::contrast_ratio;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    #[test]
    fn same_text_same_theme() {
        assert_eq!(derive_theme("neon cyberpunk nightlife"), derive_theme("neon cyberpunk nightlife"));
    }

    #[test]
    fn whitespace_and_case_do_not_matter() {
        assert_eq!(derive_theme(" Foo "), derive_theme("foo"));
        assert_eq!(derive_theme("\tNEON Cyberpunk Nightlife\n"), derive_theme("neon cyberpunk nightlife"));
    }

    #[test]
    fn inner_whitespace_is_part_of_the_vibe() {
        assert_ne!(derive_theme("neon\tcyberpunk nightlife").seed, derive_theme("neon cyberpunk nightlife").seed);
    }

    #[test]
    fn empty_and_blank_are_seed_zero() {
        let empty = derive_theme("");
        assert_eq!(empty.seed, 0);
        assert_eq!(empty.vibe, "");
        assert_eq!(empty, derive_theme("   \n\t"));
        assert!(!empty.name.is_empty());
        assert!(!empty.title.is_empty());
        assert!(!empty.tagline.is_empty());
        assert!(!empty.hero_image.is_empty());
    }

    #[test]
    fn empty_theme_is_pinned() {
        let t = derive_theme("");
        assert_eq!(t.name, "neon noir");
        assert_eq!(t.title, "Midnight Pulse");
        assert_eq!(t.tagline, "A bold home for the people who make things happen.");
        assert_eq!(t.harmony, Harmony::Triadic);
    }

    #[test]
    fn neon_scenario_is_pinned() {
        let t = derive_theme("neon cyberpunk nightlife");
        assert_eq!(t.seed, 3_435_393_605);
        assert_eq!(t.name, "neon noir");
        assert_eq!(t.display_name(), "Neon Noir");
        assert_eq!(t.harmony, Harmony::Triadic);
        assert!((t.colors.primary.h - 295.0).abs() < 0.01);
    }

    #[test]
    fn colors_are_distinct() {
        for vibe in ["", "a", "neon cyberpunk nightlife", "quiet forest cabin", "日本の夏"] {
            let c = derive_theme(vibe).colors;
            assert_ne!(c.primary.to_hex(), c.secondary.to_hex(), "{vibe}");
            assert_ne!(c.secondary.to_hex(), c.accent.to_hex(), "{vibe}");
            assert_ne!(c.primary.to_hex(), c.accent.to_hex(), "{vibe}");
        }
    }

    #[test]
    fn text_is_readable_on_background() {
        let t = derive_theme("midnight jazz lounge");
        assert!(contrast_ratio(t.surface.text, t.surface.background) >= 7.0);
    }

    #[test]
    fn css_variables_carry_exact_hex() {
        let t = derive_theme("coastal surf shack");
        let vars = t.css_variables();
        assert_eq!(vars[0], ("--primary", t.colors.primary.to_hex()));
        assert!(vars.iter().any(|(k, v)| *k == "--pattern" && v.contains("gradient(")));
        assert!(vars.iter().all(|(k, _)| k.starts_with("--")));
    }

    #[test]
    fn swatches_follow_palette() {
        let t = derive_theme("boho desert sunset");
        assert_eq!(t.swatches()[0].1, t.colors.primary);
        assert_eq!(t.swatches()[2].0, "Accent");
    }

    #[test]
    fn keyword_vibes_get_their_typography() {
        let t = derive_theme("warm artisanal coffeehouse, cozy, vintage, intimate");
        assert_eq!(t.name, "cozy hearth");
        assert_eq!(t.typography.heading, "Fraunces");
    }

    #[traced_test]
    #[test]
    fn derivation_is_logged() {
        let t = derive_theme("retro arcade bar");
        assert!(logs_contain("derived theme"));
        assert!(logs_contain(&format!("seed={}", t.seed)));
        assert!(logs_contain("archetype=\"retro arcade\""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_hex_colors() {
        let t = derive_theme("neon cyberpunk nightlife");
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["seed"], 3_435_393_605u32);
        assert_eq!(json["colors"]["primary"], t.colors.primary.to_hex());
        assert_eq!(json["patternGradient"], t.pattern_gradient.to_string());
        assert_eq!(json["heroImage"], t.hero_image);
    }
}
