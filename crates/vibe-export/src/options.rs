//! Export options: the knobs a host can turn without touching the theme.
//!
//! Defaults reproduce the live preview exactly. Hosts that want different
//! button labels or feature cards load a TOML table:
//!
//! ```toml
//! lang = "fr"
//! primary_cta = "Commencer"
//! show_palette = false
//!
//! [[features]]
//! title = "Palette sur mesure"
//! body = "Des couleurs tirées de votre ambiance."
//! ```
//!
//! Unknown keys are rejected so a typo does not silently fall back to a
//! default.

use serde::Deserialize;
use thiserror::Error;

/// Errors from loading export options.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid export options: {0}")]
    Config(#[from] toml::de::Error),
}

/// One feature card under the hero copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureCard {
    pub title: String,
    pub body: String,
}

impl FeatureCard {
    fn new(title: &str, body: &str) -> Self {
        Self { title: title.to_owned(), body: body.to_owned() }
    }
}

/// How to render an export. Every string here is escaped on output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportOptions {
    /// `<html lang>` value.
    pub lang: String,
    /// Link the Google Fonts stylesheet for the theme's pairing. Layout and
    /// colors never depend on it; families fall back to generic stacks.
    pub load_fonts: bool,
    pub primary_cta: String,
    pub secondary_cta: String,
    /// `alt` text of the hero image.
    pub hero_alt: String,
    pub features: Vec<FeatureCard>,
    /// Show the labelled palette swatches under the cards.
    pub show_palette: bool,
    /// Show the "Generated with Vibe Rocket" footer with the seed.
    pub show_footer: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            load_fonts: true,
            primary_cta: "Get Started".into(),
            secondary_cta: "Learn More".into(),
            hero_alt: "Hero".into(),
            features: vec![
                FeatureCard::new("Tailored Palette", "Colors derived from your vibe."),
                FeatureCard::new("Elegant Typography", "A pairing that fits your mood."),
                FeatureCard::new("Instant Export", "Download a ready-to-ship HTML file."),
            ],
            show_palette: true,
            show_footer: true,
        }
    }
}

impl ExportOptions {
    /// Parse options from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] on malformed TOML, wrong value types,
    /// or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self, ExportError> {
        Ok(toml::from_str(s)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
