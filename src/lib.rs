//! # vibe-rocket: describe a vibe, get a landing page
//!
//! One entry point for hosts: derive a [`Theme`] from free text, render it
//! as a standalone HTML page, and name the file.
//!
//! ```
//! use vibe_rocket::{derive_theme, export_filename, render_export_html};
//!
//! let theme = derive_theme("neon cyberpunk nightlife");
//! assert_eq!(theme.display_name(), "Neon Noir");
//!
//! let html = render_export_html(&theme);
//! assert!(html.contains(&theme.tagline));
//! assert_eq!(export_filename(&theme), "Neon-Noir.html");
//! ```
//!
//! The work lives in three crates:
//!
//! - `vibe-color`: the OKLCH color value, hex in and out
//! - `vibe-theme`: text → seed → [`Theme`]
//! - `vibe-export`: [`Theme`] → HTML document and filename

pub use vibe_color::{Color, ParseColorError};
pub use vibe_export::{
    ExportError, ExportOptions, FeatureCard, export_filename, render_export_html,
    render_export_html_with,
};
pub use vibe_theme::builtin::{DEFAULT_VIBE, SAMPLE_VIBES, builtin_names, builtin_theme};
pub use vibe_theme::{
    FontPairing, Gradient, GradientShape, Harmony, Palette, Surface, Theme, derive_theme,
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    #[test]
    fn default_vibe_round_trip() {
        let theme = builtin_theme("default").unwrap();
        assert_eq!(theme, derive_theme(DEFAULT_VIBE));
        let html = render_export_html(&theme);
        assert!(html.contains(&format!("--primary: {};", theme.colors.primary.to_hex())));
        assert!(html.contains(&theme.tagline));
    }

    #[test]
    fn options_error_is_reexported() {
        let err: ExportError = ExportOptions::from_toml_str("show_footer = 3").unwrap_err();
        assert!(matches!(err, ExportError::Config(_)));
    }

    #[test]
    fn colors_parse_through_the_facade() {
        let c: Color = "#1a2b3c".parse().unwrap();
        assert_eq!(c.to_hex(), "#1a2b3c");
        assert!("#12345".parse::<Color>().is_err());
    }

    #[traced_test]
    #[test]
    fn derive_and_export_are_both_traced() {
        let theme = derive_theme("sunlit studio loft");
        let _ = render_export_html(&theme);
        assert!(logs_contain("derived theme"));
        assert!(logs_contain("rendered export"));
    }
}
