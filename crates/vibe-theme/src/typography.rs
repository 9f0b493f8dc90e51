//! Font pairings: a display face for headings, a text face for everything else.

/// A heading/body font pairing.
///
/// Family names are static table entries, so they are safe to place in a
/// stylesheet without quoting rules beyond the double quotes CSS needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontPairing {
    pub heading: &'static str,
    /// Generic family the heading falls back to (`serif` or `sans-serif`).
    pub heading_generic: &'static str,
    pub body: &'static str,
}

impl FontPairing {
    const fn new(heading: &'static str, heading_generic: &'static str, body: &'static str) -> Self {
        Self { heading, heading_generic, body }
    }

    /// CSS `font-family` value for headings, e.g. `"Playfair Display", serif`.
    #[must_use]
    pub fn heading_stack(&self) -> String {
        format!("\"{}\", {}", self.heading, self.heading_generic)
    }

    /// CSS `font-family` value for body text.
    #[must_use]
    pub fn body_stack(&self) -> String {
        format!("\"{}\", system-ui, sans-serif", self.body)
    }

    /// Google Fonts `css2` stylesheet URL loading both families.
    #[must_use]
    pub fn google_fonts_url(&self) -> String {
        let family = |name: &str| name.replace(' ', "+");
        format!(
            "https://fonts.googleapis.com/css2?family={}:wght@600;700&family={}:wght@400;600&display=swap",
            family(self.heading),
            family(self.body),
        )
    }
}

/// Every pairing an archetype can name.
pub const PAIRINGS: &[FontPairing] = &[
    FontPairing::new("Playfair Display", "serif", "Inter"),
    FontPairing::new("Space Grotesk", "sans-serif", "Inter"),
    FontPairing::new("Cormorant Garamond", "serif", "Lato"),
    FontPairing::new("DM Serif Display", "serif", "DM Sans"),
    FontPairing::new("Syne", "sans-serif", "Manrope"),
    FontPairing::new("Fraunces", "serif", "Work Sans"),
    FontPairing::new("Libre Baskerville", "serif", "Source Sans 3"),
    FontPairing::new("Bebas Neue", "sans-serif", "Roboto"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_quote_family_names() {
        let classic = PAIRINGS[0];
        assert_eq!(classic.heading_stack(), "\"Playfair Display\", serif");
        assert_eq!(classic.body_stack(), "\"Inter\", system-ui, sans-serif");
    }

    #[test]
    fn google_fonts_url_joins_families() {
        let url = PAIRINGS[3].google_fonts_url();
        assert!(url.contains("family=DM+Serif+Display:wght@600;700"), "{url}");
        assert!(url.contains("&family=DM+Sans:wght@400;600"), "{url}");
        assert!(url.ends_with("&display=swap"));
    }

    #[test]
    fn family_names_are_plain() {
        for p in PAIRINGS {
            for name in [p.heading, p.body] {
                assert!(
                    name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '),
                    "unexpected character in {name:?}"
                );
            }
        }
    }
}
