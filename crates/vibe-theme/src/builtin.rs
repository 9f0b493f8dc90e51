//! Named sample vibes: the shell's starting text and its suggestions.

use crate::theme::{Theme, derive_theme};

/// The vibe a fresh session starts with.
pub const DEFAULT_VIBE: &str = "neon cyberpunk nightlife";

/// Named sample vibes, in the order a shell should list them.
pub const SAMPLE_VIBES: &[(&str, &str)] = &[
    ("default", DEFAULT_VIBE),
    ("coffeehouse", "warm artisanal coffeehouse, cozy, vintage, intimate"),
    ("surf-school", "breezy coastal surf school"),
    ("botanical", "organic botanical wellness garden"),
    ("arcade", "retro pixel arcade bar"),
    ("gallery", "minimal zen gallery"),
    ("jazz-club", "elegant midnight jazz lounge"),
    ("observatory", "dreamy cosmic observatory"),
];

/// Look up a sample vibe by name and derive its theme.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    SAMPLE_VIBES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, vibe)| derive_theme(vibe))
}

/// List all sample vibe names.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    SAMPLE_VIBES.iter().map(|(name, _)| *name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            assert!(builtin_theme(name).is_some(), "Builtin '{name}' failed to derive");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_theme("nonexistent").is_none());
    }

    #[test]
    fn default_is_the_default_vibe() {
        assert_eq!(builtin_theme("default"), Some(derive_theme(DEFAULT_VIBE)));
    }

    #[test]
    fn each_sample_hits_a_different_archetype() {
        let mut names: Vec<String> = builtin_names()
            .filter_map(builtin_theme)
            .map(|t| t.name)
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
