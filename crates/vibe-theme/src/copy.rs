//! Archetypes and copy: the words a theme is dressed in.
//!
//! Everything here is a `const` table. Archetypes are matched by keyword
//! first so the mapping stays explainable ("neon" gives you neon noir);
//! vibes with no keyword fall through to `seed % len`. Titles and taglines
//! are assembled from word lists at seed-derived offsets.

use unicode_segmentation::UnicodeSegmentation;

use crate::seed::pick_index;
use crate::typography::{FontPairing, PAIRINGS};

// ---------------------------------------------------------------------------
// Archetypes
// ---------------------------------------------------------------------------

/// A named vibe family: keywords that select it, the hue window its base hue
/// is drawn from, and its font pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Archetype {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    /// First hue of the window, in degrees.
    pub hue_start: u16,
    /// Width of the window in degrees, 1..=360. The window may wrap past 360.
    pub hue_span: u16,
    pub typography: FontPairing,
}

impl Archetype {
    /// The archetype for a normalized vibe.
    ///
    /// The first archetype (in table order) with a keyword appearing as a
    /// whole word wins; otherwise `ARCHETYPES[seed % len]`.
    #[must_use]
    pub fn for_vibe(normalized: &str, seed: u32) -> &'static Self {
        let words: Vec<&str> = normalized
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        ARCHETYPES
            .iter()
            .find(|a| a.keywords.iter().any(|k| words.contains(k)))
            .unwrap_or(&ARCHETYPES[pick_index(seed, 1, ARCHETYPES.len())])
    }

    /// Base hue for `seed` inside this archetype's window.
    #[must_use]
    pub fn base_hue(&self, seed: u32) -> f32 {
        let offset = seed % u32::from(self.hue_span.max(1));
        ((u32::from(self.hue_start) + offset) % 360) as f32
    }
}

/// Every archetype, in keyword-matching order.
pub const ARCHETYPES: &[Archetype] = &[
    Archetype {
        name: "neon noir",
        keywords: &["neon", "cyberpunk", "cyber", "synthwave", "nightlife", "club", "rave", "futuristic"],
        hue_start: 290,
        hue_span: 80,
        typography: PAIRINGS[1],
    },
    Archetype {
        name: "cozy hearth",
        keywords: &["coffee", "coffeehouse", "cafe", "café", "cozy", "warm", "artisanal", "bakery", "rustic", "vintage"],
        hue_start: 20,
        hue_span: 50,
        typography: PAIRINGS[5],
    },
    Archetype {
        name: "coastal calm",
        keywords: &["ocean", "beach", "coastal", "sea", "surf", "breeze", "island", "sailing"],
        hue_start: 180,
        hue_span: 60,
        typography: PAIRINGS[3],
    },
    Archetype {
        name: "forest retreat",
        keywords: &["forest", "nature", "organic", "earthy", "garden", "botanical", "eco", "wellness"],
        hue_start: 110,
        hue_span: 50,
        typography: PAIRINGS[2],
    },
    Archetype {
        name: "retro arcade",
        keywords: &["retro", "arcade", "pixel", "80s", "gaming", "game", "playful", "fun"],
        hue_start: 0,
        hue_span: 360,
        typography: PAIRINGS[7],
    },
    Archetype {
        name: "minimal zen",
        keywords: &["minimal", "minimalist", "zen", "clean", "simple", "quiet", "serene", "calm"],
        hue_start: 60,
        hue_span: 60,
        typography: PAIRINGS[1],
    },
    Archetype {
        name: "desert bloom",
        keywords: &["desert", "sunset", "boho", "terracotta", "southwest", "sand", "dusk"],
        hue_start: 10,
        hue_span: 40,
        typography: PAIRINGS[0],
    },
    Archetype {
        name: "midnight luxe",
        keywords: &["luxury", "luxe", "elegant", "gold", "premium", "velvet", "midnight", "jazz"],
        hue_start: 250,
        hue_span: 50,
        typography: PAIRINGS[6],
    },
    Archetype {
        name: "cosmic drift",
        keywords: &["space", "cosmic", "galaxy", "stars", "astral", "dreamy", "ethereal", "mystic"],
        hue_start: 230,
        hue_span: 80,
        typography: PAIRINGS[4],
    },
    Archetype {
        name: "sunlit studio",
        keywords: &["bright", "sunny", "creative", "studio", "startup", "modern", "fresh", "summer"],
        hue_start: 40,
        hue_span: 60,
        typography: PAIRINGS[3],
    },
];

// ---------------------------------------------------------------------------
// Titles and taglines
// ---------------------------------------------------------------------------

/// First word of a title, indexed by `(seed / 7) % len`.
pub const TITLE_LEADS: &[&str] = &[
    "Midnight", "Golden", "Velvet", "Electric", "Quiet", "Wild",
    "Lunar", "Amber", "Crystal", "Hidden", "Radiant", "Drifting",
];

/// Second word of a title, indexed by `(seed / 11) % len`.
pub const TITLE_NOUNS: &[&str] = &[
    "Pulse", "Haven", "Studio", "Signal", "Grove", "Harbor",
    "Atelier", "Orbit", "Bloom", "Canvas", "Lounge", "Echo",
];

/// Tagline templates, indexed by `(seed / 13) % len`. `{mood}` is replaced
/// with a word from [`MOODS`].
pub const TAGLINES: &[&str] = &[
    "A {mood} home for the people who make things happen.",
    "Where {mood} ideas find their audience.",
    "Designed to feel {mood} from the very first scroll.",
    "Everything you need, wrapped in a {mood} glow.",
    "Launch something {mood} today.",
    "Built for {mood} nights and bold launches.",
];

/// Mood words, indexed by `(seed / 17) % len`.
pub const MOODS: &[&str] = &[
    "bold", "cozy", "electric", "serene", "playful",
    "refined", "dreamy", "vivid", "warm", "fearless",
];

/// Title for a seed: lead word plus noun.
#[must_use]
pub fn title_for(seed: u32) -> String {
    let lead = TITLE_LEADS[pick_index(seed, 7, TITLE_LEADS.len())];
    let noun = TITLE_NOUNS[pick_index(seed, 11, TITLE_NOUNS.len())];
    format!("{lead} {noun}")
}

/// Tagline for a seed: a template with its mood filled in.
#[must_use]
pub fn tagline_for(seed: u32) -> String {
    let template = TAGLINES[pick_index(seed, 13, TAGLINES.len())];
    let mood = MOODS[pick_index(seed, 17, MOODS.len())];
    template.replacen("{mood}", mood, 1)
}

/// Title-case text word by word: `"neon noir"` → `"Neon Noir"`.
///
/// Word boundaries follow Unicode segmentation, so punctuation and spacing
/// are kept exactly as they were.
#[must_use]
pub fn to_title(text: &str) -> String {
    text.split_word_bounds()
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
