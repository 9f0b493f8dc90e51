//! The download filename for an export: `Neon-Noir.html`.

use std::sync::LazyLock;

use regex::Regex;
use vibe_theme::Theme;

/// Characters Windows, macOS or Linux refuse (or mangle) in a filename.
static UNSAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f\x7f]"#).expect("static pattern"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Used when nothing usable is left of the name.
const FALLBACK_STEM: &str = "vibe";

/// Filename for exporting `theme`.
///
/// The archetype name is title-cased, unsafe characters are dropped,
/// whitespace runs become single hyphens, and `.html` is appended.
#[must_use]
pub fn export_filename(theme: &Theme) -> String {
    format!("{}.html", filename_stem(&theme.display_name()))
}

/// Sanitize arbitrary text into a filename stem.
#[must_use]
pub fn filename_stem(text: &str) -> String {
    let cleaned = UNSAFE.replace_all(text, "");
    let stem = WHITESPACE.replace_all(cleaned.trim(), "-");
    let stem = stem.trim_matches(|c: char| c == '.' || c == '-');
    if stem.is_empty() {
        FALLBACK_STEM.to_owned()
    } else {
        stem.to_owned()
    }
}
