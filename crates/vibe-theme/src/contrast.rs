//! WCAG 2.x contrast: measuring it and pushing text until it is enough.
//!
//! Ratios use sRGB relative luminance, as WCAG defines them. Fixes move
//! only OKLCH lightness, so adjusted text keeps the hue it was tinted with.

use vibe_color::Color;
use vibe_color::color::srgb_to_linear;

/// Rec. 709 luminance weights for linear R, G, B.
const LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Relative luminance in [0, 1].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    [r, g, b]
        .into_iter()
        .zip(LUMA)
        .map(|(v, w)| w * f64::from(srgb_to_linear(v)))
        .sum()
}

/// Contrast ratio between two colors, in [1, 21]. Order does not matter.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (ya, yb) = (relative_luminance(a), relative_luminance(b));
    (ya.max(yb) + 0.05) / (ya.min(yb) + 0.05)
}

/// Move `fg` away from `bg` in lightness until their ratio is `min_ratio`.
///
/// Text lighter than the background gets lighter, darker text gets darker.
/// The smallest sufficient move is returned; if even white (or black) is not
/// enough, that extreme is returned instead.
#[must_use]
pub fn ensure_contrast(fg: Color, bg: Color, min_ratio: f64) -> Color {
    let fg = fg.to_gamut();
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg;
    }

    let lighten = relative_luminance(fg) >= relative_luminance(bg);
    let extreme = if lighten { Color::WHITE } else { Color::BLACK };
    let at = |l: f32| fg.set_lightness(l).to_gamut();

    // `near` never meets the ratio, `far` always does.
    let (mut near, mut far) = (fg.l, extreme.l);
    if contrast_ratio(at(far), bg) < min_ratio {
        return extreme;
    }
    for _ in 0..24 {
        let mid = (near + far) * 0.5;
        if contrast_ratio(at(mid), bg) >= min_ratio {
            far = mid;
        } else {
            near = mid;
        }
    }
    at(far)
}

/// Black or white, whichever contrasts more with `bg`.
#[must_use]
pub fn text_on(bg: Color) -> Color {
    if contrast_ratio(Color::WHITE, bg) > contrast_ratio(Color::BLACK, bg) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
