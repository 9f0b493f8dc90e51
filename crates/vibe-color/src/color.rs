// SPDX-License-Identifier: MIT
//
// Color values for generated themes.
//
// A theme is designed in OKLCH (lightness, chroma, hue) because lightness
// there tracks what the eye sees: a palette role drawn from a lightness band
// reads as equally bright whatever hue it lands on. Pages only understand
// sRGB, so every color leaves as a `#rrggbb` (or `#rrggbbaa`) string.
//
//   OKLCH ─polar─ Oklab ─M2/M1─ linear sRGB ─gamma─ sRGB ─ hex
//
// Chroma that sRGB cannot show is bisected away before formatting, keeping
// lightness and hue, so the hex we print is the color we meant rather than
// a per-channel clip of it.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A color in OKLCH with straight alpha.
///
/// ```
/// use vibe_color::Color;
///
/// let teal = Color::oklch(0.62, 0.12, 195.0).to_gamut();
/// assert!(teal.in_srgb_gamut());
/// assert_eq!(teal.to_hex().len(), 7);
///
/// let parsed: Color = "#1e90ff".parse().unwrap();
/// assert_eq!(parsed.to_hex(), "#1e90ff");
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Perceived lightness, 0.0 (black) to 1.0 (white).
    pub l: f32,
    /// Chroma, 0.0 for greys; sRGB tops out a little under 0.33.
    pub c: f32,
    /// Hue angle in degrees, [0, 360).
    pub h: f32,
    /// Opacity, 0.0 to 1.0.
    pub alpha: f32,
}

/// A string that is not a CSS hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    Length(usize),

    #[error("invalid hex digit {0:?}")]
    Digit(char),
}

/// Below this chroma a color is treated as grey and its hue is meaningless.
const ACHROMATIC: f32 = 1e-6;

/// How far outside [0, 1] an sRGB channel may drift and still count as shown.
const GAMUT_SLACK: f32 = 1e-4;

/// Chroma bisection stops once the bracket is narrower than this.
const CHROMA_STEP: f32 = 1e-5;

impl Color {
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// An opaque color from gamma-encoded sRGB channels in [0, 1].
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        Oklab::from_linear_srgb([r, g, b].map(srgb_to_linear)).to_color(1.0)
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`; the `#` is optional.
    ///
    /// # Errors
    ///
    /// [`ParseColorError::Digit`] names the first non-hex character;
    /// [`ParseColorError::Length`] reports any other digit count.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        let body = s.strip_prefix('#').unwrap_or(s);
        let digits = body
            .chars()
            .map(|ch| ch.to_digit(16).and_then(|d| u8::try_from(d).ok()).ok_or(ParseColorError::Digit(ch)))
            .collect::<Result<Vec<u8>, _>>()?;

        let bytes: Vec<u8> = match digits.len() {
            3 | 4 => digits.iter().map(|d| d * 17).collect(),
            6 | 8 => digits.chunks_exact(2).map(|pair| pair[0] << 4 | pair[1]).collect(),
            n => return Err(ParseColorError::Length(n)),
        };

        let rgb = [bytes[0], bytes[1], bytes[2]].map(|v| f32::from(v) / 255.0);
        let alpha = bytes.get(3).map_or(1.0, |&a| f32::from(a) / 255.0);
        Ok(Self::srgb(rgb[0], rgb[1], rgb[2]).with_alpha(alpha))
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Same chroma and hue at lightness `l`, clamped to [0, 1].
    #[must_use]
    pub const fn set_lightness(self, l: f32) -> Self {
        Self { l: l.clamp(0.0, 1.0), ..self }
    }

    /// Interpolate toward `other` in Oklab, like CSS `color-mix(in oklab)`.
    ///
    /// `t` is clamped: 0.0 gives `self`, 1.0 gives `other`.
    #[must_use]
    pub fn mix(self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |x: f32, y: f32| (y - x).mul_add(t, x);
        let (p, q) = (self.oklab(), other.oklab());
        Oklab { l: lerp(p.l, q.l), a: lerp(p.a, q.a), b: lerp(p.b, q.b) }
            .to_color(lerp(self.alpha, other.alpha))
    }

    /// Gamma-encoded sRGB channels, clipped to [0, 1].
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let [r, g, b] = self.raw_srgb().map(|v| v.clamp(0.0, 1.0));
        (r, g, b)
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_srgb();
        let [r, g, b] = [r, g, b].map(unit_to_byte);
        if self.alpha >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{:02x}", unit_to_byte(self.alpha))
        }
    }

    /// Whether sRGB can show this color without clipping a channel.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        self.raw_srgb()
            .iter()
            .all(|v| (-GAMUT_SLACK..=1.0 + GAMUT_SLACK).contains(v))
    }

    /// The most chromatic in-gamut color with this lightness and hue.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }
        let (mut inside, mut outside) = (0.0_f32, self.c);
        while outside - inside > CHROMA_STEP {
            let c = (inside + outside) * 0.5;
            let candidate = Self { c, ..self };
            if candidate.in_srgb_gamut() {
                inside = c;
            } else {
                outside = c;
            }
        }
        Self { c: inside, ..self }
    }

    fn oklab(self) -> Oklab {
        let (sin, cos) = self.h.to_radians().sin_cos();
        Oklab { l: self.l, a: self.c * cos, b: self.c * sin }
    }

    /// sRGB channels before clipping; may fall outside [0, 1].
    fn raw_srgb(self) -> [f32; 3] {
        self.oklab().to_linear_srgb().map(linear_to_srgb)
    }
}

/// Two colors are equal when they sit at the same Oklab point with the
/// same alpha, give or take float noise. Greys compare equal whatever
/// hue they carry.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        let (p, q) = (self.oklab(), other.oklab());
        [p.l - q.l, p.a - q.a, p.b - q.b, self.alpha - other.alpha]
            .iter()
            .all(|d| d.abs() < EPS)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// CSS `oklch()` notation, which is what the numbers actually are.
impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.4} {:.4} {:.1}", self.l, self.c, self.h)?;
        if self.alpha < 1.0 {
            write!(f, " / {:.2}", self.alpha)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::hex(&text).map_err(serde::de::Error::custom)
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Wrap any angle into [0, 360).
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

// ─── Transfer functions ──────────────────────────────────────────────────────

/// Remove the sRGB gamma curve from one channel.
#[must_use]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v > 0.040_45 { ((v + 0.055) / 1.055).powf(2.4) } else { v / 12.92 }
}

/// Apply the sRGB gamma curve to one linear channel.
#[must_use]
pub fn linear_to_srgb(v: f32) -> f32 {
    if v > 0.003_130_8 { v.powf(1.0 / 2.4).mul_add(1.055, -0.055) } else { v * 12.92 }
}

fn unit_to_byte(v: f32) -> u8 {
    // In range after the clamp, so the cast cannot wrap.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    byte
}

// ─── Oklab ───────────────────────────────────────────────────────────────────
//
// Matrices from Björn Ottosson, "A perceptual color space for image
// processing" (https://bottosson.github.io/posts/oklab/).

type Mat3 = [[f32; 3]; 3];

const LINEAR_SRGB_TO_LMS: Mat3 = [
    [0.412_221_46, 0.536_332_55, 0.051_445_995],
    [0.211_903_5, 0.680_699_5, 0.107_396_96],
    [0.088_302_46, 0.281_718_85, 0.629_978_7],
];

const LMS_TO_OKLAB: Mat3 = [
    [0.210_454_26, 0.793_617_8, -0.004_072_047],
    [1.977_998_5, -2.428_592_2, 0.450_593_7],
    [0.025_904_037, 0.782_771_77, -0.808_675_77],
];

const OKLAB_TO_LMS: Mat3 = [
    [1.0, 0.396_337_78, 0.215_803_76],
    [1.0, -0.105_561_346, -0.063_854_17],
    [1.0, -0.089_484_18, -1.291_485_5],
];

const LMS_TO_LINEAR_SRGB: Mat3 = [
    [4.076_741_7, -3.307_711_6, 0.230_969_94],
    [-1.268_438, 2.609_757_4, -0.341_319_38],
    [-0.004_196_086_3, -0.703_418_6, 1.707_614_7],
];

fn apply(m: Mat3, v: [f32; 3]) -> [f32; 3] {
    m.map(|[x, y, z]| x.mul_add(v[0], y.mul_add(v[1], z * v[2])))
}

/// Cartesian form of OKLCH.
#[derive(Debug, Clone, Copy)]
struct Oklab {
    l: f32,
    a: f32,
    b: f32,
}

impl Oklab {
    fn from_linear_srgb(rgb: [f32; 3]) -> Self {
        let [l, a, b] = apply(LMS_TO_OKLAB, apply(LINEAR_SRGB_TO_LMS, rgb).map(f32::cbrt));
        Self { l, a, b }
    }

    fn to_linear_srgb(self) -> [f32; 3] {
        let lms = apply(OKLAB_TO_LMS, [self.l, self.a, self.b]).map(|v| v * v * v);
        apply(LMS_TO_LINEAR_SRGB, lms)
    }

    fn to_color(self, alpha: f32) -> Color {
        let c = self.a.hypot(self.b);
        let h = if c < ACHROMATIC { 0.0 } else { normalize_hue(self.b.atan2(self.a).to_degrees()) };
        Color { l: self.l, c, h, alpha }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps
    }

    /// Shortest arc between two hues.
    fn arc(a: f32, b: f32) -> f32 {
        let d = normalize_hue(a - b);
        d.min(360.0 - d)
    }

    // ── Conversion ───────────────────────────────────────────────────────

    #[test]
    fn white_and_black_anchor_the_lightness_axis() {
        let white = Color::srgb(1.0, 1.0, 1.0);
        let black = Color::srgb(0.0, 0.0, 0.0);
        assert!(close(white.l, 1.0, 1e-3), "white l = {}", white.l);
        assert!(close(black.l, 0.0, 1e-6));
        assert!(white.c < 1e-3 && black.c < 1e-6);
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn known_oklch_of_srgb_red() {
        // Reference: oklch(0.628 0.2577 29.23) is #ff0000.
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert!(close(red.l, 0.628, 2e-3), "{red:?}");
        assert!(close(red.c, 0.2577, 2e-3), "{red:?}");
        assert!(close(red.h, 29.23, 0.2), "{red:?}");
    }

    #[test]
    fn channels_survive_the_trip_through_oklab() {
        for rgb in [(0.2, 0.4, 0.6), (0.9, 0.1, 0.5), (0.05, 0.05, 0.05), (1.0, 0.8, 0.0)] {
            let (r, g, b) = Color::srgb(rgb.0, rgb.1, rgb.2).to_srgb();
            assert!(
                close(r, rgb.0, 1e-3) && close(g, rgb.1, 1e-3) && close(b, rgb.2, 1e-3),
                "{rgb:?} came back as ({r}, {g}, {b})"
            );
        }
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_forms_agree() {
        assert_eq!(Color::hex("#abc").unwrap().to_hex(), "#aabbcc");
        assert_eq!(Color::hex("AABBCC").unwrap().to_hex(), "#aabbcc");
        assert_eq!(Color::hex("#abcd").unwrap(), Color::hex("#aabbccdd").unwrap());
    }

    #[test]
    fn hex_alpha_byte() {
        let c = Color::hex("#33669980").unwrap();
        assert!(close(c.alpha, 128.0 / 255.0, 1e-6));
        assert_eq!(c.to_hex(), "#33669980");
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert_eq!(Color::hex(""), Err(ParseColorError::Length(0)));
        assert_eq!(Color::hex("#"), Err(ParseColorError::Length(0)));
        assert_eq!(Color::hex("#12345"), Err(ParseColorError::Length(5)));
        assert_eq!(Color::hex("#1234567890"), Err(ParseColorError::Length(10)));
        assert_eq!(Color::hex("#12g"), Err(ParseColorError::Digit('g')));
        assert_eq!(Color::hex("#ééé"), Err(ParseColorError::Digit('é')));
    }

    #[test]
    fn parse_error_messages() {
        assert_eq!(
            ParseColorError::Length(5).to_string(),
            "hex color must have 3, 4, 6 or 8 digits, got 5"
        );
        assert_eq!(ParseColorError::Digit('z').to_string(), "invalid hex digit 'z'");
    }

    #[test]
    fn from_str_and_display_are_hex() {
        let c: Color = "#c86432".parse().unwrap();
        assert_eq!(c.to_string(), "#c86432");
        assert_eq!(format!("{}", c.with_alpha(0.5)), "#c8643280");
    }

    #[test]
    fn debug_shows_oklch() {
        assert_eq!(format!("{:?}", Color::oklch(0.5, 0.1, 200.0)), "oklch(0.5000 0.1000 200.0)");
        assert_eq!(
            format!("{:?}", Color::oklch(0.5, 0.1, 200.0).with_alpha(0.25)),
            "oklch(0.5000 0.1000 200.0 / 0.25)"
        );
    }

    // ── Operations ───────────────────────────────────────────────────────

    #[test]
    fn set_lightness_clamps() {
        let c = Color::oklch(0.5, 0.1, 40.0);
        assert!(close(c.set_lightness(2.0).l, 1.0, 0.0));
        assert!(close(c.set_lightness(-1.0).l, 0.0, 0.0));
        assert!(close(c.set_lightness(0.3).h, 40.0, 0.0));
    }

    #[test]
    fn mix_endpoints() {
        let a = Color::oklch(0.3, 0.1, 350.0);
        let b = Color::oklch(0.7, 0.1, 10.0);
        assert_eq!(a.mix(&b, 0.0), a);
        assert_eq!(a.mix(&b, 1.0), b);
        assert_eq!(a.mix(&b, 7.0), b);
    }

    #[test]
    fn mix_crosses_zero_degrees_the_short_way() {
        let a = Color::oklch(0.5, 0.1, 350.0);
        let b = Color::oklch(0.5, 0.1, 10.0);
        let mid = a.mix(&b, 0.5);
        assert!(close(mid.l, 0.5, 1e-5));
        assert!(arc(mid.h, 0.0) < 0.01, "hue {}", mid.h);
    }

    #[test]
    fn mixing_with_grey_keeps_hue() {
        let blue = Color::oklch(0.5, 0.12, 260.0);
        let mid = blue.mix(&Color::oklch(0.5, 0.0, 0.0), 0.5);
        assert!(close(mid.h, 260.0, 0.01));
        assert!(close(mid.c, 0.06, 1e-5));
    }

    #[test]
    fn equality_ignores_grey_hue() {
        assert_eq!(Color::oklch(0.4, 0.0, 10.0), Color::oklch(0.4, 0.0, 250.0));
        assert_ne!(Color::oklch(0.4, 0.1, 10.0), Color::oklch(0.4, 0.1, 250.0));
        assert_ne!(Color::WHITE, Color::WHITE.with_alpha(0.5));
    }

    #[test]
    fn normalize_hue_wraps() {
        assert!(close(normalize_hue(-30.0), 330.0, 1e-4));
        assert!(close(normalize_hue(725.0), 5.0, 1e-4));
        assert!(normalize_hue(-1e-9) < 360.0);
        assert!(close(normalize_hue(360.0), 0.0, 0.0));
    }

    // ── Gamut ────────────────────────────────────────────────────────────

    #[test]
    fn muted_colors_need_no_mapping() {
        let c = Color::oklch(0.6, 0.05, 120.0);
        assert!(c.in_srgb_gamut());
        assert_eq!(c.to_gamut(), c);
    }

    #[test]
    fn vivid_green_loses_only_chroma() {
        let vivid = Color::oklch(0.65, 0.37, 150.0);
        assert!(!vivid.in_srgb_gamut());
        let mapped = vivid.to_gamut();
        assert!(mapped.in_srgb_gamut());
        assert!(mapped.c < vivid.c && mapped.c > 0.1, "c = {}", mapped.c);
        assert!(close(mapped.l, vivid.l, 0.0));
        assert!(close(mapped.h, vivid.h, 0.0));
    }

    #[test]
    fn mapped_colors_sit_on_the_gamut_edge() {
        let mapped = Color::oklch(0.7, 0.3, 300.0).to_gamut();
        assert!(!Color { c: mapped.c + 0.001, ..mapped }.in_srgb_gamut());
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_strings() {
        let c = Color::hex("#3a7bd5").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#3a7bd5\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_hex(), "#3a7bd5");
        let err = serde_json::from_str::<Color>("\"#abc12\"").unwrap_err();
        assert!(err.to_string().contains("got 5"), "{err}");
    }
}
