// SPDX-License-Identifier: MIT
//
// vibe-color: the color value behind every generated theme.
//
// Themes are derived in OKLCH and exported as CSS hex strings. This crate
// holds the value type, the Oklab conversion math, gamut mapping, and hex
// parsing/formatting. It knows nothing about vibes or pages.

pub mod color;

pub use color::{Color, ParseColorError};
