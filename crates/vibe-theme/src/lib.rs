//! # vibe-theme: deterministic themes from free-text vibes
//!
//! Turns a vibe description ("neon cyberpunk nightlife") into a complete
//! landing-page theme: palette, page surface, gradient, font pairing, hero
//! image and copy. The same text always yields the same theme; nothing here
//! reads the clock, a random source, or the network.
//!
//! # Architecture
//!
//! ```text
//! vibe text
//!     │
//!     ▼
//! seed.rs:       normalize (trim, lowercase) → 31-polynomial u32 seed
//!     │
//!     ▼
//! copy.rs:       archetype by keyword (or seed % len) → name, hue window, fonts
//!     │          title + tagline from word tables
//!     ▼
//! pattern.rs:    harmony (seed / 360) → hue array
//!     │
//!     ▼
//! palette.rs:    primary / secondary / accent in disjoint lightness bands
//!     │          page surface, contrast enforced by contrast.rs
//!     ▼
//! gradient.rs,   seed-selected gradient shape, hero photo
//! hero.rs
//!     │
//!     ▼
//! theme.rs:      assemble Theme
//! ```

// Hue and table-index math moves between small integers and floats.
#![allow(clippy::cast_precision_loss)]
// f64→f32 truncation is intentional (PRNG values don't need f64 precision).
#![allow(clippy::cast_possible_truncation)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod builtin;
pub mod contrast;
pub mod copy;
pub mod gradient;
pub mod hero;
pub mod palette;
pub mod pattern;
pub mod seed;
pub mod theme;
pub mod typography;

pub use gradient::{Gradient, GradientShape};
pub use palette::{Palette, Surface};
pub use pattern::Harmony;
pub use theme::{Theme, derive_theme};
pub use typography::FontPairing;
pub use vibe_color::Color;
