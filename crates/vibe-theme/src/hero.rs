//! Hero images: a fixed pool of photo URLs.
//!
//! Nothing is fetched at derivation time; the theme only carries the URL.

use crate::seed::pick_index;

const UNSPLASH: &str = "https://images.unsplash.com/";
const SIZING: &str = "?auto=format&fit=crop&w=1600&q=80";

/// Photo ids in the pool, indexed by `(seed / 23) % len`.
pub const HERO_PHOTOS: &[&str] = &[
    "photo-1519608487953-e999c86e7455",
    "photo-1550745165-9bc0b252726f",
    "photo-1495474472287-4d71bcdd2085",
    "photo-1507525428034-b723cf961d3e",
    "photo-1441974231531-c6227db76b6e",
    "photo-1470071459604-3b5ec3a7fe05",
    "photo-1500530855697-b586d89ba3ee",
    "photo-1462331940025-496dfbfc7564",
];

/// Full URL for the hero image chosen by `seed`.
#[must_use]
pub fn hero_image_for(seed: u32) -> String {
    let photo = HERO_PHOTOS[pick_index(seed, 23, HERO_PHOTOS.len())];
    format!("{UNSPLASH}{photo}{SIZING}")
}
