//! Whole-sheet sprite extraction.

use crate::catalog::{catalog, Sheet};
use crate::decode::{crop, DecodedImage};
use crate::types::SpriteMap;

/// Extract every cataloged sprite of a sheet from a decoded image.
///
/// A sprite is attempted only when its rectangle fully fits inside the
/// image; out-of-bounds rectangles and per-sprite crop failures are skipped
/// silently. Undersized, older, or hand-edited sheets still contribute
/// whatever sprites do fit.
pub fn extract_all(image: &DecodedImage, sheet: Sheet) -> SpriteMap {
    let mut sprites = SpriteMap::new();

    for &id in catalog().sprites_for(sheet) {
        let Some((_, rect)) = catalog().lookup(id) else {
            continue;
        };
        if !rect.fits_within(image.width(), image.height()) {
            continue;
        }
        if let Ok(sprite) = crop(image, rect) {
            sprites.insert_if_absent(id, sprite);
        }
    }

    sprites
}
