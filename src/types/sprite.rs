//! Sprite identifiers, cropped sprite images, and the sprite map.

use std::collections::BTreeMap;
use std::fmt;

use super::Colour;

/// Stable identifier for one cataloged sprite region.
///
/// Ids are static names from the builtin catalog (`"main-window-background"`,
/// `"eq-window-background"`, ...). A plain string id keeps the ~350-entry
/// catalog an inert table instead of a giant enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpriteId(pub &'static str);

impl SpriteId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// An independently-owned cropped image.
///
/// Once created it has no further relationship to the sheet it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteImage {
    pixels: Vec<Vec<Colour>>,
}

impl SpriteImage {
    /// Create a sprite from a row-major pixel grid.
    pub fn new(pixels: Vec<Vec<Colour>>) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> usize {
        self.pixels.first().map_or(0, |r| r.len())
    }

    pub fn height(&self) -> usize {
        self.pixels.len()
    }

    /// Get the pixel at (x, y), if in bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Colour>] {
        &self.pixels
    }
}

/// Sprite-id → sprite image, with a monotonic merge rule.
///
/// Once a key is set during one load it is never overwritten within that
/// load: sprites from the primary source always win over fallback sprites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteMap {
    entries: BTreeMap<SpriteId, SpriteImage>,
}

impl SpriteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sprite only if the id is not already present.
    ///
    /// Returns true when the sprite was inserted.
    pub fn insert_if_absent(&mut self, id: SpriteId, image: SpriteImage) -> bool {
        use std::collections::btree_map::Entry;
        match self.entries.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(image);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Merge another map in, never overwriting existing entries.
    pub fn merge_missing(&mut self, other: SpriteMap) {
        for (id, image) in other.entries {
            self.insert_if_absent(id, image);
        }
    }

    /// Remove a sprite. Used only by the purge step of fallback composition.
    pub fn remove(&mut self, id: SpriteId) -> Option<SpriteImage> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: SpriteId) -> Option<&SpriteImage> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: SpriteId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate sprites in id order.
    pub fn iter(&self) -> impl Iterator<Item = (SpriteId, &SpriteImage)> {
        self.entries.iter().map(|(id, img)| (*id, img))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(c: Colour) -> SpriteImage {
        SpriteImage::new(vec![vec![c; 2]; 2])
    }

    #[test]
    fn test_sprite_image_dimensions() {
        let s = solid(Colour::BLACK);
        assert_eq!(s.width(), 2);
        assert_eq!(s.height(), 2);
        assert_eq!(s.get(1, 1), Some(Colour::BLACK));
        assert_eq!(s.get(2, 0), None);
    }

    #[test]
    fn test_insert_if_absent() {
        let mut map = SpriteMap::new();
        let id = SpriteId("test-sprite");

        assert!(map.insert_if_absent(id, solid(Colour::BLACK)));
        assert!(!map.insert_if_absent(id, solid(Colour::WHITE)));

        // First insert wins
        assert_eq!(map.get(id).unwrap().get(0, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_merge_missing_never_overwrites() {
        let a = SpriteId("a");
        let b = SpriteId("b");

        let mut primary = SpriteMap::new();
        primary.insert_if_absent(a, solid(Colour::BLACK));

        let mut fallback = SpriteMap::new();
        fallback.insert_if_absent(a, solid(Colour::WHITE));
        fallback.insert_if_absent(b, solid(Colour::WHITE));

        primary.merge_missing(fallback);

        assert_eq!(primary.len(), 2);
        assert_eq!(primary.get(a).unwrap().get(0, 0), Some(Colour::BLACK));
        assert_eq!(primary.get(b).unwrap().get(0, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_remove() {
        let id = SpriteId("gone");
        let mut map = SpriteMap::new();
        map.insert_if_absent(id, solid(Colour::BLACK));

        assert!(map.remove(id).is_some());
        assert!(!map.contains(id));

        // A removed key can be filled again (purge-then-merge relies on this)
        assert!(map.insert_if_absent(id, solid(Colour::WHITE)));
    }
}
