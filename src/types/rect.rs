//! Rectangle geometry for catalog entries and cropping.

/// An axis-aligned rectangle in sheet coordinates.
///
/// Catalog rectangles always have non-zero width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// True when this rectangle lies entirely inside an image of the given
    /// dimensions.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x + self.w <= width && self.y + self.h <= height
    }

    /// Intersect with an image of the given dimensions.
    ///
    /// Returns `None` when there is zero overlap, otherwise the clamped
    /// sub-rectangle.
    pub fn clamped_to(&self, width: u32, height: u32) -> Option<Rect> {
        if self.x >= width || self.y >= height || self.w == 0 || self.h == 0 {
            return None;
        }
        let w = self.w.min(width - self.x);
        let h = self.h.min(height - self.y);
        Some(Rect::new(self.x, self.y, w, h))
    }
}
