//! Variable-width letter font segmentation.
//!
//! The gen sheet carries two rows of letter glyphs, A-Z, separated by
//! single columns of the row's background colour. Glyph widths vary per
//! skin, so the rows are segmented by scanning pixel runs instead of fixed
//! catalog rectangles.

use std::collections::BTreeMap;

use crate::decode::{crop, read_pixel, DecodedImage};
use crate::types::{Rect, SpriteImage};

/// Fixed glyph height.
pub const GLYPH_HEIGHT: u32 = 7;

/// Row of highlighted letters.
const HIGHLIGHTED_ROW_Y: u32 = 88;
/// Row of normal letters.
const NORMAL_ROW_Y: u32 = 96;

/// Per-normalized-channel tolerance when matching the background colour.
const BACKGROUND_TOLERANCE: f32 = 0.01;

/// Identifies one letter glyph in one highlight state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlyphId {
    pub letter: char,
    pub highlighted: bool,
}

/// Up to 52 segmented glyphs (26 letters x 2 highlight states).
///
/// Merging follows the same never-overwrite rule as the sprite map.
#[derive(Debug, Clone, Default)]
pub struct GlyphSet {
    glyphs: BTreeMap<GlyphId, SpriteImage>,
}

impl GlyphSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a glyph only if the id is not already present.
    pub fn insert_if_absent(&mut self, id: GlyphId, image: SpriteImage) -> bool {
        use std::collections::btree_map::Entry;
        match self.glyphs.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(image);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Merge another set in, never overwriting existing glyphs.
    pub fn merge_missing(&mut self, other: GlyphSet) {
        for (id, image) in other.glyphs {
            self.insert_if_absent(id, image);
        }
    }

    pub fn get(&self, id: GlyphId) -> Option<&SpriteImage> {
        self.glyphs.get(&id)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GlyphId, &SpriteImage)> {
        self.glyphs.iter().map(|(id, img)| (*id, img))
    }
}

/// Segment both glyph rows of a decoded gen sheet.
///
/// A row that does not fit (`row_y + 7 > height`) is skipped entirely and
/// yields zero glyphs for its half; that is never an error.
pub fn segment_glyphs(image: &DecodedImage) -> GlyphSet {
    let mut glyphs = GlyphSet::new();
    scan_row(image, HIGHLIGHTED_ROW_Y, true, &mut glyphs);
    scan_row(image, NORMAL_ROW_Y, false, &mut glyphs);
    glyphs
}

fn scan_row(image: &DecodedImage, row_y: u32, highlighted: bool, out: &mut GlyphSet) {
    if row_y + GLYPH_HEIGHT > image.height() {
        return;
    }
    // Background colour comes from the row's left margin
    let Ok(background) = read_pixel(image, 0, row_y) else {
        return;
    };

    // x=0 is a fixed 1px margin; scanning starts past it
    let mut x = 1u32;

    for letter in 'A'..='Z' {
        if x >= image.width() {
            break;
        }

        let start = x;
        while x < image.width() {
            let Ok(pixel) = read_pixel(image, x, row_y) else {
                break;
            };
            if pixel.approx_eq(background, BACKGROUND_TOLERANCE) {
                break;
            }
            x += 1;
        }

        let run = x - start;
        if run > 0 {
            let rect = Rect::new(start, row_y, run, GLYPH_HEIGHT);
            if let Ok(glyph) = crop(image, rect) {
                out.insert_if_absent(GlyphId { letter, highlighted }, glyph);
            }
        }
        // Zero-width runs emit nothing; either way the cursor steps past the
        // background column separating this letter from the next.
        x += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{Rgba, RgbaImage};

    use crate::decode::decode_sheet;
    use crate::testutil::{encode_bmp, solid_image};
    use crate::types::Colour;

    const FG: Rgba<u8> = Rgba([255, 255, 255, 255]);

    /// Paint a foreground run on a glyph row.
    fn paint_run(img: &mut RgbaImage, row_y: u32, x0: u32, w: u32) {
        for y in row_y..row_y + GLYPH_HEIGHT {
            for x in x0..x0 + w {
                img.put_pixel(x, y, FG);
            }
        }
    }

    fn decode(img: &RgbaImage) -> crate::decode::DecodedImage {
        decode_sheet(&encode_bmp(img)).unwrap()
    }

    #[test]
    fn test_single_run_segments_one_glyph() {
        // Background at columns 0,1 and 5..; foreground at 2,3,4. The first
        // letter slot lands on a background column (zero-width, dropped);
        // the run at x=2 becomes the second letter's glyph.
        let mut img = solid_image(100, 95, Colour::BLACK);
        paint_run(&mut img, 88, 2, 3);

        let glyphs = segment_glyphs(&decode(&img));
        assert_eq!(glyphs.len(), 1);

        let glyph = glyphs
            .get(GlyphId {
                letter: 'B',
                highlighted: true,
            })
            .unwrap();
        assert_eq!(glyph.width(), 3);
        assert_eq!(glyph.height(), GLYPH_HEIGHT as usize);
        assert_eq!(glyph.get(0, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_full_alphabet_both_rows() {
        // 26 glyphs of width 4 per row, one background column between each,
        // starting at x=1
        let mut img = solid_image(200, 110, Colour::BLACK);
        for row_y in [88, 96] {
            for i in 0..26u32 {
                paint_run(&mut img, row_y, 1 + i * 5, 4);
            }
        }

        let glyphs = segment_glyphs(&decode(&img));
        assert_eq!(glyphs.len(), 52);

        for letter in 'A'..='Z' {
            for highlighted in [true, false] {
                let g = glyphs.get(GlyphId { letter, highlighted }).unwrap();
                assert_eq!(g.width(), 4, "letter {} has wrong width", letter);
            }
        }
    }

    #[test]
    fn test_variable_widths() {
        let mut img = solid_image(100, 95, Colour::BLACK);
        // A: width 3 at x=1, B: width 5 at x=5, C: width 1 at x=11
        paint_run(&mut img, 88, 1, 3);
        paint_run(&mut img, 88, 5, 5);
        paint_run(&mut img, 88, 11, 1);

        let glyphs = segment_glyphs(&decode(&img));
        let w = |letter| {
            glyphs
                .get(GlyphId { letter, highlighted: true })
                .map(|g| g.width())
        };
        assert_eq!(w('A'), Some(3));
        assert_eq!(w('B'), Some(5));
        assert_eq!(w('C'), Some(1));
        assert_eq!(w('D'), None);
    }

    #[test]
    fn test_short_image_skips_second_row() {
        // Height 95: row 88 fits (88+7=95), row 96 does not
        let mut img = solid_image(100, 95, Colour::BLACK);
        paint_run(&mut img, 88, 1, 3);

        let glyphs = segment_glyphs(&decode(&img));
        assert_eq!(glyphs.len(), 1);
        assert!(glyphs.iter().all(|(id, _)| id.highlighted));
    }

    #[test]
    fn test_too_short_image_yields_empty_set() {
        let img = solid_image(100, 50, Colour::BLACK);
        let glyphs = segment_glyphs(&decode(&img));
        assert!(glyphs.is_empty());
    }

    #[test]
    fn test_run_reaching_right_edge() {
        // Foreground run extends to the image's right edge
        let mut img = solid_image(20, 95, Colour::BLACK);
        paint_run(&mut img, 88, 1, 19);

        let glyphs = segment_glyphs(&decode(&img));
        let g = glyphs
            .get(GlyphId {
                letter: 'A',
                highlighted: true,
            })
            .unwrap();
        assert_eq!(g.width(), 19);
        assert_eq!(glyphs.len(), 1);
    }

    #[test]
    fn test_background_tolerance() {
        // Pixels within 0.01 per channel of the background count as gaps
        let mut img = solid_image(100, 95, Colour::rgb(100, 100, 100));
        paint_run(&mut img, 88, 1, 3);
        // Nearly-background pixel right after the run, then another run
        img.put_pixel(4, 88, Rgba([102, 100, 98, 255]));
        paint_run(&mut img, 88, 5, 2);

        let glyphs = segment_glyphs(&decode(&img));
        let a = glyphs
            .get(GlyphId { letter: 'A', highlighted: true })
            .unwrap();
        assert_eq!(a.width(), 3);
        let b = glyphs
            .get(GlyphId { letter: 'B', highlighted: true })
            .unwrap();
        assert_eq!(b.width(), 2);
    }

    #[test]
    fn test_glyph_set_merge_never_overwrites() {
        let id = GlyphId {
            letter: 'A',
            highlighted: false,
        };
        let black = SpriteImage::new(vec![vec![Colour::BLACK]]);
        let white = SpriteImage::new(vec![vec![Colour::WHITE]]);

        let mut first = GlyphSet::new();
        first.insert_if_absent(id, black);

        let mut second = GlyphSet::new();
        second.insert_if_absent(id, white);

        first.merge_missing(second);
        assert_eq!(first.get(id).unwrap().get(0, 0), Some(Colour::BLACK));
    }
}
