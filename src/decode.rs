//! Bounded sheet decoding, pixel sampling, and cropping.

use std::io::Cursor;

use image::{ImageReader, RgbaImage};

use crate::error::{Result, SkinError};
use crate::types::{Colour, Rect, SpriteImage};

/// Maximum accepted sheet dimension.
///
/// Skin archives come from untrusted sources; a tiny BMP header can declare
/// an enormous pixel buffer. Dimensions are checked before the pixel data is
/// decoded.
pub const MAX_SHEET_DIMENSION: u32 = 4096;

/// A decoded sheet bitmap with bounds-checked pixel access.
///
/// Owned solely by the extraction step that produced it; sprites cropped
/// from it carry their own copies.
#[derive(Debug)]
pub struct DecodedImage {
    pixels: RgbaImage,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Decode raw bytes into a bounded, pixel-addressable image.
///
/// Fails with `InvalidBitmap` when the bytes do not parse as a supported
/// bitmap, when either dimension is zero, or when either dimension exceeds
/// [`MAX_SHEET_DIMENSION`].
pub fn decode_sheet(bytes: &[u8]) -> Result<DecodedImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| SkinError::InvalidBitmap {
            message: format!("Unrecognized image data: {}", e),
        })?;

    // Dimensions come from the header alone; reject bombs before decoding
    // any pixel data.
    let (w, h) = reader
        .into_dimensions()
        .map_err(|e| SkinError::InvalidBitmap {
            message: format!("Failed to read image header: {}", e),
        })?;

    if w == 0 || h == 0 {
        return Err(SkinError::InvalidBitmap {
            message: format!("Image has zero dimensions ({}x{})", w, h),
        });
    }
    if w > MAX_SHEET_DIMENSION || h > MAX_SHEET_DIMENSION {
        return Err(SkinError::InvalidBitmap {
            message: format!(
                "Image dimensions {}x{} exceed the {} pixel limit",
                w, h, MAX_SHEET_DIMENSION
            ),
        });
    }

    let decoded = image::load_from_memory(bytes).map_err(|e| SkinError::InvalidBitmap {
        message: format!("Failed to decode bitmap: {}", e),
    })?;

    Ok(DecodedImage {
        pixels: decoded.to_rgba8(),
    })
}

/// Read a single pixel, failing with `InvalidBitmap` when out of bounds.
pub fn read_pixel(image: &DecodedImage, x: u32, y: u32) -> Result<Colour> {
    if x >= image.width() || y >= image.height() {
        return Err(SkinError::InvalidBitmap {
            message: format!(
                "Pixel ({}, {}) outside {}x{} image",
                x,
                y,
                image.width(),
                image.height()
            ),
        });
    }
    let p = image.pixels.get_pixel(x, y).0;
    Ok(Colour::rgb(p[0], p[1], p[2]))
}

/// Crop a rectangle out of a decoded sheet.
///
/// A rectangle with zero overlap fails with `InvalidBitmap`; one that
/// partially overlaps is clamped to the overlap. The asymmetry is
/// intentional, preserved behavior.
pub fn crop(image: &DecodedImage, rect: Rect) -> Result<SpriteImage> {
    let clamped = rect
        .clamped_to(image.width(), image.height())
        .ok_or_else(|| SkinError::InvalidBitmap {
            message: format!(
                "Rectangle {:?} has no overlap with {}x{} image",
                rect,
                image.width(),
                image.height()
            ),
        })?;

    let mut rows = Vec::with_capacity(clamped.h as usize);
    for y in clamped.y..clamped.y + clamped.h {
        let mut row = Vec::with_capacity(clamped.w as usize);
        for x in clamped.x..clamped.x + clamped.w {
            let p = image.pixels.get_pixel(x, y).0;
            row.push(Colour::rgb(p[0], p[1], p[2]));
        }
        rows.push(row);
    }

    Ok(SpriteImage::new(rows))
}
