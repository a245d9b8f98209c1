//! Shared helpers for building synthetic sheets in tests.

use std::io::Cursor;

use image::{Rgba, RgbaImage};

use crate::types::Colour;

/// Encode an RGBA image as an in-memory 24-bit BMP.
pub(crate) fn encode_bmp(img: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img.clone())
        .to_rgb8()
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Bmp)
        .unwrap();
    bytes
}

/// A solid-colour image of the given size.
pub(crate) fn solid_image(w: u32, h: u32, colour: Colour) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([colour.r, colour.g, colour.b, 255]))
}

/// A solid-colour sheet, already BMP-encoded.
pub(crate) fn solid_bmp(w: u32, h: u32, colour: Colour) -> Vec<u8> {
    encode_bmp(&solid_image(w, h, colour))
}
