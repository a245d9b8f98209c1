//! Export of a loaded skin to PNG files plus a JSON manifest.
//!
//! Each sprite and glyph is written as its own PNG with optional integer
//! scaling; `manifest.json` indexes the files and carries the palette,
//! config and chrome flag.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use serde::Serialize;

use crate::compose::LoadedSkin;
use crate::error::{Result, SkinError};
use crate::font::GlyphId;
use crate::types::SpriteImage;

/// Manifest filename written next to the PNGs.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Write a sprite image to a PNG file.
///
/// # Arguments
///
/// * `image` - The sprite to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(image: &SpriteImage, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let width = image.width() as u32 * scale;
    let height = image.height() as u32 * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in image.rows().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| SkinError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Export every sprite and glyph of a loaded skin into `dir`, plus the
/// manifest. Returns the number of PNG files written.
pub fn export_skin(skin: &LoadedSkin, dir: &Path, scale: u32) -> Result<usize> {
    fs::create_dir_all(dir).map_err(|e| SkinError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut written = 0usize;

    for (id, sprite) in skin.sprites.iter() {
        let file = format!("{}.png", id);
        write_png(sprite, &dir.join(&file), scale)?;
        written += 1;
    }
    for (id, glyph) in skin.glyphs.iter() {
        let file = format!("{}.png", glyph_stem(id));
        write_png(glyph, &dir.join(&file), scale)?;
        written += 1;
    }

    write_manifest(skin, &dir.join(MANIFEST_FILENAME), scale)?;

    Ok(written)
}

/// Write the JSON manifest for a loaded skin.
pub fn write_manifest(skin: &LoadedSkin, path: &Path, scale: u32) -> Result<()> {
    let output = SkinManifest::from_skin(skin, scale);
    let json =
        serde_json::to_string_pretty(&output).map_err(|e| SkinError::InvalidConfiguration {
            message: format!("Failed to serialize manifest: {}", e),
        })?;
    fs::write(path, json).map_err(|e| SkinError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write manifest: {}", e),
    })?;
    Ok(())
}

fn glyph_stem(id: GlyphId) -> String {
    let letter = id.letter.to_ascii_lowercase();
    if id.highlighted {
        format!("letter-{}-highlighted", letter)
    } else {
        format!("letter-{}", letter)
    }
}

// --- manifest serialization types ---

#[derive(Serialize)]
struct SkinManifest {
    meta: ManifestMeta,
    sprites: BTreeMap<String, ManifestEntry>,
    glyphs: BTreeMap<String, ManifestEntry>,
    palette: Option<BTreeMap<String, String>>,
    config: ManifestConfig,
    #[serde(rename = "nativeChrome")]
    native_chrome: bool,
}

#[derive(Serialize)]
struct ManifestMeta {
    app: String,
    version: String,
    scale: String,
}

#[derive(Serialize)]
struct ManifestEntry {
    file: String,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct ManifestConfig {
    normal_text: String,
    current_text: String,
    normal_background: String,
    selected_background: String,
    font: String,
}

impl SkinManifest {
    fn from_skin(skin: &LoadedSkin, scale: u32) -> Self {
        let s = scale.max(1);

        let mut sprites = BTreeMap::new();
        for (id, sprite) in skin.sprites.iter() {
            sprites.insert(
                id.to_string(),
                ManifestEntry {
                    file: format!("{}.png", id),
                    w: sprite.width() as u32 * s,
                    h: sprite.height() as u32 * s,
                },
            );
        }

        let mut glyphs = BTreeMap::new();
        for (id, glyph) in skin.glyphs.iter() {
            let stem = glyph_stem(id);
            glyphs.insert(
                stem.clone(),
                ManifestEntry {
                    file: format!("{}.png", stem),
                    w: glyph.width() as u32 * s,
                    h: glyph.height() as u32 * s,
                },
            );
        }

        let palette = skin.palette.as_ref().map(|p| {
            p.fields()
                .into_iter()
                .map(|(name, colour)| (name.to_string(), colour.to_string()))
                .collect()
        });

        SkinManifest {
            meta: ManifestMeta {
                app: "wsz".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                scale: s.to_string(),
            },
            sprites,
            glyphs,
            palette,
            config: ManifestConfig {
                normal_text: skin.config.normal_text.to_string(),
                current_text: skin.config.current_text.to_string(),
                normal_background: skin.config.normal_background.to_string(),
                selected_background: skin.config.selected_background.to_string(),
                font: skin.config.font.clone(),
            },
            native_chrome: skin.native_chrome,
        }
    }
}
