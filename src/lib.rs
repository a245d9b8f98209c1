//! wsz - Classic skin archive loader
//!
//! A library for loading classic player skin archives: ZIP containers of
//! fixed-name BMP sprite sheets, sliced by a static catalog, completed from
//! a reference skin, with a sampled UI palette, a variable-width letter font
//! and a playlist text config.

pub mod archive;
pub mod catalog;
pub mod cli;
pub mod compose;
pub mod config;
pub mod decode;
pub mod error;
pub mod export;
pub mod extract;
pub mod font;
pub mod output;
pub mod palette;
pub mod types;

#[cfg(test)]
mod testutil;

pub use archive::{open_archive, read_archive, SheetSet};
pub use catalog::{catalog, Sheet, SpriteCatalog};
pub use compose::{load, LoadedSkin, REQUIRED_SPRITE};
pub use config::{extract_skin_config, SkinConfig};
pub use decode::{decode_sheet, DecodedImage};
pub use error::{Result, SkinError};
pub use export::{export_skin, write_manifest, write_png};
pub use extract::extract_all;
pub use font::{segment_glyphs, GlyphId, GlyphSet};
pub use palette::{extract_palette, Palette};
pub use types::{Colour, Rect, SpriteId, SpriteImage, SpriteMap};
