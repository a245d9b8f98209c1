//! Fallback composition.
//!
//! Drives decoding, extraction, palette sampling and glyph segmentation
//! across a primary source and an optional secondary (reference) source.
//! A skin that supplies only some sheets is completed from the reference
//! skin under ordered, all-or-nothing coupling rules so that assets of
//! mismatched provenance are never mixed.

use crate::archive::SheetSet;
use crate::catalog::{catalog, Sheet};
use crate::config::{extract_skin_config, SkinConfig};
use crate::decode::decode_sheet;
use crate::error::{Result, SkinError};
use crate::extract::extract_all;
use crate::font::{segment_glyphs, GlyphSet};
use crate::palette::{extract_palette, Palette};
use crate::types::{SpriteId, SpriteMap};

/// The single sprite every skin must resolve.
pub const REQUIRED_SPRITE: SpriteId = SpriteId("main-window-background");

/// Signature sprites: presence of each one decides whether its sheet's
/// asset group is complete.
const PLAYLIST_SIGNATURE: SpriteId = SpriteId("playlist-top-tile");
const EQ_MAIN_SIGNATURE: SpriteId = SpriteId("eq-window-background");
const EQ_EX_SIGNATURE: SpriteId = SpriteId("eq-shade-background");
const BROWSER_SIGNATURE: SpriteId = SpriteId("browser-title-bar");
const EASTER_EGG: SpriteId = SpriteId("main-easter-egg-title-bar");
const EASTER_EGG_SELECTED: SpriteId = SpriteId("main-easter-egg-title-bar-selected");

/// The terminal, immutable result of one load.
#[derive(Debug)]
pub struct LoadedSkin {
    pub sprites: SpriteMap,
    pub glyphs: GlyphSet,
    pub palette: Option<Palette>,
    pub config: SkinConfig,
    /// True when the primary source itself supplied the selected easter-egg
    /// titlebar. Captured before any fallback merge and never recomputed.
    pub native_chrome: bool,
}

/// One planned fallback step: pull `sheet` from the secondary source,
/// after removing `purge` from the sprites already extracted.
///
/// The plan is an explicit ordered list so the purge-before-merge
/// dependency stays auditable; all purges are applied before any merge.
#[derive(Debug, PartialEq, Eq)]
struct FallbackAction {
    sheet: Sheet,
    purge: Vec<SpriteId>,
}

/// Load a skin from a primary source, completing it from an optional
/// secondary source.
///
/// Per-sheet decode and extraction failures are swallowed (best effort);
/// only the required-sprite check fails the load.
pub fn load(primary: &SheetSet, secondary: Option<&SheetSet>) -> Result<LoadedSkin> {
    // Step 1: extract everything the primary source supplies.
    let mut sprites = SpriteMap::new();
    for sheet in primary.sheets() {
        let Some(bytes) = primary.get(sheet) else {
            continue;
        };
        if let Ok(image) = decode_sheet(bytes) {
            sprites.merge_missing(extract_all(&image, sheet));
        }
    }

    // Step 2: the chrome flag reflects the primary source alone.
    let native_chrome = sprites.contains(EASTER_EGG_SELECTED);

    // Step 3: plan which sheets need fallback, then purge before merging.
    let plan = plan_fallback(&sprites);
    if let Some(secondary) = secondary {
        for action in &plan {
            for &id in &action.purge {
                sprites.remove(id);
            }
        }
        for action in &plan {
            let Some(bytes) = secondary.get(action.sheet) else {
                continue;
            };
            if let Ok(image) = decode_sheet(bytes) {
                sprites.merge_missing(extract_all(&image, action.sheet));
            }
        }
    }

    // Steps 5 and 6: palette from the primary genex sheet, else from the
    // secondary one.
    let mut palette = sample_palette(primary);
    if palette.is_none() {
        if let Some(secondary) = secondary {
            palette = sample_palette(secondary);
        }
    }

    // Step 7: glyphs from the primary gen sheet when it is supplied; only
    // when it is absent does the secondary sheet stand in.
    let mut glyphs = GlyphSet::new();
    if primary.contains(Sheet::Gen) {
        if let Some(set) = segment_from(primary) {
            glyphs.merge_missing(set);
        }
    } else if let Some(secondary) = secondary {
        if let Some(set) = segment_from(secondary) {
            glyphs.merge_missing(set);
        }
    }

    // Step 8: the one fatal check.
    if !sprites.contains(REQUIRED_SPRITE) {
        return Err(SkinError::MissingRequiredFile {
            name: REQUIRED_SPRITE.as_str().to_string(),
            help: Some("The skin supplies no usable main.bmp".to_string()),
        });
    }

    // Step 9: config text is optional and parse failures substitute
    // defaults field by field.
    let config = primary
        .config_text()
        .map(extract_skin_config)
        .unwrap_or_default();

    Ok(LoadedSkin {
        sprites,
        glyphs,
        palette,
        config,
        native_chrome,
    })
}

/// Evaluate the fallback rules against the primary extraction.
///
/// Rules run in a fixed order; each appends to the plan. `mark` keeps the
/// list free of duplicate sheets while preserving the strongest purge.
fn plan_fallback(sprites: &SpriteMap) -> Vec<FallbackAction> {
    let mut plan: Vec<FallbackAction> = Vec::new();

    let mark = |plan: &mut Vec<FallbackAction>, sheet: Sheet, purge: Vec<SpriteId>| {
        if let Some(existing) = plan.iter_mut().find(|a| a.sheet == sheet) {
            if existing.purge.is_empty() {
                existing.purge = purge;
            }
        } else {
            plan.push(FallbackAction { sheet, purge });
        }
    };

    // (a) playlist editor
    if !sprites.contains(PLAYLIST_SIGNATURE) {
        mark(&mut plan, Sheet::Playlist, Vec::new());
    }
    // (b) equalizer main
    if !sprites.contains(EQ_MAIN_SIGNATURE) {
        mark(&mut plan, Sheet::EqMain, Vec::new());
    }
    // (c) equalizer extension, independent of (b)
    if !sprites.contains(EQ_EX_SIGNATURE) {
        mark(&mut plan, Sheet::EqEx, Vec::new());
    }
    // (d) browse window coupling: a missing browse title drags the whole
    // window chrome with it, discarding any custom chrome already extracted
    if !sprites.contains(BROWSER_SIGNATURE) {
        mark(&mut plan, Sheet::Browser, Vec::new());
        mark(&mut plan, Sheet::Gen, chrome_ids());
    } else if !chrome_present(sprites) {
        mark(&mut plan, Sheet::Gen, Vec::new());
    }
    // (e) easter-egg coupling: missing easter-egg titlebars force both the
    // titlebar sheet and the window chrome into fallback
    if !sprites.contains(EASTER_EGG) || !sprites.contains(EASTER_EGG_SELECTED) {
        mark(&mut plan, Sheet::Titlebar, Vec::new());
        mark(&mut plan, Sheet::Gen, chrome_ids());
    }

    plan
}

fn chrome_ids() -> Vec<SpriteId> {
    catalog().sprites_for(Sheet::Gen).to_vec()
}

fn chrome_present(sprites: &SpriteMap) -> bool {
    catalog()
        .sprites_for(Sheet::Gen)
        .iter()
        .any(|&id| sprites.contains(id))
}

fn sample_palette(source: &SheetSet) -> Option<Palette> {
    let bytes = source.get(Sheet::GenEx)?;
    let image = decode_sheet(bytes).ok()?;
    extract_palette(&image).ok()
}

fn segment_from(source: &SheetSet) -> Option<GlyphSet> {
    let bytes = source.get(Sheet::Gen)?;
    let image = decode_sheet(bytes).ok()?;
    Some(segment_glyphs(&image))
}
