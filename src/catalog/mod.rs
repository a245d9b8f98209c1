//! Static sprite catalog.
//!
//! Maps every known sprite id to the sheet and rectangle it is cut from,
//! and every sheet to the sprite ids cataloged under it. The coordinate
//! table itself is inert data in [`table`]; this module is the lookup glue.

mod table;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::types::{Rect, SpriteId};

/// One named bitmap file within a skin archive.
///
/// A closed set: filenames outside this list are ignored during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sheet {
    Main,
    Titlebar,
    ControlButtons,
    ShufRep,
    Text,
    Volume,
    Balance,
    Monoster,
    PlayPause,
    PosBar,
    Numbers,
    Playlist,
    EqMain,
    EqEx,
    Gen,
    GenEx,
    Browser,
}

impl Sheet {
    /// Every sheet, in a stable order.
    pub const ALL: [Sheet; 17] = [
        Sheet::Main,
        Sheet::Titlebar,
        Sheet::ControlButtons,
        Sheet::ShufRep,
        Sheet::Text,
        Sheet::Volume,
        Sheet::Balance,
        Sheet::Monoster,
        Sheet::PlayPause,
        Sheet::PosBar,
        Sheet::Numbers,
        Sheet::Playlist,
        Sheet::EqMain,
        Sheet::EqEx,
        Sheet::Gen,
        Sheet::GenEx,
        Sheet::Browser,
    ];

    /// Canonical lowercase filename inside the archive.
    pub fn filename(&self) -> &'static str {
        match self {
            Sheet::Main => "main.bmp",
            Sheet::Titlebar => "titlebar.bmp",
            Sheet::ControlButtons => "cbuttons.bmp",
            Sheet::ShufRep => "shufrep.bmp",
            Sheet::Text => "text.bmp",
            Sheet::Volume => "volume.bmp",
            Sheet::Balance => "balance.bmp",
            Sheet::Monoster => "monoster.bmp",
            Sheet::PlayPause => "playpaus.bmp",
            Sheet::PosBar => "posbar.bmp",
            Sheet::Numbers => "numbers.bmp",
            Sheet::Playlist => "pledit.bmp",
            Sheet::EqMain => "eqmain.bmp",
            Sheet::EqEx => "eq_ex.bmp",
            Sheet::Gen => "gen.bmp",
            Sheet::GenEx => "genex.bmp",
            Sheet::Browser => "mb.bmp",
        }
    }

    /// Match a filename (case-insensitively) against the closed sheet set.
    pub fn from_filename(name: &str) -> Option<Sheet> {
        let lower = name.to_ascii_lowercase();
        Sheet::ALL.into_iter().find(|s| s.filename() == lower)
    }
}

/// Immutable sprite-id ↔ sheet lookup built from the coordinate table.
#[derive(Debug)]
pub struct SpriteCatalog {
    by_id: BTreeMap<SpriteId, (Sheet, Rect)>,
    by_sheet: BTreeMap<Sheet, Vec<SpriteId>>,
}

impl SpriteCatalog {
    fn from_table() -> Self {
        let mut by_id = BTreeMap::new();
        let mut by_sheet: BTreeMap<Sheet, Vec<SpriteId>> = BTreeMap::new();

        for &(name, sheet, rect) in table::ENTRIES {
            let id = SpriteId(name);
            by_id.insert(id, (sheet, rect));
            by_sheet.entry(sheet).or_default().push(id);
        }

        Self { by_id, by_sheet }
    }

    /// Sheet and rectangle for a sprite id.
    pub fn lookup(&self, id: SpriteId) -> Option<(Sheet, Rect)> {
        self.by_id.get(&id).copied()
    }

    /// All sprite ids cataloged under a sheet, in table order.
    pub fn sprites_for(&self, sheet: Sheet) -> &[SpriteId] {
        self.by_sheet.get(&sheet).map_or(&[], |v| v.as_slice())
    }

    /// Total number of cataloged sprites.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

static CATALOG: LazyLock<SpriteCatalog> = LazyLock::new(SpriteCatalog::from_table);

/// The process-wide sprite catalog, built once on first use.
pub fn catalog() -> &'static SpriteCatalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_from_filename_case_insensitive() {
        assert_eq!(Sheet::from_filename("MAIN.BMP"), Some(Sheet::Main));
        assert_eq!(Sheet::from_filename("Main.bmp"), Some(Sheet::Main));
        assert_eq!(Sheet::from_filename("EQ_EX.bmp"), Some(Sheet::EqEx));
        assert_eq!(Sheet::from_filename("region.txt"), None);
    }

    #[test]
    fn test_every_sheet_roundtrips_through_filename() {
        for sheet in Sheet::ALL {
            assert_eq!(Sheet::from_filename(sheet.filename()), Some(sheet));
        }
    }

    #[test]
    fn test_catalog_is_populated() {
        assert!(catalog().len() > 300, "catalog has {} entries", catalog().len());
    }

    #[test]
    fn test_catalog_lookup_required_sprite() {
        let (sheet, rect) = catalog()
            .lookup(SpriteId("main-window-background"))
            .unwrap();
        assert_eq!(sheet, Sheet::Main);
        assert_eq!(rect, Rect::new(0, 0, 275, 116));
    }

    #[test]
    fn test_catalog_no_duplicate_ids() {
        // BTreeMap dedupes; compare against the raw table length
        assert_eq!(catalog().len(), super::table::ENTRIES.len());
    }

    #[test]
    fn test_sprites_for_sheet_belong_to_it() {
        for sheet in Sheet::ALL {
            for &id in catalog().sprites_for(sheet) {
                let (owner, _) = catalog().lookup(id).unwrap();
                assert_eq!(owner, sheet, "{} cataloged under wrong sheet", id);
            }
        }
    }

    #[test]
    fn test_every_sheet_has_sprites() {
        for sheet in Sheet::ALL {
            assert!(
                !catalog().sprites_for(sheet).is_empty(),
                "{:?} has no cataloged sprites",
                sheet
            );
        }
    }

    #[test]
    fn test_catalog_rects_are_nonzero() {
        for sheet in Sheet::ALL {
            for &id in catalog().sprites_for(sheet) {
                let (_, rect) = catalog().lookup(id).unwrap();
                assert!(rect.w > 0 && rect.h > 0, "{} has a degenerate rect", id);
            }
        }
    }
}
