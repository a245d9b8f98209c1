//! Skin archive reading.
//!
//! A skin is a ZIP container holding the fixed-name sheet bitmaps and an
//! optional config text, either at the archive root or inside a single
//! subdirectory. Entries whose resolved path escapes the archive root are
//! rejected outright.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::catalog::Sheet;
use crate::error::{Result, SkinError};

/// Optional config text filename, matched case-insensitively.
pub const CONFIG_FILENAME: &str = "pledit.txt";

/// The named byte-sets read from one source archive.
///
/// This is the composer's input shape for both the primary and the
/// secondary (reference) source.
#[derive(Debug, Clone, Default)]
pub struct SheetSet {
    sheets: BTreeMap<Sheet, Vec<u8>>,
    config_text: Option<String>,
}

impl SheetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet's raw bytes. First writer wins.
    pub fn insert_sheet(&mut self, sheet: Sheet, bytes: Vec<u8>) {
        self.sheets.entry(sheet).or_insert(bytes);
    }

    pub fn set_config_text(&mut self, text: String) {
        self.config_text = Some(text);
    }

    pub fn get(&self, sheet: Sheet) -> Option<&[u8]> {
        self.sheets.get(&sheet).map(|b| b.as_slice())
    }

    pub fn contains(&self, sheet: Sheet) -> bool {
        self.sheets.contains_key(&sheet)
    }

    /// Present sheets in stable order.
    pub fn sheets(&self) -> impl Iterator<Item = Sheet> + '_ {
        self.sheets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn config_text(&self) -> Option<&str> {
        self.config_text.as_deref()
    }
}

/// Read a skin archive from raw ZIP bytes.
///
/// Sheets are matched case-insensitively against the closed filename set,
/// at the first directory level containing any recognized bitmap. Archive
/// failures and path-escaping entries are fatal (`InvalidArchive`).
pub fn read_archive(bytes: &[u8]) -> Result<SheetSet> {
    let mut zip = ZipArchive::new(Cursor::new(bytes)).map_err(|e| SkinError::InvalidArchive {
        message: format!("Failed to open archive: {}", e),
        help: None,
    })?;

    // First pass: validate entry paths and find the directory level holding
    // the recognized bitmaps.
    let mut skin_root: Option<String> = None;
    for i in 0..zip.len() {
        let entry = zip.by_index(i).map_err(|e| SkinError::InvalidArchive {
            message: format!("Failed to read archive entry: {}", e),
            help: None,
        })?;
        let name = entry.name().to_string();

        if entry.enclosed_name().is_none() {
            return Err(SkinError::InvalidArchive {
                message: format!("Entry path escapes the archive root: {}", name),
                help: Some("The archive may be malicious; refuse to load it".to_string()),
            });
        }
        if entry.is_dir() {
            continue;
        }

        let (dir, base) = split_entry(&name);
        if Sheet::from_filename(base).is_some() {
            let shallower = skin_root
                .as_deref()
                .map_or(true, |r| depth(&dir) < depth(r));
            if shallower {
                skin_root = Some(dir);
            }
        }
    }

    let Some(root) = skin_root else {
        // No recognized bitmap anywhere: an empty set, not an error. The
        // composer decides whether anything required is missing.
        return Ok(SheetSet::new());
    };

    // Second pass: collect sheets and config text under the chosen root.
    let mut set = SheetSet::new();
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i).map_err(|e| SkinError::InvalidArchive {
            message: format!("Failed to read archive entry: {}", e),
            help: None,
        })?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        let (dir, base) = split_entry(&name);
        if dir != root {
            continue;
        }

        if let Some(sheet) = Sheet::from_filename(base) {
            let mut bytes = Vec::with_capacity(entry.size() as usize);
            entry
                .read_to_end(&mut bytes)
                .map_err(|e| SkinError::InvalidArchive {
                    message: format!("Failed to extract {}: {}", name, e),
                    help: None,
                })?;
            set.insert_sheet(sheet, bytes);
        } else if base.eq_ignore_ascii_case(CONFIG_FILENAME) {
            let mut bytes = Vec::new();
            entry
                .read_to_end(&mut bytes)
                .map_err(|e| SkinError::InvalidArchive {
                    message: format!("Failed to extract {}: {}", name, e),
                    help: None,
                })?;
            set.set_config_text(String::from_utf8_lossy(&bytes).into_owned());
        }
    }

    Ok(set)
}

/// Open and read a skin archive from disk.
pub fn open_archive(path: &Path) -> Result<SheetSet> {
    if !path.exists() {
        return Err(SkinError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|e| SkinError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    read_archive(&bytes)
}

/// Split an entry name into (directory prefix, basename).
fn split_entry(name: &str) -> (String, &str) {
    match name.rsplit_once('/') {
        Some((dir, base)) => (dir.to_string(), base),
        None => (String::new(), name),
    }
}

fn depth(dir: &str) -> usize {
    if dir.is_empty() {
        0
    } else {
        dir.matches('/').count() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use crate::testutil::solid_bmp;
    use crate::types::Colour;

    fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, bytes) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_read_root_level_sheets() {
        let main = solid_bmp(275, 116, Colour::BLACK);
        let zip = build_zip(&[("main.bmp", &main), ("pledit.txt", b"[Text]\nFont=Tahoma\n")]);

        let set = read_archive(&zip).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(Sheet::Main));
        assert_eq!(set.config_text(), Some("[Text]\nFont=Tahoma\n"));
    }

    #[test]
    fn test_case_insensitive_names() {
        let main = solid_bmp(8, 8, Colour::BLACK);
        let zip = build_zip(&[("MAIN.BMP", &main), ("PLEDIT.TXT", b"x=y\n")]);

        let set = read_archive(&zip).unwrap();
        assert!(set.contains(Sheet::Main));
        assert!(set.config_text().is_some());
    }

    #[test]
    fn test_sheets_inside_subdirectory() {
        let main = solid_bmp(8, 8, Colour::BLACK);
        let eq = solid_bmp(8, 8, Colour::WHITE);
        let zip = build_zip(&[
            ("CoolSkin/main.bmp", &main),
            ("CoolSkin/eqmain.bmp", &eq),
            ("CoolSkin/readme.txt", b"hi"),
        ]);

        let set = read_archive(&zip).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Sheet::Main));
        assert!(set.contains(Sheet::EqMain));
    }

    #[test]
    fn test_root_level_preferred_over_subdirectory() {
        let root_main = solid_bmp(4, 4, Colour::BLACK);
        let nested_main = solid_bmp(8, 8, Colour::WHITE);
        let zip = build_zip(&[
            ("backup/main.bmp", &nested_main),
            ("main.bmp", &root_main),
        ]);

        let set = read_archive(&zip).unwrap();
        assert_eq!(set.get(Sheet::Main).unwrap(), root_main.as_slice());
    }

    #[test]
    fn test_config_only_from_skin_root() {
        let main = solid_bmp(4, 4, Colour::BLACK);
        let zip = build_zip(&[
            ("skin/main.bmp", &main),
            ("other/pledit.txt", b"[Text]\nFont=Nope\n"),
        ]);

        let set = read_archive(&zip).unwrap();
        assert!(set.config_text().is_none());
    }

    #[test]
    fn test_unrecognized_files_ignored() {
        let main = solid_bmp(4, 4, Colour::BLACK);
        let zip = build_zip(&[
            ("main.bmp", &main),
            ("screenshot.png", b"not read"),
            ("skin.xml", b"<skin/>"),
        ]);

        let set = read_archive(&zip).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_path_traversal_rejected() {
        let main = solid_bmp(4, 4, Colour::BLACK);
        let zip = build_zip(&[("main.bmp", &main), ("../evil.bmp", b"payload")]);

        let result = read_archive(&zip);
        assert!(matches!(result, Err(SkinError::InvalidArchive { .. })));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let result = read_archive(b"definitely not a zip");
        assert!(matches!(result, Err(SkinError::InvalidArchive { .. })));
    }

    #[test]
    fn test_no_recognized_bitmaps_yields_empty_set() {
        let zip = build_zip(&[("readme.txt", b"nothing here")]);
        let set = read_archive(&zip).unwrap();
        assert!(set.is_empty());
        assert!(set.config_text().is_none());
    }

    #[test]
    fn test_open_archive_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_archive(&dir.path().join("absent.wsz"));
        assert!(matches!(result, Err(SkinError::FileNotFound { .. })));
    }

    #[test]
    fn test_open_archive_from_disk() {
        let main = solid_bmp(4, 4, Colour::BLACK);
        let zip = build_zip(&[("main.bmp", &main)]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skin.wsz");
        std::fs::write(&path, &zip).unwrap();

        let set = open_archive(&path).unwrap();
        assert!(set.contains(Sheet::Main));
    }
}
