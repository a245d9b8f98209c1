//! Playlist config text parsing.
//!
//! Skins may carry a `pledit.txt` with an INI-like `[Text]` section holding
//! playlist colours and a font name. Every field defaults independently, so
//! a missing file, a missing key, and an unparsable value all behave the
//! same way.

use std::collections::BTreeMap;

use crate::types::Colour;

/// Section holding the recognized keys.
const TEXT_SECTION: &str = "text";

/// Playlist text styling, with per-field defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinConfig {
    /// Normal entry text. Default green.
    pub normal_text: Colour,
    /// Currently-playing entry text. Default white.
    pub current_text: Colour,
    /// Entry background. Default black.
    pub normal_background: Colour,
    /// Selected entry background. Default navy.
    pub selected_background: Colour,
    /// Playlist font name.
    pub font: String,
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            normal_text: Colour::rgb(0x00, 0xFF, 0x00),
            current_text: Colour::WHITE,
            normal_background: Colour::BLACK,
            selected_background: Colour::rgb(0x00, 0x00, 0x80),
            font: "Arial".to_string(),
        }
    }
}

/// Parsed section → key → value view of the config text.
///
/// Line-oriented: blank lines and lines starting with `;` or `#` are
/// ignored; `[Name]` opens a section; a line containing `=` is split at its
/// first `=` with both sides trimmed. Keys preceding any section are
/// discarded, and within a section the last write wins. Section and key
/// lookups are ASCII-case-insensitive.
pub fn parse_sections(text: &str) -> BTreeMap<String, BTreeMap<String, String>> {
    let mut sections: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') && line.len() > 2 {
            let name = line[1..line.len() - 1].to_ascii_lowercase();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }
        if let Some(eq) = line.find('=') {
            let Some(section) = &current else {
                // No target section yet; discard
                continue;
            };
            let key = line[..eq].trim().to_ascii_lowercase();
            let value = line[eq + 1..].trim().to_string();
            sections
                .get_mut(section)
                .expect("current section was inserted on open")
                .insert(key, value);
        }
    }

    sections
}

/// Extract the skin config from raw config text.
///
/// Each unset or unparsable field takes its own default independently of the
/// others; this never fails.
pub fn extract_skin_config(text: &str) -> SkinConfig {
    let sections = parse_sections(text);
    let mut config = SkinConfig::default();

    let Some(section) = sections.get(TEXT_SECTION) else {
        return config;
    };

    let colour = |key: &str| section.get(key).and_then(|v| Colour::from_hex(v).ok());

    if let Some(c) = colour("normal") {
        config.normal_text = c;
    }
    if let Some(c) = colour("current") {
        config.current_text = c;
    }
    if let Some(c) = colour("normalbg") {
        config.normal_background = c;
    }
    if let Some(c) = colour("selectedbg") {
        config.selected_background = c;
    }
    if let Some(font) = section.get("font") {
        if !font.is_empty() {
            config.font = font.clone();
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_text_is_fully_defaulted() {
        let config = extract_skin_config("");
        assert_eq!(config, SkinConfig::default());
        assert_eq!(config.normal_text, Colour::rgb(0, 255, 0));
        assert_eq!(config.font, "Arial");
    }

    #[test]
    fn test_full_section() {
        let text = "\
[Text]
Normal=#FFCC00
Current=#FFFFFF
NormalBG=#001122
SelectedBG=#334455
Font=Tahoma
";
        let config = extract_skin_config(text);
        assert_eq!(config.normal_text, Colour::rgb(0xFF, 0xCC, 0x00));
        assert_eq!(config.current_text, Colour::WHITE);
        assert_eq!(config.normal_background, Colour::rgb(0x00, 0x11, 0x22));
        assert_eq!(config.selected_background, Colour::rgb(0x33, 0x44, 0x55));
        assert_eq!(config.font, "Tahoma");
    }

    #[test]
    fn test_fields_default_independently() {
        let text = "[Text]\nNormal=#FF0000\nSelectedBG=not-a-colour\n";
        let config = extract_skin_config(text);
        assert_eq!(config.normal_text, Colour::rgb(255, 0, 0));
        // Unparsable value falls back alone
        assert_eq!(config.selected_background, Colour::rgb(0, 0, 0x80));
        assert_eq!(config.current_text, Colour::WHITE);
    }

    #[test]
    fn test_colour_without_hash_and_short_form() {
        let text = "[Text]\nNormal=00FF00\nCurrent=#F0A\n";
        let config = extract_skin_config(text);
        assert_eq!(config.normal_text, Colour::rgb(0, 255, 0));
        assert_eq!(config.current_text, Colour::rgb(0xFF, 0x00, 0xAA));
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let text = "; header comment\n\n# another\n[Text]\n; inline\nFont=Verdana\n";
        let config = extract_skin_config(text);
        assert_eq!(config.font, "Verdana");
    }

    #[test]
    fn test_keys_before_any_section_discarded() {
        let text = "Normal=#FF0000\n[Text]\nFont=Courier\n";
        let config = extract_skin_config(text);
        assert_eq!(config.normal_text, SkinConfig::default().normal_text);
        assert_eq!(config.font, "Courier");
    }

    #[test]
    fn test_last_write_wins() {
        let text = "[Text]\nFont=First\nFont=Second\n";
        assert_eq!(extract_skin_config(text).font, "Second");
    }

    #[test]
    fn test_split_at_first_equals() {
        let sections = parse_sections("[Text]\nFont=a=b\n");
        assert_eq!(sections["text"]["font"], "a=b");
    }

    #[test]
    fn test_values_trimmed() {
        let sections = parse_sections("[Text]\n  Font  =  Fixedsys  \n");
        assert_eq!(sections["text"]["font"], "Fixedsys");
    }

    #[test]
    fn test_case_insensitive_section_and_keys() {
        let text = "[TEXT]\nFONT=Impact\nnormal=#123456\n";
        let config = extract_skin_config(text);
        assert_eq!(config.font, "Impact");
        assert_eq!(config.normal_text, Colour::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_unrelated_sections_ignored() {
        let text = "[Other]\nFont=Nope\n[Text]\nFont=Yes\n";
        assert_eq!(extract_skin_config(text).font, "Yes");
    }
}
