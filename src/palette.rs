//! UI palette sampling from the genex sheet.
//!
//! The 22 palette colours live as single pixels along the top row of
//! `genex.bmp`, at x = 48, 50, ... 90. They are sampled in declared field
//! order; there is no partial palette.

use crate::decode::{read_pixel, DecodedImage};
use crate::error::Result;
use crate::types::Colour;

/// First sampled column.
const SAMPLE_START_X: u32 = 48;
/// Columns step by two; the pixel between two samples is unused.
const SAMPLE_STEP: u32 = 2;

/// The 22-colour UI palette, fully sampled or entirely absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub item_background: Colour,
    pub item_foreground: Colour,
    pub window_background: Colour,
    pub button_text: Colour,
    pub window_text: Colour,
    pub divider: Colour,
    pub playlist_selection: Colour,
    pub list_header_background: Colour,
    pub list_header_text: Colour,
    pub list_header_frame_top_and_left: Colour,
    pub list_header_frame_bottom_and_right: Colour,
    pub list_header_frame_pressed: Colour,
    pub list_header_dead_area: Colour,
    pub scrollbar_one: Colour,
    pub scrollbar_two: Colour,
    pub pressed_scrollbar_one: Colour,
    pub pressed_scrollbar_two: Colour,
    pub scrollbar_dead_area: Colour,
    pub list_text_highlighted: Colour,
    pub list_text_highlighted_background: Colour,
    pub list_text_selected: Colour,
    pub list_text_selected_background: Colour,
}

impl Palette {
    /// Field names and values in sampling order, for display.
    pub fn fields(&self) -> [(&'static str, Colour); 22] {
        [
            ("item-background", self.item_background),
            ("item-foreground", self.item_foreground),
            ("window-background", self.window_background),
            ("button-text", self.button_text),
            ("window-text", self.window_text),
            ("divider", self.divider),
            ("playlist-selection", self.playlist_selection),
            ("list-header-background", self.list_header_background),
            ("list-header-text", self.list_header_text),
            (
                "list-header-frame-top-and-left",
                self.list_header_frame_top_and_left,
            ),
            (
                "list-header-frame-bottom-and-right",
                self.list_header_frame_bottom_and_right,
            ),
            ("list-header-frame-pressed", self.list_header_frame_pressed),
            ("list-header-dead-area", self.list_header_dead_area),
            ("scrollbar-one", self.scrollbar_one),
            ("scrollbar-two", self.scrollbar_two),
            ("pressed-scrollbar-one", self.pressed_scrollbar_one),
            ("pressed-scrollbar-two", self.pressed_scrollbar_two),
            ("scrollbar-dead-area", self.scrollbar_dead_area),
            ("list-text-highlighted", self.list_text_highlighted),
            (
                "list-text-highlighted-background",
                self.list_text_highlighted_background,
            ),
            ("list-text-selected", self.list_text_selected),
            (
                "list-text-selected-background",
                self.list_text_selected_background,
            ),
        ]
    }
}

/// Sample the 22 palette colours from a decoded genex sheet.
///
/// All-or-nothing: any failed read aborts the whole extraction, and the
/// caller falls back to another source or to no palette at all.
pub fn extract_palette(image: &DecodedImage) -> Result<Palette> {
    let mut samples = [Colour::BLACK; 22];
    for (i, slot) in samples.iter_mut().enumerate() {
        let x = SAMPLE_START_X + SAMPLE_STEP * i as u32;
        *slot = read_pixel(image, x, 0)?;
    }

    Ok(Palette {
        item_background: samples[0],
        item_foreground: samples[1],
        window_background: samples[2],
        button_text: samples[3],
        window_text: samples[4],
        divider: samples[5],
        playlist_selection: samples[6],
        list_header_background: samples[7],
        list_header_text: samples[8],
        list_header_frame_top_and_left: samples[9],
        list_header_frame_bottom_and_right: samples[10],
        list_header_frame_pressed: samples[11],
        list_header_dead_area: samples[12],
        scrollbar_one: samples[13],
        scrollbar_two: samples[14],
        pressed_scrollbar_one: samples[15],
        pressed_scrollbar_two: samples[16],
        scrollbar_dead_area: samples[17],
        list_text_highlighted: samples[18],
        list_text_highlighted_background: samples[19],
        list_text_selected: samples[20],
        list_text_selected_background: samples[21],
    })
}
