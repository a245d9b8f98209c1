//! The builtin sprite coordinate table.
//!
//! Inert data: every known sprite id with the sheet and rectangle it is cut
//! from. Coordinates follow the classic fixed sheet layouts.

use crate::types::Rect;

use super::Sheet;

pub(super) const ENTRIES: &[(&str, Sheet, Rect)] = &[
    // main.bmp
    ("main-window-background", Sheet::Main, Rect::new(0, 0, 275, 116)),
    // titlebar.bmp -- full-width bars
    ("main-title-bar-selected", Sheet::Titlebar, Rect::new(27, 0, 275, 14)),
    ("main-title-bar", Sheet::Titlebar, Rect::new(27, 15, 275, 14)),
    ("main-shade-bar-selected", Sheet::Titlebar, Rect::new(27, 29, 275, 14)),
    ("main-shade-bar", Sheet::Titlebar, Rect::new(27, 42, 275, 14)),
    ("main-easter-egg-title-bar-selected", Sheet::Titlebar, Rect::new(27, 57, 275, 14)),
    ("main-easter-egg-title-bar", Sheet::Titlebar, Rect::new(27, 72, 275, 14)),
    // titlebar.bmp -- window buttons
    ("main-menu-button", Sheet::Titlebar, Rect::new(0, 0, 9, 9)),
    ("main-menu-button-pressed", Sheet::Titlebar, Rect::new(0, 9, 9, 9)),
    ("main-minimize-button", Sheet::Titlebar, Rect::new(9, 0, 9, 9)),
    ("main-minimize-button-pressed", Sheet::Titlebar, Rect::new(9, 9, 9, 9)),
    ("main-shade-button", Sheet::Titlebar, Rect::new(0, 18, 9, 9)),
    ("main-shade-button-pressed", Sheet::Titlebar, Rect::new(9, 18, 9, 9)),
    ("main-close-button", Sheet::Titlebar, Rect::new(18, 0, 9, 9)),
    ("main-close-button-pressed", Sheet::Titlebar, Rect::new(18, 9, 9, 9)),
    // titlebar.bmp -- clutter bar
    ("main-clutter-bar", Sheet::Titlebar, Rect::new(304, 0, 8, 43)),
    ("main-clutter-bar-pressed", Sheet::Titlebar, Rect::new(312, 0, 8, 43)),
    ("main-clutter-o-selected", Sheet::Titlebar, Rect::new(304, 47, 8, 8)),
    ("main-clutter-a-selected", Sheet::Titlebar, Rect::new(312, 55, 8, 7)),
    ("main-clutter-i-selected", Sheet::Titlebar, Rect::new(320, 62, 8, 7)),
    ("main-clutter-d-selected", Sheet::Titlebar, Rect::new(328, 69, 8, 8)),
    ("main-clutter-v-selected", Sheet::Titlebar, Rect::new(336, 77, 8, 7)),
    // titlebar.bmp -- shade-mode position bar
    ("main-shade-position-background", Sheet::Titlebar, Rect::new(0, 36, 17, 7)),
    ("main-shade-position-thumb", Sheet::Titlebar, Rect::new(20, 36, 3, 7)),
    ("main-shade-position-thumb-left", Sheet::Titlebar, Rect::new(17, 36, 3, 7)),
    ("main-shade-position-thumb-right", Sheet::Titlebar, Rect::new(23, 36, 3, 7)),
    // cbuttons.bmp
    ("cbuttons-previous", Sheet::ControlButtons, Rect::new(0, 0, 23, 18)),
    ("cbuttons-previous-pressed", Sheet::ControlButtons, Rect::new(0, 18, 23, 18)),
    ("cbuttons-play", Sheet::ControlButtons, Rect::new(23, 0, 23, 18)),
    ("cbuttons-play-pressed", Sheet::ControlButtons, Rect::new(23, 18, 23, 18)),
    ("cbuttons-pause", Sheet::ControlButtons, Rect::new(46, 0, 23, 18)),
    ("cbuttons-pause-pressed", Sheet::ControlButtons, Rect::new(46, 18, 23, 18)),
    ("cbuttons-stop", Sheet::ControlButtons, Rect::new(69, 0, 23, 18)),
    ("cbuttons-stop-pressed", Sheet::ControlButtons, Rect::new(69, 18, 23, 18)),
    ("cbuttons-next", Sheet::ControlButtons, Rect::new(92, 0, 23, 18)),
    ("cbuttons-next-pressed", Sheet::ControlButtons, Rect::new(92, 18, 23, 18)),
    ("cbuttons-eject", Sheet::ControlButtons, Rect::new(114, 0, 22, 16)),
    ("cbuttons-eject-pressed", Sheet::ControlButtons, Rect::new(114, 16, 22, 16)),
    // shufrep.bmp
    ("shufrep-repeat", Sheet::ShufRep, Rect::new(0, 0, 28, 15)),
    ("shufrep-repeat-pressed", Sheet::ShufRep, Rect::new(0, 15, 28, 15)),
    ("shufrep-repeat-active", Sheet::ShufRep, Rect::new(0, 30, 28, 15)),
    ("shufrep-repeat-active-pressed", Sheet::ShufRep, Rect::new(0, 45, 28, 15)),
    ("shufrep-shuffle", Sheet::ShufRep, Rect::new(28, 0, 47, 15)),
    ("shufrep-shuffle-pressed", Sheet::ShufRep, Rect::new(28, 15, 47, 15)),
    ("shufrep-shuffle-active", Sheet::ShufRep, Rect::new(28, 30, 47, 15)),
    ("shufrep-shuffle-active-pressed", Sheet::ShufRep, Rect::new(28, 45, 47, 15)),
    ("shufrep-eq-button", Sheet::ShufRep, Rect::new(0, 61, 23, 12)),
    ("shufrep-eq-button-selected", Sheet::ShufRep, Rect::new(0, 73, 23, 12)),
    ("shufrep-playlist-button", Sheet::ShufRep, Rect::new(23, 61, 23, 12)),
    ("shufrep-playlist-button-selected", Sheet::ShufRep, Rect::new(23, 73, 23, 12)),
    // text.bmp -- 31x3 grid of 5x6 cells
    ("text-a", Sheet::Text, Rect::new(0, 0, 5, 6)),
    ("text-b", Sheet::Text, Rect::new(5, 0, 5, 6)),
    ("text-c", Sheet::Text, Rect::new(10, 0, 5, 6)),
    ("text-d", Sheet::Text, Rect::new(15, 0, 5, 6)),
    ("text-e", Sheet::Text, Rect::new(20, 0, 5, 6)),
    ("text-f", Sheet::Text, Rect::new(25, 0, 5, 6)),
    ("text-g", Sheet::Text, Rect::new(30, 0, 5, 6)),
    ("text-h", Sheet::Text, Rect::new(35, 0, 5, 6)),
    ("text-i", Sheet::Text, Rect::new(40, 0, 5, 6)),
    ("text-j", Sheet::Text, Rect::new(45, 0, 5, 6)),
    ("text-k", Sheet::Text, Rect::new(50, 0, 5, 6)),
    ("text-l", Sheet::Text, Rect::new(55, 0, 5, 6)),
    ("text-m", Sheet::Text, Rect::new(60, 0, 5, 6)),
    ("text-n", Sheet::Text, Rect::new(65, 0, 5, 6)),
    ("text-o", Sheet::Text, Rect::new(70, 0, 5, 6)),
    ("text-p", Sheet::Text, Rect::new(75, 0, 5, 6)),
    ("text-q", Sheet::Text, Rect::new(80, 0, 5, 6)),
    ("text-r", Sheet::Text, Rect::new(85, 0, 5, 6)),
    ("text-s", Sheet::Text, Rect::new(90, 0, 5, 6)),
    ("text-t", Sheet::Text, Rect::new(95, 0, 5, 6)),
    ("text-u", Sheet::Text, Rect::new(100, 0, 5, 6)),
    ("text-v", Sheet::Text, Rect::new(105, 0, 5, 6)),
    ("text-w", Sheet::Text, Rect::new(110, 0, 5, 6)),
    ("text-x", Sheet::Text, Rect::new(115, 0, 5, 6)),
    ("text-y", Sheet::Text, Rect::new(120, 0, 5, 6)),
    ("text-z", Sheet::Text, Rect::new(125, 0, 5, 6)),
    ("text-quote", Sheet::Text, Rect::new(130, 0, 5, 6)),
    ("text-at", Sheet::Text, Rect::new(135, 0, 5, 6)),
    ("text-0", Sheet::Text, Rect::new(0, 6, 5, 6)),
    ("text-1", Sheet::Text, Rect::new(5, 6, 5, 6)),
    ("text-2", Sheet::Text, Rect::new(10, 6, 5, 6)),
    ("text-3", Sheet::Text, Rect::new(15, 6, 5, 6)),
    ("text-4", Sheet::Text, Rect::new(20, 6, 5, 6)),
    ("text-5", Sheet::Text, Rect::new(25, 6, 5, 6)),
    ("text-6", Sheet::Text, Rect::new(30, 6, 5, 6)),
    ("text-7", Sheet::Text, Rect::new(35, 6, 5, 6)),
    ("text-8", Sheet::Text, Rect::new(40, 6, 5, 6)),
    ("text-9", Sheet::Text, Rect::new(45, 6, 5, 6)),
    ("text-ellipsis", Sheet::Text, Rect::new(50, 6, 5, 6)),
    ("text-period", Sheet::Text, Rect::new(55, 6, 5, 6)),
    ("text-colon", Sheet::Text, Rect::new(60, 6, 5, 6)),
    ("text-lparen", Sheet::Text, Rect::new(65, 6, 5, 6)),
    ("text-rparen", Sheet::Text, Rect::new(70, 6, 5, 6)),
    ("text-minus", Sheet::Text, Rect::new(75, 6, 5, 6)),
    ("text-apostrophe", Sheet::Text, Rect::new(80, 6, 5, 6)),
    ("text-exclamation", Sheet::Text, Rect::new(85, 6, 5, 6)),
    ("text-underscore", Sheet::Text, Rect::new(90, 6, 5, 6)),
    ("text-plus", Sheet::Text, Rect::new(95, 6, 5, 6)),
    ("text-backslash", Sheet::Text, Rect::new(100, 6, 5, 6)),
    ("text-slash", Sheet::Text, Rect::new(105, 6, 5, 6)),
    ("text-lbracket", Sheet::Text, Rect::new(110, 6, 5, 6)),
    ("text-rbracket", Sheet::Text, Rect::new(115, 6, 5, 6)),
    ("text-caret", Sheet::Text, Rect::new(120, 6, 5, 6)),
    ("text-ampersand", Sheet::Text, Rect::new(125, 6, 5, 6)),
    ("text-percent", Sheet::Text, Rect::new(130, 6, 5, 6)),
    ("text-comma", Sheet::Text, Rect::new(135, 6, 5, 6)),
    ("text-equals", Sheet::Text, Rect::new(140, 6, 5, 6)),
    ("text-dollar", Sheet::Text, Rect::new(145, 6, 5, 6)),
    ("text-hash", Sheet::Text, Rect::new(150, 6, 5, 6)),
    ("text-a-ring", Sheet::Text, Rect::new(0, 12, 5, 6)),
    ("text-o-umlaut", Sheet::Text, Rect::new(5, 12, 5, 6)),
    ("text-a-umlaut", Sheet::Text, Rect::new(10, 12, 5, 6)),
    ("text-question", Sheet::Text, Rect::new(15, 12, 5, 6)),
    ("text-asterisk", Sheet::Text, Rect::new(20, 12, 5, 6)),
    ("text-space", Sheet::Text, Rect::new(25, 12, 5, 6)),
    // volume.bmp -- 28-frame background strip
    ("volume-background-0", Sheet::Volume, Rect::new(0, 0, 68, 13)),
    ("volume-background-1", Sheet::Volume, Rect::new(0, 15, 68, 13)),
    ("volume-background-2", Sheet::Volume, Rect::new(0, 30, 68, 13)),
    ("volume-background-3", Sheet::Volume, Rect::new(0, 45, 68, 13)),
    ("volume-background-4", Sheet::Volume, Rect::new(0, 60, 68, 13)),
    ("volume-background-5", Sheet::Volume, Rect::new(0, 75, 68, 13)),
    ("volume-background-6", Sheet::Volume, Rect::new(0, 90, 68, 13)),
    ("volume-background-7", Sheet::Volume, Rect::new(0, 105, 68, 13)),
    ("volume-background-8", Sheet::Volume, Rect::new(0, 120, 68, 13)),
    ("volume-background-9", Sheet::Volume, Rect::new(0, 135, 68, 13)),
    ("volume-background-10", Sheet::Volume, Rect::new(0, 150, 68, 13)),
    ("volume-background-11", Sheet::Volume, Rect::new(0, 165, 68, 13)),
    ("volume-background-12", Sheet::Volume, Rect::new(0, 180, 68, 13)),
    ("volume-background-13", Sheet::Volume, Rect::new(0, 195, 68, 13)),
    ("volume-background-14", Sheet::Volume, Rect::new(0, 210, 68, 13)),
    ("volume-background-15", Sheet::Volume, Rect::new(0, 225, 68, 13)),
    ("volume-background-16", Sheet::Volume, Rect::new(0, 240, 68, 13)),
    ("volume-background-17", Sheet::Volume, Rect::new(0, 255, 68, 13)),
    ("volume-background-18", Sheet::Volume, Rect::new(0, 270, 68, 13)),
    ("volume-background-19", Sheet::Volume, Rect::new(0, 285, 68, 13)),
    ("volume-background-20", Sheet::Volume, Rect::new(0, 300, 68, 13)),
    ("volume-background-21", Sheet::Volume, Rect::new(0, 315, 68, 13)),
    ("volume-background-22", Sheet::Volume, Rect::new(0, 330, 68, 13)),
    ("volume-background-23", Sheet::Volume, Rect::new(0, 345, 68, 13)),
    ("volume-background-24", Sheet::Volume, Rect::new(0, 360, 68, 13)),
    ("volume-background-25", Sheet::Volume, Rect::new(0, 375, 68, 13)),
    ("volume-background-26", Sheet::Volume, Rect::new(0, 390, 68, 13)),
    ("volume-background-27", Sheet::Volume, Rect::new(0, 405, 68, 13)),
    ("volume-thumb", Sheet::Volume, Rect::new(15, 422, 14, 11)),
    ("volume-thumb-pressed", Sheet::Volume, Rect::new(0, 422, 14, 11)),
    // balance.bmp -- 28-frame background strip
    ("balance-background-0", Sheet::Balance, Rect::new(9, 0, 38, 13)),
    ("balance-background-1", Sheet::Balance, Rect::new(9, 15, 38, 13)),
    ("balance-background-2", Sheet::Balance, Rect::new(9, 30, 38, 13)),
    ("balance-background-3", Sheet::Balance, Rect::new(9, 45, 38, 13)),
    ("balance-background-4", Sheet::Balance, Rect::new(9, 60, 38, 13)),
    ("balance-background-5", Sheet::Balance, Rect::new(9, 75, 38, 13)),
    ("balance-background-6", Sheet::Balance, Rect::new(9, 90, 38, 13)),
    ("balance-background-7", Sheet::Balance, Rect::new(9, 105, 38, 13)),
    ("balance-background-8", Sheet::Balance, Rect::new(9, 120, 38, 13)),
    ("balance-background-9", Sheet::Balance, Rect::new(9, 135, 38, 13)),
    ("balance-background-10", Sheet::Balance, Rect::new(9, 150, 38, 13)),
    ("balance-background-11", Sheet::Balance, Rect::new(9, 165, 38, 13)),
    ("balance-background-12", Sheet::Balance, Rect::new(9, 180, 38, 13)),
    ("balance-background-13", Sheet::Balance, Rect::new(9, 195, 38, 13)),
    ("balance-background-14", Sheet::Balance, Rect::new(9, 210, 38, 13)),
    ("balance-background-15", Sheet::Balance, Rect::new(9, 225, 38, 13)),
    ("balance-background-16", Sheet::Balance, Rect::new(9, 240, 38, 13)),
    ("balance-background-17", Sheet::Balance, Rect::new(9, 255, 38, 13)),
    ("balance-background-18", Sheet::Balance, Rect::new(9, 270, 38, 13)),
    ("balance-background-19", Sheet::Balance, Rect::new(9, 285, 38, 13)),
    ("balance-background-20", Sheet::Balance, Rect::new(9, 300, 38, 13)),
    ("balance-background-21", Sheet::Balance, Rect::new(9, 315, 38, 13)),
    ("balance-background-22", Sheet::Balance, Rect::new(9, 330, 38, 13)),
    ("balance-background-23", Sheet::Balance, Rect::new(9, 345, 38, 13)),
    ("balance-background-24", Sheet::Balance, Rect::new(9, 360, 38, 13)),
    ("balance-background-25", Sheet::Balance, Rect::new(9, 375, 38, 13)),
    ("balance-background-26", Sheet::Balance, Rect::new(9, 390, 38, 13)),
    ("balance-background-27", Sheet::Balance, Rect::new(9, 405, 38, 13)),
    ("balance-thumb", Sheet::Balance, Rect::new(15, 422, 14, 11)),
    ("balance-thumb-pressed", Sheet::Balance, Rect::new(0, 422, 14, 11)),
    // monoster.bmp
    ("monoster-stereo-active", Sheet::Monoster, Rect::new(0, 0, 29, 12)),
    ("monoster-stereo", Sheet::Monoster, Rect::new(0, 12, 29, 12)),
    ("monoster-mono-active", Sheet::Monoster, Rect::new(29, 0, 27, 12)),
    ("monoster-mono", Sheet::Monoster, Rect::new(29, 12, 27, 12)),
    // playpaus.bmp
    ("playpaus-play", Sheet::PlayPause, Rect::new(0, 0, 9, 9)),
    ("playpaus-pause", Sheet::PlayPause, Rect::new(9, 0, 9, 9)),
    ("playpaus-stop", Sheet::PlayPause, Rect::new(18, 0, 9, 9)),
    ("playpaus-transition", Sheet::PlayPause, Rect::new(27, 0, 9, 9)),
    ("playpaus-work-indicator", Sheet::PlayPause, Rect::new(36, 0, 3, 9)),
    // posbar.bmp
    ("posbar-background", Sheet::PosBar, Rect::new(0, 0, 248, 10)),
    ("posbar-thumb", Sheet::PosBar, Rect::new(248, 0, 29, 10)),
    ("posbar-thumb-pressed", Sheet::PosBar, Rect::new(278, 0, 29, 10)),
    // numbers.bmp
    ("numbers-0", Sheet::Numbers, Rect::new(0, 0, 9, 13)),
    ("numbers-1", Sheet::Numbers, Rect::new(9, 0, 9, 13)),
    ("numbers-2", Sheet::Numbers, Rect::new(18, 0, 9, 13)),
    ("numbers-3", Sheet::Numbers, Rect::new(27, 0, 9, 13)),
    ("numbers-4", Sheet::Numbers, Rect::new(36, 0, 9, 13)),
    ("numbers-5", Sheet::Numbers, Rect::new(45, 0, 9, 13)),
    ("numbers-6", Sheet::Numbers, Rect::new(54, 0, 9, 13)),
    ("numbers-7", Sheet::Numbers, Rect::new(63, 0, 9, 13)),
    ("numbers-8", Sheet::Numbers, Rect::new(72, 0, 9, 13)),
    ("numbers-9", Sheet::Numbers, Rect::new(81, 0, 9, 13)),
    ("numbers-blank", Sheet::Numbers, Rect::new(90, 0, 9, 13)),
    ("numbers-minus", Sheet::Numbers, Rect::new(99, 0, 9, 13)),
    // pledit.bmp -- title bar pieces
    ("playlist-top-left-corner", Sheet::Playlist, Rect::new(0, 21, 25, 20)),
    ("playlist-top-left-corner-selected", Sheet::Playlist, Rect::new(0, 0, 25, 20)),
    ("playlist-title-bar", Sheet::Playlist, Rect::new(26, 21, 100, 20)),
    ("playlist-title-bar-selected", Sheet::Playlist, Rect::new(26, 0, 100, 20)),
    ("playlist-top-tile", Sheet::Playlist, Rect::new(127, 21, 25, 20)),
    ("playlist-top-tile-selected", Sheet::Playlist, Rect::new(127, 0, 25, 20)),
    ("playlist-top-right-corner", Sheet::Playlist, Rect::new(153, 21, 25, 20)),
    ("playlist-top-right-corner-selected", Sheet::Playlist, Rect::new(153, 0, 25, 20)),
    // pledit.bmp -- frame tiles
    ("playlist-left-tile", Sheet::Playlist, Rect::new(0, 42, 12, 29)),
    ("playlist-right-tile", Sheet::Playlist, Rect::new(31, 42, 20, 29)),
    ("playlist-bottom-tile", Sheet::Playlist, Rect::new(179, 0, 25, 38)),
    ("playlist-bottom-left-corner", Sheet::Playlist, Rect::new(0, 72, 125, 38)),
    ("playlist-bottom-right-corner", Sheet::Playlist, Rect::new(126, 72, 150, 38)),
    ("playlist-scroll-handle", Sheet::Playlist, Rect::new(52, 53, 8, 18)),
    ("playlist-scroll-handle-pressed", Sheet::Playlist, Rect::new(61, 53, 8, 18)),
    // pledit.bmp -- shade mode
    ("playlist-shade-left", Sheet::Playlist, Rect::new(72, 42, 25, 14)),
    ("playlist-shade-tile", Sheet::Playlist, Rect::new(72, 57, 25, 14)),
    ("playlist-shade-right", Sheet::Playlist, Rect::new(99, 42, 50, 14)),
    ("playlist-shade-right-selected", Sheet::Playlist, Rect::new(99, 57, 50, 14)),
    // pledit.bmp -- menu buttons
    ("playlist-add-url", Sheet::Playlist, Rect::new(0, 111, 22, 18)),
    ("playlist-add-url-pressed", Sheet::Playlist, Rect::new(23, 111, 22, 18)),
    ("playlist-add-dir", Sheet::Playlist, Rect::new(0, 130, 22, 18)),
    ("playlist-add-dir-pressed", Sheet::Playlist, Rect::new(23, 130, 22, 18)),
    ("playlist-add-file", Sheet::Playlist, Rect::new(0, 149, 22, 18)),
    ("playlist-add-file-pressed", Sheet::Playlist, Rect::new(23, 149, 22, 18)),
    ("playlist-remove-all", Sheet::Playlist, Rect::new(54, 111, 22, 18)),
    ("playlist-remove-all-pressed", Sheet::Playlist, Rect::new(77, 111, 22, 18)),
    ("playlist-remove-crop", Sheet::Playlist, Rect::new(54, 130, 22, 18)),
    ("playlist-remove-crop-pressed", Sheet::Playlist, Rect::new(77, 130, 22, 18)),
    ("playlist-remove-selected", Sheet::Playlist, Rect::new(54, 149, 22, 18)),
    ("playlist-remove-selected-pressed", Sheet::Playlist, Rect::new(77, 149, 22, 18)),
    ("playlist-select-all", Sheet::Playlist, Rect::new(104, 111, 22, 18)),
    ("playlist-select-all-pressed", Sheet::Playlist, Rect::new(127, 111, 22, 18)),
    ("playlist-select-none", Sheet::Playlist, Rect::new(104, 130, 22, 18)),
    ("playlist-select-none-pressed", Sheet::Playlist, Rect::new(127, 130, 22, 18)),
    ("playlist-select-inverted", Sheet::Playlist, Rect::new(104, 149, 22, 18)),
    ("playlist-select-inverted-pressed", Sheet::Playlist, Rect::new(127, 149, 22, 18)),
    ("playlist-misc-options", Sheet::Playlist, Rect::new(154, 111, 22, 18)),
    ("playlist-misc-options-pressed", Sheet::Playlist, Rect::new(177, 111, 22, 18)),
    ("playlist-misc-file-info", Sheet::Playlist, Rect::new(154, 130, 22, 18)),
    ("playlist-misc-file-info-pressed", Sheet::Playlist, Rect::new(177, 130, 22, 18)),
    ("playlist-misc-sort", Sheet::Playlist, Rect::new(154, 149, 22, 18)),
    ("playlist-misc-sort-pressed", Sheet::Playlist, Rect::new(177, 149, 22, 18)),
    // eqmain.bmp
    ("eq-window-background", Sheet::EqMain, Rect::new(0, 0, 275, 116)),
    ("eq-title-bar", Sheet::EqMain, Rect::new(0, 149, 275, 14)),
    ("eq-title-bar-selected", Sheet::EqMain, Rect::new(0, 134, 275, 14)),
    ("eq-on-button", Sheet::EqMain, Rect::new(10, 119, 26, 12)),
    ("eq-on-button-selected", Sheet::EqMain, Rect::new(128, 119, 26, 12)),
    ("eq-auto-button", Sheet::EqMain, Rect::new(35, 119, 33, 12)),
    ("eq-auto-button-selected", Sheet::EqMain, Rect::new(153, 119, 33, 12)),
    ("eq-presets-button", Sheet::EqMain, Rect::new(224, 164, 44, 12)),
    ("eq-presets-button-pressed", Sheet::EqMain, Rect::new(224, 176, 44, 12)),
    // eqmain.bmp -- 28-frame slider backgrounds
    ("eq-slider-background-0", Sheet::EqMain, Rect::new(13, 164, 14, 63)),
    ("eq-slider-background-1", Sheet::EqMain, Rect::new(28, 164, 14, 63)),
    ("eq-slider-background-2", Sheet::EqMain, Rect::new(43, 164, 14, 63)),
    ("eq-slider-background-3", Sheet::EqMain, Rect::new(58, 164, 14, 63)),
    ("eq-slider-background-4", Sheet::EqMain, Rect::new(73, 164, 14, 63)),
    ("eq-slider-background-5", Sheet::EqMain, Rect::new(88, 164, 14, 63)),
    ("eq-slider-background-6", Sheet::EqMain, Rect::new(103, 164, 14, 63)),
    ("eq-slider-background-7", Sheet::EqMain, Rect::new(118, 164, 14, 63)),
    ("eq-slider-background-8", Sheet::EqMain, Rect::new(133, 164, 14, 63)),
    ("eq-slider-background-9", Sheet::EqMain, Rect::new(148, 164, 14, 63)),
    ("eq-slider-background-10", Sheet::EqMain, Rect::new(163, 164, 14, 63)),
    ("eq-slider-background-11", Sheet::EqMain, Rect::new(178, 164, 14, 63)),
    ("eq-slider-background-12", Sheet::EqMain, Rect::new(193, 164, 14, 63)),
    ("eq-slider-background-13", Sheet::EqMain, Rect::new(208, 164, 14, 63)),
    ("eq-slider-background-14", Sheet::EqMain, Rect::new(13, 229, 14, 63)),
    ("eq-slider-background-15", Sheet::EqMain, Rect::new(28, 229, 14, 63)),
    ("eq-slider-background-16", Sheet::EqMain, Rect::new(43, 229, 14, 63)),
    ("eq-slider-background-17", Sheet::EqMain, Rect::new(58, 229, 14, 63)),
    ("eq-slider-background-18", Sheet::EqMain, Rect::new(73, 229, 14, 63)),
    ("eq-slider-background-19", Sheet::EqMain, Rect::new(88, 229, 14, 63)),
    ("eq-slider-background-20", Sheet::EqMain, Rect::new(103, 229, 14, 63)),
    ("eq-slider-background-21", Sheet::EqMain, Rect::new(118, 229, 14, 63)),
    ("eq-slider-background-22", Sheet::EqMain, Rect::new(133, 229, 14, 63)),
    ("eq-slider-background-23", Sheet::EqMain, Rect::new(148, 229, 14, 63)),
    ("eq-slider-background-24", Sheet::EqMain, Rect::new(163, 229, 14, 63)),
    ("eq-slider-background-25", Sheet::EqMain, Rect::new(178, 229, 14, 63)),
    ("eq-slider-background-26", Sheet::EqMain, Rect::new(193, 229, 14, 63)),
    ("eq-slider-background-27", Sheet::EqMain, Rect::new(208, 229, 14, 63)),
    ("eq-slider-thumb", Sheet::EqMain, Rect::new(0, 164, 11, 11)),
    ("eq-slider-thumb-pressed", Sheet::EqMain, Rect::new(0, 176, 11, 11)),
    // eqmain.bmp -- spectrum graph
    ("eq-graph-background", Sheet::EqMain, Rect::new(0, 294, 113, 19)),
    ("eq-preamp-line", Sheet::EqMain, Rect::new(0, 314, 113, 1)),
    ("eq-graph-line-colour-0", Sheet::EqMain, Rect::new(115, 294, 1, 1)),
    ("eq-graph-line-colour-1", Sheet::EqMain, Rect::new(115, 295, 1, 1)),
    ("eq-graph-line-colour-2", Sheet::EqMain, Rect::new(115, 296, 1, 1)),
    ("eq-graph-line-colour-3", Sheet::EqMain, Rect::new(115, 297, 1, 1)),
    ("eq-graph-line-colour-4", Sheet::EqMain, Rect::new(115, 298, 1, 1)),
    ("eq-graph-line-colour-5", Sheet::EqMain, Rect::new(115, 299, 1, 1)),
    ("eq-graph-line-colour-6", Sheet::EqMain, Rect::new(115, 300, 1, 1)),
    ("eq-graph-line-colour-7", Sheet::EqMain, Rect::new(115, 301, 1, 1)),
    ("eq-graph-line-colour-8", Sheet::EqMain, Rect::new(115, 302, 1, 1)),
    ("eq-graph-line-colour-9", Sheet::EqMain, Rect::new(115, 303, 1, 1)),
    ("eq-graph-line-colour-10", Sheet::EqMain, Rect::new(115, 304, 1, 1)),
    ("eq-graph-line-colour-11", Sheet::EqMain, Rect::new(115, 305, 1, 1)),
    ("eq-graph-line-colour-12", Sheet::EqMain, Rect::new(115, 306, 1, 1)),
    ("eq-graph-line-colour-13", Sheet::EqMain, Rect::new(115, 307, 1, 1)),
    ("eq-graph-line-colour-14", Sheet::EqMain, Rect::new(115, 308, 1, 1)),
    ("eq-graph-line-colour-15", Sheet::EqMain, Rect::new(115, 309, 1, 1)),
    ("eq-graph-line-colour-16", Sheet::EqMain, Rect::new(115, 310, 1, 1)),
    ("eq-graph-line-colour-17", Sheet::EqMain, Rect::new(115, 311, 1, 1)),
    ("eq-graph-line-colour-18", Sheet::EqMain, Rect::new(115, 312, 1, 1)),
    // eq_ex.bmp
    ("eq-shade-background", Sheet::EqEx, Rect::new(0, 0, 275, 14)),
    ("eq-shade-background-selected", Sheet::EqEx, Rect::new(0, 15, 275, 14)),
    ("eq-shade-close-button", Sheet::EqEx, Rect::new(11, 38, 9, 9)),
    ("eq-shade-close-button-pressed", Sheet::EqEx, Rect::new(11, 47, 9, 9)),
    ("eq-shade-shade-button", Sheet::EqEx, Rect::new(254, 3, 9, 9)),
    ("eq-shade-shade-button-pressed", Sheet::EqEx, Rect::new(1, 38, 9, 9)),
    ("eq-shade-volume-strip", Sheet::EqEx, Rect::new(1, 30, 27, 7)),
    ("eq-shade-balance-strip", Sheet::EqEx, Rect::new(1, 22, 27, 7)),
    // gen.bmp -- general window chrome
    ("gen-top-left-selected", Sheet::Gen, Rect::new(0, 0, 25, 20)),
    ("gen-top-left", Sheet::Gen, Rect::new(0, 21, 25, 20)),
    ("gen-top-left-end-selected", Sheet::Gen, Rect::new(26, 0, 25, 20)),
    ("gen-top-left-end", Sheet::Gen, Rect::new(26, 21, 25, 20)),
    ("gen-top-center-fill-selected", Sheet::Gen, Rect::new(52, 0, 25, 20)),
    ("gen-top-center-fill", Sheet::Gen, Rect::new(52, 21, 25, 20)),
    ("gen-top-right-end-selected", Sheet::Gen, Rect::new(78, 0, 25, 20)),
    ("gen-top-right-end", Sheet::Gen, Rect::new(78, 21, 25, 20)),
    ("gen-top-right-selected", Sheet::Gen, Rect::new(104, 0, 25, 20)),
    ("gen-top-right", Sheet::Gen, Rect::new(104, 21, 25, 20)),
    ("gen-left-side", Sheet::Gen, Rect::new(127, 42, 11, 29)),
    ("gen-right-side", Sheet::Gen, Rect::new(139, 42, 8, 29)),
    ("gen-bottom-left", Sheet::Gen, Rect::new(0, 42, 125, 14)),
    ("gen-bottom-right", Sheet::Gen, Rect::new(0, 57, 125, 14)),
    ("gen-bottom-fill", Sheet::Gen, Rect::new(127, 72, 25, 14)),
    ("gen-close-button-selected", Sheet::Gen, Rect::new(148, 42, 9, 9)),
    ("gen-close-button", Sheet::Gen, Rect::new(148, 52, 9, 9)),
    // genex.bmp -- scroll and button images (palette row is sampled, not cataloged)
    ("genex-scroll-up", Sheet::GenEx, Rect::new(0, 31, 14, 14)),
    ("genex-scroll-up-pressed", Sheet::GenEx, Rect::new(14, 31, 14, 14)),
    ("genex-scroll-down", Sheet::GenEx, Rect::new(28, 31, 14, 14)),
    ("genex-scroll-down-pressed", Sheet::GenEx, Rect::new(42, 31, 14, 14)),
    ("genex-scroll-left", Sheet::GenEx, Rect::new(56, 31, 14, 14)),
    ("genex-scroll-left-pressed", Sheet::GenEx, Rect::new(70, 31, 14, 14)),
    ("genex-scroll-right", Sheet::GenEx, Rect::new(84, 31, 14, 14)),
    ("genex-scroll-right-pressed", Sheet::GenEx, Rect::new(98, 31, 14, 14)),
    ("genex-scroll-vertical-thumb", Sheet::GenEx, Rect::new(112, 31, 14, 14)),
    ("genex-scroll-horizontal-thumb", Sheet::GenEx, Rect::new(126, 31, 14, 14)),
    ("genex-button", Sheet::GenEx, Rect::new(0, 47, 47, 15)),
    ("genex-button-pressed", Sheet::GenEx, Rect::new(0, 63, 47, 15)),
    // mb.bmp -- browse window
    ("browser-top-left", Sheet::Browser, Rect::new(0, 21, 25, 20)),
    ("browser-top-left-selected", Sheet::Browser, Rect::new(0, 0, 25, 20)),
    ("browser-title-bar", Sheet::Browser, Rect::new(26, 21, 100, 20)),
    ("browser-title-bar-selected", Sheet::Browser, Rect::new(26, 0, 100, 20)),
    ("browser-top-right", Sheet::Browser, Rect::new(127, 21, 25, 20)),
    ("browser-top-right-selected", Sheet::Browser, Rect::new(127, 0, 25, 20)),
    ("browser-left-side", Sheet::Browser, Rect::new(0, 42, 9, 29)),
    ("browser-right-side", Sheet::Browser, Rect::new(10, 42, 9, 29)),
    ("browser-bottom", Sheet::Browser, Rect::new(0, 72, 125, 14)),
    ("browser-close-button", Sheet::Browser, Rect::new(148, 42, 9, 9)),
];
