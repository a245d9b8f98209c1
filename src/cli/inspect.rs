//! Inspect command implementation.
//!
//! Loads a skin archive and prints an organized inventory of its sprites,
//! glyphs, palette and playlist config.

use std::path::PathBuf;

use clap::Args;

use crate::archive::open_archive;
use crate::compose::{load, LoadedSkin};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// Inspect a skin archive and print its contents
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Skin archive to inspect
    pub skin: PathBuf,

    /// Reference archive completing sheets the skin omits
    #[arg(long, value_name = "PATH")]
    pub fallback: Option<PathBuf>,

    /// List every sprite with its dimensions
    #[arg(long)]
    pub sprites: bool,

    /// Print the sampled UI palette
    #[arg(long)]
    pub palette: bool,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    printer.status("Loading", &display_path(&args.skin));
    let primary = open_archive(&args.skin)?;

    let secondary = match &args.fallback {
        Some(path) => {
            printer.status("Loading", &display_path(path));
            Some(open_archive(path)?)
        }
        None => None,
    };

    let skin = load(&primary, secondary.as_ref())?;

    print_summary(&skin, printer);
    if args.sprites {
        print_sprites(&skin, printer);
    }
    if args.palette {
        print_palette(&skin, printer);
    }

    Ok(())
}

fn print_summary(skin: &LoadedSkin, printer: &Printer) {
    printer.info("Sprites", &plural(skin.sprites.len(), "sprite", "sprites"));
    printer.info("Glyphs", &plural(skin.glyphs.len(), "glyph", "glyphs"));
    printer.info(
        "Palette",
        if skin.palette.is_some() {
            "22 colours"
        } else {
            "none"
        },
    );
    printer.info(
        "Chrome",
        if skin.native_chrome {
            "skin-supplied titlebars"
        } else {
            "fallback titlebars"
        },
    );

    let config = &skin.config;
    printer.info(
        "Playlist",
        &format!(
            "{} on {}, selected {}, font {}",
            config.normal_text,
            config.normal_background,
            config.selected_background,
            printer.bold(&config.font)
        ),
    );

    if skin.palette.is_none() {
        printer.warning("Missing", "no genex sheet; UI palette unavailable");
    }
}

fn print_sprites(skin: &LoadedSkin, printer: &Printer) {
    for (id, sprite) in skin.sprites.iter() {
        println!(
            "{} {}",
            id,
            printer.dim(&format!("{}x{}", sprite.width(), sprite.height()))
        );
    }
}

fn print_palette(skin: &LoadedSkin, printer: &Printer) {
    let Some(palette) = &skin.palette else {
        return;
    };
    for (name, colour) in palette.fields() {
        println!("{} {}", printer.cyan(&colour.to_string()), name);
    }
}
