//! Export command implementation.
//!
//! Loads a skin archive and writes its sprites and glyphs as PNG files with
//! a JSON manifest.

use std::path::PathBuf;

use clap::Args;

use crate::archive::open_archive;
use crate::compose::load;
use crate::error::Result;
use crate::export::export_skin;
use crate::output::{display_path, plural, Printer};

/// Export a skin's sprites and glyphs as PNG files
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Skin archive to export
    pub skin: PathBuf,

    /// Reference archive completing sheets the skin omits
    #[arg(long, value_name = "PATH")]
    pub fallback: Option<PathBuf>,

    /// Output directory (default: the archive's stem)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Integer scale factor for the written PNGs
    #[arg(long, default_value_t = 1)]
    pub scale: u32,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
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

    let output = args.output.clone().unwrap_or_else(|| {
        let stem = args
            .skin
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "skin".to_string());
        PathBuf::from(stem)
    });

    printer.status("Exporting", &display_path(&output));
    let written = export_skin(&skin, &output, args.scale)?;

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(written, "file", "files"),
            display_path(&output)
        ),
    );

    Ok(())
}
