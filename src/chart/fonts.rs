// src/chart/fonts.rs

use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;
use plotters::style::{register_font, FontStyle};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use super::FONT_FAMILY;

/// Fonts with Cyrillic coverage found on common Linux, macOS and Windows installs.
static SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static INSTALLED: OnceCell<Option<PathBuf>> = OnceCell::new();

/// Register the chart font once per process.
///
/// `preferred` wins when it loads; otherwise the system candidates are tried in
/// order. Returns the font in use, or `None` when charts will render without text.
/// Later calls return the first outcome regardless of their argument.
pub fn install_chart_font(preferred: Option<&Path>) -> Option<&'static Path> {
    INSTALLED
        .get_or_init(|| {
            if let Some(path) = preferred {
                match register_from(path) {
                    Ok(()) => return Some(path.to_path_buf()),
                    Err(e) => warn!("configured font unusable: {:#}", e),
                }
            }
            let found = SYSTEM_FONT_CANDIDATES
                .iter()
                .map(Path::new)
                .filter(|p| p.is_file())
                .find(|p| register_from(p).is_ok())
                .map(Path::to_path_buf);
            match &found {
                Some(p) => info!(font = %p.display(), "chart font registered"),
                None => warn!("no chart font found; charts will render without text"),
            }
            found
        })
        .as_deref()
}

fn register_from(path: &Path) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    // plotters keeps registered font data for the life of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("{} is not a valid TrueType font", path.display()))
}
