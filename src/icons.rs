//! Icon lookup for slot bindings
//!
//! Mirrors the usual freedesktop fallbacks without a full theme
//! implementation: hicolor theme directories first, then explicit paths,
//! then the legacy pixmaps directory. Only PNG files are considered: the
//! active desktop theme is not consulted and `scalable/apps` SVGs are
//! skipped, so apps that ship nothing but an SVG icon show their initials.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::desktop::INITIALS_LEN;
use crate::constants::icons::*;

/// Decoded RGBA8 image, row-major
#[derive(Debug, Clone)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Find an image file for an icon reference (theme name or path)
pub fn resolve_icon(reference: &str) -> Option<PathBuf> {
    if reference.is_empty() {
        return None;
    }

    let data_dirs: Vec<PathBuf> = dirs::data_dir()
        .into_iter()
        .chain(SYSTEM_DATA_DIRS.iter().map(|dir| PathBuf::from(*dir)))
        .collect();
    if let Some(path) = find_theme_icon(reference, &data_dirs) {
        return Some(path);
    }

    if (reference.starts_with('/') || reference.starts_with('.')) && Path::new(reference).exists() {
        return Some(PathBuf::from(reference));
    }

    let pixmap = Path::new(PIXMAPS_DIR).join(format!("{reference}.{EXTENSION}"));
    if pixmap.exists() {
        return Some(pixmap);
    }

    debug!(icon = %reference, "No icon file found");
    None
}

/// `<data dir>/icons/<theme>/<size>/apps/<name>.png`, largest size first
fn find_theme_icon(name: &str, data_dirs: &[PathBuf]) -> Option<PathBuf> {
    if name.contains('/') {
        return None;
    }
    let file_name = format!("{name}.{EXTENSION}");
    data_dirs.iter().find_map(|data_dir| {
        THEMES.iter().find_map(|theme| {
            SIZES.iter().find_map(|size| {
                let candidate = data_dir.join("icons").join(theme).join(size).join("apps").join(&file_name);
                candidate.is_file().then_some(candidate)
            })
        })
    })
}

pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read image {:?}", path))?;
    let image = image::load_from_memory(&bytes)
        .with_context(|| format!("Failed to decode image {:?}", path))?
        .into_rgba8();
    let (width, height) = image.dimensions();
    Ok(RgbaImage { width, height, pixels: image.into_raw() })
}

/// Text shown in place of a missing icon
pub fn initials(name: &str) -> String {
    name.chars().take(INITIALS_LEN).collect()
}
