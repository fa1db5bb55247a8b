//! Skin images and icon textures

use eframe::egui;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::AppBinding;
use crate::constants::assets;
use crate::icons::{self, RgbaImage};

/// Locate a skin file: explicit dir, then next to the executable, then cwd
pub fn find_asset(name: &str, override_dir: Option<&Path>) -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = override_dir {
        candidates.push(dir.join(name));
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        candidates.push(exe_dir.join(assets::DIR).join(name));
        candidates.push(exe_dir.join(name));
    }
    candidates.push(PathBuf::from(assets::DIR).join(name));
    candidates.push(PathBuf::from(name));

    let found = candidates.into_iter().find(|path| path.is_file());
    if found.is_none() {
        warn!(image = name, "Skin image not found, using painted fallback");
    }
    found
}

fn to_texture(ctx: &egui::Context, name: &str, image: &RgbaImage) -> egui::TextureHandle {
    let color_image = egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.pixels,
    );
    // Pixel-art skin: keep hard edges when stretched
    ctx.load_texture(name, color_image, egui::TextureOptions::NEAREST)
}

fn load_texture(ctx: &egui::Context, name: &str, path: &Path) -> Option<egui::TextureHandle> {
    match icons::load_rgba(path) {
        Ok(image) => Some(to_texture(ctx, name, &image)),
        Err(e) => {
            warn!(path = %path.display(), error = ?e, "Failed to load image");
            None
        }
    }
}

/// Background and selection skin, each optional
pub struct Skin {
    pub background: Option<egui::TextureHandle>,
    pub selection: Option<egui::TextureHandle>,
}

impl Skin {
    pub fn load(ctx: &egui::Context, assets_dir: Option<&Path>) -> Self {
        let background = find_asset(assets::BACKGROUND, assets_dir)
            .and_then(|path| load_texture(ctx, "hotbar_background", &path));
        let selection = find_asset(assets::SELECTION, assets_dir)
            .and_then(|path| load_texture(ctx, "hotbar_selection", &path));
        Self { background, selection }
    }
}

/// Per-slot icon textures, resolved lazily
///
/// `None` in the cache means "looked up, nothing usable": the slot shows
/// initials until it is invalidated.
#[derive(Default)]
pub struct IconCache {
    textures: HashMap<usize, Option<egui::TextureHandle>>,
}

impl IconCache {
    pub fn get(&mut self, ctx: &egui::Context, slot: usize, binding: &AppBinding) -> Option<&egui::TextureHandle> {
        self.textures
            .entry(slot)
            .or_insert_with(|| {
                let path = icons::resolve_icon(&binding.icon)?;
                debug!(slot, icon = %binding.icon, path = %path.display(), "Resolved slot icon");
                load_texture(ctx, &format!("slot_icon_{slot}"), &path)
            })
            .as_ref()
    }

    pub fn invalidate(&mut self, slot: usize) {
        self.textures.remove(&slot);
    }
}
