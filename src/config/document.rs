//! On-disk document: global settings plus the nine slot bindings
//!
//! Every field carries a serde default so that partially written or older
//! files still load; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::constants::{geometry::SLOT_COUNT, scale};
use crate::types::Position;

/// Window stacking level
///
/// Stored as an integer (0 = on top, 1 = normal, 2 = on bottom). Any other
/// number loads as `Normal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum WindowLevel {
    #[default]
    AlwaysOnTop,
    Normal,
    AlwaysOnBottom,
}

impl WindowLevel {
    pub const ALL: [WindowLevel; 3] = [
        WindowLevel::AlwaysOnTop,
        WindowLevel::Normal,
        WindowLevel::AlwaysOnBottom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WindowLevel::AlwaysOnTop => "Always on top",
            WindowLevel::Normal => "Normal",
            WindowLevel::AlwaysOnBottom => "Always on bottom (desktop widget)",
        }
    }
}

impl From<i64> for WindowLevel {
    fn from(value: i64) -> Self {
        match value {
            0 => WindowLevel::AlwaysOnTop,
            2 => WindowLevel::AlwaysOnBottom,
            _ => WindowLevel::Normal,
        }
    }
}

impl From<WindowLevel> for u8 {
    fn from(level: WindowLevel) -> Self {
        match level {
            WindowLevel::AlwaysOnTop => 0,
            WindowLevel::Normal => 1,
            WindowLevel::AlwaysOnBottom => 2,
        }
    }
}

/// Global window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub level: WindowLevel,

    #[serde(default = "default_is_movable")]
    pub is_movable: bool,

    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Last top-left corner of the window, absent until first saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_position: Option<Position>,
}

fn default_is_movable() -> bool {
    true
}

fn default_scale() -> f64 {
    scale::DEFAULT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: WindowLevel::default(),
            is_movable: default_is_movable(),
            scale: default_scale(),
            window_position: None,
        }
    }
}

/// Subset of settings fields to merge; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsUpdate {
    pub level: Option<WindowLevel>,
    pub is_movable: Option<bool>,
    pub scale: Option<f64>,
    pub window_position: Option<Position>,
}

impl Settings {
    /// Merge the provided fields into these settings
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(level) = update.level {
            self.level = level;
        }
        if let Some(is_movable) = update.is_movable {
            self.is_movable = is_movable;
        }
        if let Some(scale) = update.scale {
            self.scale = scale;
        }
        if let Some(position) = update.window_position {
            self.window_position = Some(position);
        }
    }

    /// Replace a scale that cannot produce a layout with the default
    pub(crate) fn validate_and_clamp(&mut self) {
        if !is_valid_scale(self.scale) {
            warn!(scale = self.scale, using = scale::DEFAULT, "Invalid scale in config, using default");
            self.scale = scale::DEFAULT;
        }
    }
}

pub fn is_valid_scale(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Preset from the scale ladder nearest to `current` (first wins on ties)
pub fn closest_preset_index(current: f64) -> usize {
    scale::PRESETS
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best, best_distance), (index, preset)| {
            let distance = (preset - current).abs();
            if distance < best_distance {
                (index, distance)
            } else {
                (best, best_distance)
            }
        })
        .0
}

/// Application bound to one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppBinding {
    #[serde(default)]
    pub name: String,

    /// Theme icon name, image path, or empty
    #[serde(default)]
    pub icon: String,

    /// Raw Exec line, field codes included
    #[serde(default)]
    pub exec: String,

    /// Descriptor the binding was created from
    #[serde(rename = "path", default)]
    pub source_path: PathBuf,
}

/// The nine slots, indexed 0..9
///
/// Serialized as a JSON array; loading pads short arrays with empty slots,
/// truncates long ones and drops bindings that have no Exec line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<AppBinding>>", into = "Vec<Option<AppBinding>>")]
pub struct SlotCollection([Option<AppBinding>; SLOT_COUNT]);

impl SlotCollection {
    pub fn get(&self, index: usize) -> Option<&AppBinding> {
        self.0[index].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut AppBinding> {
        self.0[index].as_mut()
    }

    pub fn set(&mut self, index: usize, binding: Option<AppBinding>) {
        self.0[index] = binding;
    }

    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }
}

impl From<Vec<Option<AppBinding>>> for SlotCollection {
    fn from(entries: Vec<Option<AppBinding>>) -> Self {
        if entries.len() > SLOT_COUNT {
            warn!(found = entries.len(), max = SLOT_COUNT, "Too many slots in config, extra entries ignored");
        }
        let mut slots = SlotCollection::default();
        for (index, entry) in entries.into_iter().take(SLOT_COUNT).enumerate() {
            match entry {
                Some(binding) if binding.exec.trim().is_empty() => {
                    warn!(slot = index, name = %binding.name, "Slot binding without Exec in config, dropping");
                }
                other => slots.0[index] = other,
            }
        }
        slots
    }
}

impl From<SlotCollection> for Vec<Option<AppBinding>> {
    fn from(slots: SlotCollection) -> Self {
        slots.0.into_iter().collect()
    }
}

/// Whole persisted file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedDocument {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub slots: SlotCollection,
}
