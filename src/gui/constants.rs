//! GUI-specific constants for dialogs, fallback skin colors and intervals

/// Window titles
pub const APP_TITLE: &str = "HotBar";
pub const SLOT_SETTINGS_TITLE: &str = "Slot settings";
pub const GENERAL_SETTINGS_TITLE: &str = "General settings";

/// Dialog dimensions
pub const SLOT_DIALOG_SIZE: [f32; 2] = [340.0, 210.0];
pub const SETTINGS_DIALOG_SIZE: [f32; 2] = [320.0, 230.0];
pub const NOTICE_DIALOG_SIZE: [f32; 2] = [360.0, 130.0];

/// Layout spacing
pub const SECTION_SPACING: f32 = 12.0;
pub const ITEM_SPACING: f32 = 6.0;
pub const TEXT_FIELD_WIDTH: f32 = 300.0;

/// Fallback skin when hotbar.png is missing
pub const FALLBACK_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x2d, 0x2d, 0x2d);
pub const FALLBACK_BORDER: egui::Color32 = egui::Color32::from_rgb(0x55, 0x55, 0x55);
pub const FALLBACK_BORDER_WIDTH: f32 = 2.0;
pub const FALLBACK_CORNER_RADIUS: f32 = 8.0;

/// Fallback selection frame when hotbar_selection.png is missing
pub const FALLBACK_SELECTION: egui::Color32 = egui::Color32::from_rgba_premultiplied(220, 220, 220, 200);
pub const FALLBACK_SELECTION_WIDTH: f32 = 3.0;

/// Initials drawn for slots without an icon
pub const INITIALS_COLOR: egui::Color32 = egui::Color32::WHITE;

/// Notice colors
pub const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 140, 0);
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// How often the UI wakes up to check for termination signals
pub const SIGNAL_POLL_INTERVAL_MS: u64 = 250;
