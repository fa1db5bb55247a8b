//! Slot settings, general settings and notice dialogs
//!
//! Each dialog renders into its own immediate viewport so it is not clipped
//! by the tiny hotbar window. Backends without multi-viewport support get an
//! embedded `egui::Window` instead.

use eframe::egui;

use crate::config::document::closest_preset_index;
use crate::config::{AppBinding, Settings, SettingsUpdate, WindowLevel};
use crate::constants::scale::PRESETS;
use crate::gui::constants::*;

pub fn slot_dialog_id() -> egui::ViewportId {
    egui::ViewportId::from_hash_of("hotbar_slot_settings")
}

pub fn general_settings_id() -> egui::ViewportId {
    egui::ViewportId::from_hash_of("hotbar_general_settings")
}

pub fn notice_id() -> egui::ViewportId {
    egui::ViewportId::from_hash_of("hotbar_notice")
}

/// Render `contents` in a separate OS window
///
/// Returns the contents' output (if rendered) and whether the user asked to
/// close the window.
pub fn show_in_viewport<T>(
    ctx: &egui::Context,
    id: egui::ViewportId,
    title: &str,
    size: [f32; 2],
    mut contents: impl FnMut(&mut egui::Ui) -> T,
) -> (Option<T>, bool) {
    let builder = egui::ViewportBuilder::default()
        .with_title(title)
        .with_inner_size(size)
        .with_resizable(false)
        .with_window_level(egui::WindowLevel::AlwaysOnTop);

    ctx.show_viewport_immediate(id, builder, |ctx, class| {
        let output = if matches!(class, egui::ViewportClass::Embedded) {
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| contents(ui))
                .and_then(|response| response.inner)
        } else {
            Some(egui::CentralPanel::default().show(ctx, |ui| contents(ui)).inner)
        };
        let close_requested = ctx.input(|i| i.viewport().close_requested());
        (output, close_requested)
    })
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome<T> {
    Open,
    Accepted(T),
    Cancelled,
}

impl<T> DialogOutcome<T> {
    /// Treat a window-close request on a still-open dialog as cancel
    pub fn or_cancel(outcome: Option<Self>, close_requested: bool) -> Self {
        match outcome.unwrap_or(DialogOutcome::Open) {
            DialogOutcome::Open if close_requested => DialogOutcome::Cancelled,
            other => other,
        }
    }
}

/// Edited name/icon for one slot
#[derive(Debug, Clone, PartialEq)]
pub struct SlotEdit {
    pub slot: usize,
    pub name: String,
    pub icon: String,
}

pub struct SlotDialog {
    slot: usize,
    name: String,
    icon: String,
}

impl SlotDialog {
    pub fn new(slot: usize, binding: &AppBinding) -> Self {
        Self {
            slot,
            name: binding.name.clone(),
            icon: binding.icon.clone(),
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> DialogOutcome<SlotEdit> {
        let mut outcome = DialogOutcome::Open;

        ui.label("Application name:");
        ui.add(egui::TextEdit::singleline(&mut self.name).desired_width(TEXT_FIELD_WIDTH));
        ui.add_space(ITEM_SPACING);

        ui.label("Icon (theme name or image path):");
        ui.add(egui::TextEdit::singleline(&mut self.icon).desired_width(TEXT_FIELD_WIDTH));
        ui.add_space(SECTION_SPACING);

        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                outcome = DialogOutcome::Accepted(SlotEdit {
                    slot: self.slot,
                    name: self.name.clone(),
                    icon: self.icon.clone(),
                });
            }
            if ui.button("Cancel").clicked() {
                outcome = DialogOutcome::Cancelled;
            }
        });

        outcome
    }
}

/// Window level, position lock and scale; changes apply immediately
pub struct GeneralSettingsDialog {
    level: WindowLevel,
    locked: bool,
    scale_index: usize,
}

impl GeneralSettingsDialog {
    pub fn new(settings: &Settings) -> Self {
        Self {
            level: settings.level,
            locked: !settings.is_movable,
            scale_index: closest_preset_index(settings.scale),
        }
    }

    fn current(&self) -> SettingsUpdate {
        SettingsUpdate {
            level: Some(self.level),
            is_movable: Some(!self.locked),
            scale: Some(PRESETS[self.scale_index]),
            window_position: None,
        }
    }

    /// Draw the controls; `Accepted` carries a live change, `Cancelled` means Close
    pub fn ui(&mut self, ui: &mut egui::Ui) -> DialogOutcome<SettingsUpdate> {
        let mut changed = false;

        ui.label("Window level:");
        egui::ComboBox::from_id_salt("hotbar_window_level")
            .selected_text(self.level.label())
            .width(TEXT_FIELD_WIDTH)
            .show_ui(ui, |ui| {
                for level in WindowLevel::ALL {
                    if ui.selectable_value(&mut self.level, level, level.label()).changed() {
                        changed = true;
                    }
                }
            });
        ui.add_space(ITEM_SPACING);

        if ui.checkbox(&mut self.locked, "Lock window position (not draggable)").changed() {
            changed = true;
        }
        ui.add_space(ITEM_SPACING);

        ui.label("Scale:");
        egui::ComboBox::from_id_salt("hotbar_scale")
            .selected_text(format_scale(PRESETS[self.scale_index]))
            .width(TEXT_FIELD_WIDTH)
            .show_ui(ui, |ui| {
                for (index, preset) in PRESETS.iter().enumerate() {
                    if ui.selectable_value(&mut self.scale_index, index, format_scale(*preset)).changed() {
                        changed = true;
                    }
                }
            });
        ui.add_space(SECTION_SPACING);

        if ui.button("Close").clicked() {
            return DialogOutcome::Cancelled;
        }
        if changed {
            DialogOutcome::Accepted(self.current())
        } else {
            DialogOutcome::Open
        }
    }
}

fn format_scale(scale: f64) -> String {
    format!("{scale:.2}x")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

/// Warning or error shown until acknowledged
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn warning(message: String) -> Self {
        Self { kind: NoticeKind::Warning, message }
    }

    pub fn error(message: String) -> Self {
        Self { kind: NoticeKind::Error, message }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Warning => "Warning",
            NoticeKind::Error => "Error",
        }
    }

    /// True once the user pressed OK
    pub fn ui(&self, ui: &mut egui::Ui) -> bool {
        let color = match self.kind {
            NoticeKind::Warning => WARNING_COLOR,
            NoticeKind::Error => ERROR_COLOR,
        };
        ui.colored_label(color, egui::RichText::new(self.title()).strong());
        ui.add_space(ITEM_SPACING);
        ui.label(self.message.as_str());
        ui.add_space(SECTION_SPACING);
        ui.button("OK").clicked()
    }
}
