//! Hotbar window implemented with egui/eframe
//!
//! The window owns the [`SlotModel`] but keeps no business state of its own:
//! input is translated into [`HotbarEvent`]s and the returned [`Reaction`]
//! decides what to repaint or which notice to show.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::{debug, info};

use super::assets::{IconCache, Skin};
use super::constants::*;
use super::dialogs::{
    DialogOutcome, GeneralSettingsDialog, Notice, SlotDialog, general_settings_id, notice_id,
    show_in_viewport, slot_dialog_id,
};
use crate::config::WindowLevel;
use crate::constants::geometry::SLOT_COUNT;
use crate::event_handler::{HotbarEvent, Reaction, handle_event};
use crate::hover::{HoverTracker, drop_target};
use crate::icons;
use crate::launcher::ShellLauncher;
use crate::layout::Layout;
use crate::menu::{self, MenuAction, MenuEntry};
use crate::slots::SlotModel;
use crate::types::{Position, Rect, Size};

fn to_egui_rect(rect: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(rect.x as f32, rect.y as f32),
        egui::vec2(rect.width as f32, rect.height as f32),
    )
}

fn to_position(pos: egui::Pos2) -> Position {
    Position::new(pos.x as i32, pos.y as i32)
}

fn panel_size(size: Size) -> egui::Vec2 {
    egui::vec2(size.width as f32, size.height as f32)
}

fn window_level(level: WindowLevel) -> egui::WindowLevel {
    match level {
        WindowLevel::AlwaysOnTop => egui::WindowLevel::AlwaysOnTop,
        WindowLevel::Normal => egui::WindowLevel::Normal,
        WindowLevel::AlwaysOnBottom => egui::WindowLevel::AlwaysOnBottom,
    }
}

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

/// Draw menu entries; returns the chosen action, if any
fn show_menu(ui: &mut egui::Ui, entries: &[MenuEntry]) -> Option<MenuAction> {
    let mut chosen = None;
    for entry in entries {
        match entry.action {
            Some(action) => {
                if ui.add_enabled(entry.enabled, egui::Button::new(entry.label.as_str())).clicked() {
                    chosen = Some(action);
                    ui.close();
                }
            }
            None => {
                ui.add_enabled(false, egui::Label::new(egui::RichText::new(entry.label.as_str()).strong()));
            }
        }
    }
    chosen
}

/// Background drags move the window only when they begin outside every slot
fn starts_window_drag(layout: &Layout, press_origin: Option<Position>, is_movable: bool) -> bool {
    is_movable && press_origin.is_none_or(|origin| layout.slot_at(origin).is_none())
}

struct HotbarApp {
    model: SlotModel,
    launcher: ShellLauncher,
    layout: Layout,
    hover: HoverTracker,
    skin: Skin,
    icons: IconCache,
    slot_dialog: Option<SlotDialog>,
    settings_dialog: Option<GeneralSettingsDialog>,
    notice: Option<Notice>,
    dragging: bool,
    pointer_inside: bool,
    needs_placement: bool,
    last_position: Option<Position>,
    /// Last pointer position seen while files hovered the window
    file_drag_pointer: Option<Position>,
    shutdown: Arc<AtomicBool>,
}

impl HotbarApp {
    fn new(cc: &CreationContext<'_>, model: SlotModel, assets_dir: Option<PathBuf>, shutdown: Arc<AtomicBool>) -> Self {
        info!("Initializing hotbar window");
        // Layout is computed in logical points
        cc.egui_ctx.set_zoom_factor(1.0);

        let settings = model.settings();
        let layout = Layout::for_scale(settings.scale);
        let needs_placement = settings.window_position.is_none();
        let last_position = settings.window_position;

        Self {
            launcher: ShellLauncher,
            layout,
            hover: HoverTracker::new(),
            skin: Skin::load(&cc.egui_ctx, assets_dir.as_deref()),
            icons: IconCache::default(),
            slot_dialog: None,
            settings_dialog: None,
            notice: None,
            dragging: false,
            pointer_inside: false,
            needs_placement,
            last_position,
            file_drag_pointer: None,
            shutdown,
            model,
        }
    }

    fn dispatch(&mut self, ctx: &egui::Context, event: HotbarEvent) {
        let reaction = handle_event(&mut self.model, &self.launcher, event);
        match reaction {
            Reaction::Nothing => {}
            Reaction::RedrawSlot(slot) => {
                self.icons.invalidate(slot);
                ctx.request_repaint();
            }
            Reaction::Relayout => self.relayout(ctx),
            Reaction::Warning(message) => self.notice = Some(Notice::warning(message)),
            Reaction::Error(message) => self.notice = Some(Notice::error(message)),
        }
    }

    fn relayout(&mut self, ctx: &egui::Context) {
        let settings = self.model.settings();
        self.layout = Layout::for_scale(settings.scale);
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(panel_size(self.layout.panel)));
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(window_level(settings.level)));
        self.hover.on_leave();
        debug!(scale = settings.scale, width = self.layout.panel.width, height = self.layout.panel.height, "Relayout");
    }

    /// Centre at the bottom of the monitor on first start
    fn place_initially(&mut self, ctx: &egui::Context) {
        if !self.needs_placement {
            return;
        }
        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };
        let origin = self.layout.bottom_center(Size::new(monitor.x as i32, monitor.y as i32));
        info!(x = origin.x, y = origin.y, "Placing hotbar at bottom centre");
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(origin.x as f32, origin.y as f32)));
        self.needs_placement = false;
    }

    fn track_window_position(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.last_position = Some(to_position(rect.min));
        }
    }

    /// Record the position once the native window drag is over
    fn finish_drag(&mut self, ctx: &egui::Context) {
        if self.dragging && !ctx.input(|i| i.pointer.primary_down()) {
            self.dragging = false;
            if let Some(position) = self.last_position {
                self.dispatch(ctx, HotbarEvent::DragReleased(position));
            }
        }
    }

    fn update_hover(&mut self, ctx: &egui::Context) {
        let pointer = ctx.input(|i| i.pointer.hover_pos());
        let event = match pointer {
            Some(pos) if !self.dragging => {
                self.pointer_inside = true;
                self.hover.on_pointer_move(to_position(pos), &self.layout)
            }
            None if self.pointer_inside => {
                self.pointer_inside = false;
                self.hover.on_leave()
            }
            _ => return,
        };
        if event.is_transition() {
            ctx.request_repaint();
        }
    }

    fn handle_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped, pointer) = ctx.input(|i| {
            (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone(), i.pointer.hover_pos())
        });
        let pointer = pointer.map(to_position);
        if hovering && pointer.is_some() {
            self.file_drag_pointer = pointer;
        }
        if !hovering && dropped.is_empty() {
            self.file_drag_pointer = None;
        }
        let Some(path) = dropped.into_iter().find_map(|file| file.path) else {
            return;
        };

        let candidates = [pointer, self.file_drag_pointer.take()];
        let target = drop_target(&self.layout, &candidates, self.hover.current(), self.model.slots());
        match target {
            Some(slot) => self.dispatch(ctx, HotbarEvent::FileDropped { slot, path }),
            None => self.dispatch(ctx, HotbarEvent::DropMissed(path)),
        }
    }

    fn paint_background(&self, ui: &egui::Ui, panel: egui::Rect) {
        let painter = ui.painter();
        match &self.skin.background {
            Some(texture) => {
                painter.image(texture.id(), panel, full_uv(), egui::Color32::WHITE);
            }
            None => {
                painter.rect_filled(panel, FALLBACK_CORNER_RADIUS, FALLBACK_BACKGROUND);
                painter.rect_stroke(
                    panel,
                    FALLBACK_CORNER_RADIUS,
                    egui::Stroke::new(FALLBACK_BORDER_WIDTH, FALLBACK_BORDER),
                    egui::StrokeKind::Inside,
                );
            }
        }
    }

    fn paint_slot(&mut self, ui: &egui::Ui, slot: usize, rect: egui::Rect) {
        let Some(binding) = self.model.slot(slot) else {
            return;
        };
        if let Some(texture) = self.icons.get(ui.ctx(), slot, binding) {
            let edge = self.layout.icon_size() as f32;
            let icon_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(edge, edge));
            ui.painter().image(texture.id(), icon_rect, full_uv(), egui::Color32::WHITE);
        } else if !binding.name.is_empty() {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                icons::initials(&binding.name),
                egui::FontId::proportional(self.layout.initials_font_size() as f32),
                INITIALS_COLOR,
            );
        }
    }

    fn paint_selection(&self, ui: &egui::Ui) {
        let Some(slot) = self.hover.current() else {
            return;
        };
        // Every frame shares slot 0's size; only the origin moves
        let origin = self.layout.hover[slot].origin();
        let size = self.layout.selection_size();
        let rect = to_egui_rect(Rect::new(origin.x, origin.y, size.width, size.height));
        match &self.skin.selection {
            Some(texture) => {
                ui.painter().image(texture.id(), rect, full_uv(), egui::Color32::WHITE);
            }
            None => {
                ui.painter().rect_stroke(
                    rect.shrink(FALLBACK_SELECTION_WIDTH),
                    0.0,
                    egui::Stroke::new(FALLBACK_SELECTION_WIDTH, FALLBACK_SELECTION),
                    egui::StrokeKind::Inside,
                );
            }
        }
    }

    /// Paint the bar and collect what the user did this frame
    fn hotbar_ui(&mut self, ui: &mut egui::Ui) -> (Vec<HotbarEvent>, Vec<(usize, MenuAction)>) {
        let mut events = Vec::new();
        let mut actions = Vec::new();
        let blocked = self.notice.is_some();

        let panel = egui::Rect::from_min_size(egui::Pos2::ZERO, panel_size(self.layout.panel));
        self.paint_background(ui, panel);

        let background = ui.interact(panel, ui.id().with("hotbar_background"), egui::Sense::drag());
        let press_origin = ui.input(|i| i.pointer.press_origin()).map(to_position);
        if background.drag_started()
            && !blocked
            && starts_window_drag(&self.layout, press_origin, self.model.settings().is_movable)
        {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
            self.dragging = true;
        }

        for slot in 0..SLOT_COUNT {
            let rect = to_egui_rect(self.layout.slots[slot]);
            // Slots claim drags as well as clicks
            let response =
                ui.interact(rect, ui.id().with(("hotbar_slot", slot)), egui::Sense::click_and_drag());
            self.paint_slot(ui, slot, rect);
            if blocked {
                continue;
            }
            if response.clicked() {
                events.push(HotbarEvent::Launch(slot));
            }
            let entries = menu::slot_menu(self.model.slot(slot));
            response.context_menu(|ui| {
                if let Some(action) = show_menu(ui, &entries) {
                    actions.push((slot, action));
                }
            });
        }

        self.paint_selection(ui);
        (events, actions)
    }

    fn run_menu_action(&mut self, ctx: &egui::Context, slot: usize, action: MenuAction) {
        match action {
            MenuAction::Launch => self.dispatch(ctx, HotbarEvent::Launch(slot)),
            MenuAction::Remove => self.dispatch(ctx, HotbarEvent::Remove(slot)),
            MenuAction::SlotSettings => {
                if let Some(binding) = self.model.slot(slot) {
                    self.slot_dialog = Some(SlotDialog::new(slot, binding));
                }
            }
            MenuAction::GeneralSettings => {
                if self.settings_dialog.is_some() {
                    ctx.send_viewport_cmd_to(general_settings_id(), egui::ViewportCommand::Focus);
                } else {
                    self.settings_dialog = Some(GeneralSettingsDialog::new(self.model.settings()));
                }
            }
            MenuAction::Quit => {
                info!("Quit requested from slot menu");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = self.slot_dialog.as_mut() {
            let (outcome, close) =
                show_in_viewport(ctx, slot_dialog_id(), SLOT_SETTINGS_TITLE, SLOT_DIALOG_SIZE, |ui| dialog.ui(ui));
            match DialogOutcome::or_cancel(outcome, close) {
                DialogOutcome::Open => {}
                DialogOutcome::Accepted(edit) => {
                    self.slot_dialog = None;
                    self.dispatch(ctx, HotbarEvent::EditSlot { slot: edit.slot, name: edit.name, icon: edit.icon });
                }
                DialogOutcome::Cancelled => {
                    debug!(slot = dialog.slot(), "Slot settings cancelled");
                    self.slot_dialog = None;
                }
            }
        }

        if let Some(dialog) = self.settings_dialog.as_mut() {
            let (outcome, close) = show_in_viewport(
                ctx,
                general_settings_id(),
                GENERAL_SETTINGS_TITLE,
                SETTINGS_DIALOG_SIZE,
                |ui| dialog.ui(ui),
            );
            match DialogOutcome::or_cancel(outcome, close) {
                DialogOutcome::Open => {}
                DialogOutcome::Accepted(update) => self.dispatch(ctx, HotbarEvent::ApplySettings(update)),
                DialogOutcome::Cancelled => self.settings_dialog = None,
            }
        }

        if let Some(notice) = self.notice.as_ref() {
            let (acknowledged, close) =
                show_in_viewport(ctx, notice_id(), notice.title(), NOTICE_DIALOG_SIZE, |ui| notice.ui(ui));
            if acknowledged.unwrap_or(false) || close {
                self.notice = None;
            }
        }
    }
}

impl eframe::App for HotbarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.shutdown.load(Ordering::Relaxed) {
            info!("Termination signal received, closing");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.place_initially(ctx);
        self.track_window_position(ctx);
        self.finish_drag(ctx);
        self.update_hover(ctx);
        if self.notice.is_none() {
            self.handle_drops(ctx);
        }

        let (events, actions) = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.hotbar_ui(ui))
            .inner;

        for event in events {
            self.dispatch(ctx, event);
        }
        for (slot, action) in actions {
            self.run_menu_action(ctx, slot, action);
        }

        self.show_dialogs(ctx);

        ctx.request_repaint_after(Duration::from_millis(SIGNAL_POLL_INTERVAL_MS));
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        handle_event(&mut self.model, &self.launcher, HotbarEvent::Closing(self.last_position));
        info!("Hotbar exiting");
    }
}

pub fn run_gui(model: SlotModel, assets_dir: Option<PathBuf>, shutdown: Arc<AtomicBool>) -> Result<()> {
    let settings = model.settings();
    let layout = Layout::for_scale(settings.scale);

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size(panel_size(layout.panel))
        .with_resizable(false)
        .with_decorations(false)
        .with_transparent(true)
        .with_drag_and_drop(true)
        .with_window_level(window_level(settings.level));
    if let Some(position) = settings.window_position {
        viewport = viewport.with_position([position.x as f32, position.y as f32]);
    }

    let options = NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(HotbarApp::new(cc, model, assets_dir, shutdown)))),
    )
    .map_err(|err| anyhow!("Failed to launch hotbar window: {err}"))
}
