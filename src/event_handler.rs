//! Applies user actions to the slot model
//!
//! One handler, parameterized by slot index, serves all nine slots. The
//! window only translates raw input into [`HotbarEvent`]s and reacts to the
//! returned [`Reaction`].

use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::config::SettingsUpdate;
use crate::desktop_entry::{DesktopEntry, is_descriptor_path};
use crate::launcher::Launcher;
use crate::slots::{SlotError, SlotModel};
use crate::types::Position;

#[derive(Debug, Clone, PartialEq)]
pub enum HotbarEvent {
    /// A file was dropped on a slot
    FileDropped { slot: usize, path: PathBuf },
    /// A file was dropped but no slot could take it
    DropMissed(PathBuf),
    /// Left click on a slot or "Launch" from its menu
    Launch(usize),
    /// "Remove from hotbar"
    Remove(usize),
    /// Slot settings dialog accepted
    EditSlot { slot: usize, name: String, icon: String },
    /// General settings dialog changed a value
    ApplySettings(SettingsUpdate),
    /// Window drag finished at this position
    DragReleased(Position),
    /// Window is closing; last known position if any
    Closing(Option<Position>),
}

/// What the window needs to do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Nothing,
    /// Slot content changed
    RedrawSlot(usize),
    /// Size or window level may have changed
    Relayout,
    /// Blocking warning for the user
    Warning(String),
    /// Blocking error for the user
    Error(String),
}

pub fn handle_event(model: &mut SlotModel, launcher: &dyn Launcher, event: HotbarEvent) -> Reaction {
    match event {
        HotbarEvent::FileDropped { slot, path } => {
            if !is_descriptor_path(&path) {
                warn!(slot, path = %path.display(), "Dropped file is not a .desktop descriptor");
                return Reaction::Warning("Please drop a .desktop file".to_string());
            }
            let entry = match DesktopEntry::read(&path) {
                Ok(entry) => entry,
                Err(e) => {
                    error!(slot, error = ?e, "Failed to read dropped descriptor");
                    return Reaction::Error(format!("Failed to read file: {e:#}"));
                }
            };
            match model.assign(slot, entry, &path) {
                Ok(()) => Reaction::RedrawSlot(slot),
                Err(e) => {
                    info!(slot, path = %path.display(), reason = %e, "Ignoring dropped descriptor");
                    Reaction::Nothing
                }
            }
        }
        HotbarEvent::DropMissed(path) => {
            warn!(path = %path.display(), "Drop did not resolve to a slot");
            Reaction::Warning("Drop the file onto a hotbar slot".to_string())
        }
        HotbarEvent::Launch(slot) => {
            let Some(binding) = model.slot(slot) else {
                return Reaction::Nothing;
            };
            match launcher.launch(&binding.exec) {
                Ok(()) => Reaction::Nothing,
                Err(e) => {
                    error!(slot, exec = %binding.exec, error = ?e, "Failed to launch application");
                    Reaction::Error(format!("Failed to launch application: {e:#}"))
                }
            }
        }
        HotbarEvent::Remove(slot) => {
            model.clear(slot);
            Reaction::RedrawSlot(slot)
        }
        HotbarEvent::EditSlot { slot, name, icon } => match model.rename(slot, name, icon) {
            Ok(()) => Reaction::RedrawSlot(slot),
            Err(e @ SlotError::EmptySlot(_)) => {
                warn!(slot, reason = %e, "Slot emptied while its settings were open");
                Reaction::Nothing
            }
            Err(e) => {
                error!(slot, reason = %e, "Unexpected slot edit failure");
                Reaction::Nothing
            }
        },
        HotbarEvent::ApplySettings(update) => match model.update_settings(update) {
            Ok(()) => Reaction::Relayout,
            Err(e) => {
                warn!(reason = %e, "Rejected settings change");
                Reaction::Nothing
            }
        },
        HotbarEvent::DragReleased(position) => {
            model.record_position(position);
            Reaction::Nothing
        }
        HotbarEvent::Closing(position) => {
            match position {
                Some(position) => model.record_position(position),
                None => model.persist(),
            }
            Reaction::Nothing
        }
    }
}
