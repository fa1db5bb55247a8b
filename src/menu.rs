//! Context menu contents for a slot

use crate::config::AppBinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Launch,
    Remove,
    SlotSettings,
    GeneralSettings,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub enabled: bool,
    /// `None` for title rows and hints
    pub action: Option<MenuAction>,
}

impl MenuEntry {
    fn title(label: impl Into<String>) -> Self {
        Self { label: label.into(), enabled: false, action: None }
    }

    fn item(label: &str, action: MenuAction) -> Self {
        Self { label: label.to_string(), enabled: true, action: Some(action) }
    }
}

/// Entries for the slot's right-click menu
pub fn slot_menu(binding: Option<&AppBinding>) -> Vec<MenuEntry> {
    let mut entries = match binding {
        Some(binding) => {
            let title = if binding.name.is_empty() { "Unknown app" } else { binding.name.as_str() };
            vec![
                MenuEntry::title(title),
                MenuEntry::item("Launch", MenuAction::Launch),
                MenuEntry::item("Remove from hotbar", MenuAction::Remove),
                MenuEntry::item("Slot settings…", MenuAction::SlotSettings),
            ]
        }
        None => vec![
            MenuEntry::title("Empty slot"),
            MenuEntry::title("Drop a .desktop file"),
        ],
    };
    entries.push(MenuEntry::item("General settings…", MenuAction::GeneralSettings));
    entries.push(MenuEntry::item("Quit", MenuAction::Quit));
    entries
}
