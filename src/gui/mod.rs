//! egui front end: the hotbar window and its dialogs

mod assets;
mod constants;
mod dialogs;
mod hotbar;

pub use hotbar::run_gui;
