//! Notepad - a minimal desktop text editor
//!
//! Text area, a command bar, light/dark theme that follows the system,
//! and a confirmation step before loading large files.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod dialogs;

use app::NotepadApp;
use eframe::NativeOptions;
use notecore::{Settings, ThemeMode};

fn main() -> eframe::Result<()> {
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    notecore::logging::init(settings.log_level());
    if let Some(e) = settings_error {
        log::warn!(
            "ignoring {}: {}",
            notecore::settings::settings_path().display(),
            e
        );
    }
    log::info!("Notepad {} starting", env!("CARGO_PKG_VERSION"));

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size())
            .with_min_inner_size([320.0, 200.0])
            .with_title(notecore::Document::new().title()),
        centered: true,
        // a theme forced in settings must not be overridden on OS changes
        follow_system_theme: settings.theme == ThemeMode::System,
        ..Default::default()
    };

    eframe::run_native(
        notecore::APP_NAME,
        options,
        Box::new(move |cc| Box::new(NotepadApp::new(cc, settings))),
    )
}
