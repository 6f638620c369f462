//! Notepad application
//!
//! One window: the text area fills it, the command bar sits underneath.
//! Button actions that touch the filesystem run synchronously on the UI
//! thread and report failures through native dialogs.

use crate::dialogs::{self, LargeFilePrompt};
use egui::text::{CCursor, CCursorRange, LayoutJob};
use egui::text_edit::TextEditState;
use egui::{Color32, Context, FontId, Id, Key, Modifiers};
use notecore::clipboard::Clipboard;
use notecore::document::SaveOutcome;
use notecore::theme::ThemeTracker;
use notecore::widgets::{command_bar, CommandButton};
use notecore::{open_guarded, Document, NoteTheme, OpenOutcome, Selection, Settings};
use std::path::{Path, PathBuf};

/// Everything the command bar and keyboard shortcuts can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    Save,
    Cut,
    Copy,
    Paste,
    About,
    Exit,
}

/// Map a key press to a file command. Clipboard keys stay with the text area.
pub fn shortcut_command(key: Key, modifiers: Modifiers) -> Option<Command> {
    if !modifiers.command || modifiers.shift || modifiers.alt {
        return None;
    }
    match key {
        Key::N => Some(Command::New),
        Key::O => Some(Command::Open),
        Key::S => Some(Command::Save),
        _ => None,
    }
}

/// Layout for the text area with word wrap off: every line is a single row.
fn unwrapped_layout_job(text: &str, font: FontId, color: Color32) -> LayoutJob {
    LayoutJob::simple(text.to_owned(), font, color, f32::INFINITY)
}

/// Application state
pub struct NotepadApp {
    document: Document,
    clipboard: Clipboard,
    settings: Settings,
    theme: NoteTheme,
    theme_tracker: ThemeTracker,
    /// Title last sent to the window
    window_title: String,
    /// Error the native dialog could not show; drawn in-app until dismissed
    error_notice: Option<ErrorNotice>,
}

/// An error message waiting for the user to acknowledge it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: String,
    pub message: String,
}

impl NotepadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let document = Document::new();
        Self {
            window_title: document.title(),
            document,
            clipboard: Clipboard::new(),
            theme: NoteTheme::default().with_font_size(settings.font_size),
            theme_tracker: ThemeTracker::default(),
            settings,
            error_notice: None,
        }
    }

    fn editor_id() -> Id {
        Id::new("notepad_editor")
    }

    fn run(&mut self, ctx: &Context, command: Command) {
        log::debug!("command: {:?}", command);
        match command {
            Command::New => self.new_document(ctx),
            Command::Open => self.open_document(ctx),
            Command::Save => self.save_document(),
            Command::Cut => self.cut(ctx),
            Command::Copy => self.copy(ctx),
            Command::Paste => self.paste(ctx),
            Command::About => dialogs::show_about(),
            Command::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    // ---------------------------------------------------------------
    // File operations
    // ---------------------------------------------------------------

    fn new_document(&mut self, ctx: &Context) {
        self.document.reset();
        Self::place_caret(ctx, 0);
    }

    fn open_document(&mut self, ctx: &Context) {
        match dialogs::pick_open_path() {
            Some(path) => self.open_path(ctx, &path),
            None => log::debug!("open cancelled"),
        }
    }

    fn open_path(&mut self, ctx: &Context, path: &Path) {
        match open_guarded(&mut self.document, path, &mut LargeFilePrompt) {
            Ok(OpenOutcome::Loaded { size }) => {
                log::info!("opened {} ({} bytes)", path.display(), size);
                Self::place_caret(ctx, 0);
            }
            Ok(OpenOutcome::Declined) => {}
            Err(e) => {
                log::error!("failed to open {}: {}", path.display(), e);
                self.report_error("Open File", format!("Failed to open file:\n{}", e));
            }
        }
    }

    fn save_document(&mut self) {
        let result = match self.document.save() {
            Ok(SaveOutcome::Saved(path)) => Ok(path),
            Ok(SaveOutcome::NeedsPath) => {
                let Some(path) = dialogs::pick_save_path() else {
                    log::debug!("save cancelled");
                    return;
                };
                self.document.save_to(&path).map(|()| path)
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(path) => log::info!("saved {}", path.display()),
            Err(e) => {
                log::error!("failed to save {}: {}", e.path().display(), e);
                self.report_error("Save File", format!("Failed to save file:\n{}", e));
            }
        }
    }

    fn report_error(&mut self, title: &str, message: String) {
        if !dialogs::show_error(title, &message) {
            log::warn!("native error dialog unavailable, showing it in the window");
            self.error_notice = Some(ErrorNotice { title: title.to_string(), message });
        }
    }

    // ---------------------------------------------------------------
    // Clipboard operations on the text area's selection
    // ---------------------------------------------------------------

    fn selection(ctx: &Context) -> Selection {
        TextEditState::load(ctx, Self::editor_id())
            .and_then(|state| state.cursor.char_range())
            .map(|range| Selection::new(range.primary.index, range.secondary.index))
            .unwrap_or_default()
    }

    fn place_caret(ctx: &Context, caret: usize) {
        let id = Self::editor_id();
        let mut state = TextEditState::load(ctx, id).unwrap_or_default();
        state
            .cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(caret))));
        state.store(ctx, id);
        ctx.memory_mut(|mem| mem.request_focus(id));
    }

    fn copy(&mut self, ctx: &Context) {
        let sel = Self::selection(ctx);
        if sel.is_empty() {
            return;
        }
        self.clipboard.set_text(&self.document.selected_text(sel));
        ctx.memory_mut(|mem| mem.request_focus(Self::editor_id()));
    }

    fn cut(&mut self, ctx: &Context) {
        let sel = Self::selection(ctx);
        if sel.is_empty() {
            return;
        }
        let removed = self.document.cut(sel);
        self.clipboard.set_text(&removed);
        Self::place_caret(ctx, sel.start);
    }

    fn paste(&mut self, ctx: &Context) {
        if let Some(text) = self.clipboard.get_text() {
            let caret = self.document.paste(Self::selection(ctx), &text);
            Self::place_caret(ctx, caret);
        }
    }

    // ---------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------

    /// Pull file shortcuts out of the event queue before the text area sees them.
    fn take_shortcuts(ctx: &Context) -> Vec<Command> {
        let mut commands = Vec::new();
        ctx.input_mut(|i| {
            i.events.retain(|event| match event {
                egui::Event::Key { key, pressed: true, modifiers, .. } => {
                    match shortcut_command(*key, *modifiers) {
                        Some(command) => {
                            commands.push(command);
                            false
                        }
                        None => true,
                    }
                }
                _ => true,
            });
        });
        commands
    }

    fn dropped_file(ctx: &Context) -> Option<PathBuf> {
        ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()))
    }

    // ---------------------------------------------------------------
    // UI rendering
    // ---------------------------------------------------------------

    fn render_command_bar(ui: &mut egui::Ui) -> Option<Command> {
        let mut clicked = None;
        command_bar(ui, |ui| {
            let buttons = [
                ("New", Command::New),
                ("Open", Command::Open),
                ("Save", Command::Save),
                ("Cut", Command::Cut),
                ("Copy", Command::Copy),
                ("Paste", Command::Paste),
                ("About", Command::About),
            ];
            for (label, command) in buttons {
                if ui.add(CommandButton::new(label)).clicked() {
                    clicked = Some(command);
                }
            }
            if ui.add(CommandButton::danger("Exit")).clicked() {
                clicked = Some(Command::Exit);
            }
        });
        clicked
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        let font = egui::FontId::proportional(self.theme.font_size_body);
        let word_wrap = self.settings.word_wrap;
        let scroll = if word_wrap {
            egui::ScrollArea::vertical()
        } else {
            egui::ScrollArea::both()
        };

        // TextEdit caps its wrap width at the available width, so a layouter
        // is the only way to keep long lines on one row.
        let mut unwrapped = |ui: &egui::Ui, text: &str, _wrap_width: f32| {
            let color = ui
                .visuals()
                .override_text_color
                .unwrap_or_else(|| ui.visuals().widgets.inactive.text_color());
            let job = unwrapped_layout_job(text, font.clone(), color);
            ui.fonts(|fonts| fonts.layout_job(job))
        };

        scroll.auto_shrink([false, false]).show(ui, |ui| {
            let available = ui.available_size();
            let width = if word_wrap { available.x } else { f32::INFINITY };
            let rows = (available.y / (self.theme.font_size_body * 1.4)).max(4.0) as usize;

            let mut editor = egui::TextEdit::multiline(&mut self.document.text)
                .id(Self::editor_id())
                .font(font.clone())
                .desired_width(width)
                .desired_rows(rows)
                .frame(false)
                .lock_focus(true);
            if !word_wrap {
                editor = editor.layouter(&mut unwrapped);
            }
            editor.show(ui);
        });
    }

    /// Draw the pending error, if any. Returns true once the user dismisses it.
    fn render_error_notice(ctx: &Context, notice: &ErrorNotice) -> bool {
        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(notice.message.as_str());
                ui.add_space(8.0);
                if ui.add(CommandButton::new("OK")).clicked() {
                    dismissed = true;
                }
            });
        dismissed
    }

    fn sync_title(&mut self, ctx: &Context) {
        let title = self.document.title();
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}

impl eframe::App for NotepadApp {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        let visuals_dark = ctx.style().visuals.dark_mode;
        let system = frame.info().system_theme;
        if let Some(dark) = self.theme_tracker.update(self.settings.theme, system, visuals_dark) {
            log::debug!("applying {} theme", if dark { "dark" } else { "light" });
            self.theme.apply(ctx, dark);
        }

        let mut commands = Self::take_shortcuts(ctx);

        let bar = egui::TopBottomPanel::bottom("command_bar")
            .show(ctx, Self::render_command_bar)
            .inner;
        commands.extend(bar);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_editor(ui);
        });

        if let Some(path) = Self::dropped_file(ctx) {
            self.open_path(ctx, &path);
        }
        for command in commands {
            self.run(ctx, command);
        }

        if let Some(notice) = &self.error_notice {
            if Self::render_error_notice(ctx, notice) {
                self.error_notice = None;
            }
        }

        self.sync_title(ctx);
    }
}
