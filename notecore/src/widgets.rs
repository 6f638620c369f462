//! Custom widgets

use crate::theme::NoteColors;
use egui::{Color32, Response, Rounding, Ui, Widget};

/// A filled command-bar button: accent background, darker when hovered.
pub struct CommandButton<'a> {
    text: &'a str,
    fill: Color32,
    hover_fill: Color32,
    min_width: f32,
}

impl<'a> CommandButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            fill: NoteColors::BLUE,
            hover_fill: NoteColors::BLUE_HOVER,
            min_width: 72.0,
        }
    }

    /// Red variant used for Exit.
    pub fn danger(text: &'a str) -> Self {
        Self::new(text).fill(NoteColors::RED, NoteColors::RED_HOVER)
    }

    pub fn fill(mut self, fill: Color32, hover_fill: Color32) -> Self {
        self.fill = fill;
        self.hover_fill = hover_fill;
        self
    }
}

impl<'a> Widget for CommandButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let font = egui::TextStyle::Button.resolve(ui.style());
        let galley = ui.painter().layout_no_wrap(self.text.to_string(), font, NoteColors::BUTTON_TEXT);
        let padding = ui.spacing().button_padding;
        let size = egui::vec2(
            (galley.size().x + padding.x * 2.0).max(self.min_width),
            (galley.size().y + padding.y * 2.0).max(ui.spacing().interact_size.y + 4.0),
        );
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() || response.is_pointer_button_down_on() {
                self.hover_fill
            } else {
                self.fill
            };
            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(6.0), fill);
            let text_pos = rect.center() - galley.size() / 2.0;
            painter.galley(text_pos, galley, NoteColors::BUTTON_TEXT);
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

/// Strip along the bottom of the window holding the command buttons.
pub fn command_bar<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(egui::Margin::symmetric(4.0, 6.0))
        .show(ui, |ui| ui.horizontal_wrapped(add_contents).inner)
}
