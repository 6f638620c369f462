//! Notepad theme — follows the system light/dark setting
//!
//! Stock egui visuals with a blue accent for buttons and selection.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use serde::{Deserialize, Serialize};

/// Accent colors shared by both light and dark visuals.
pub struct NoteColors;

impl NoteColors {
    pub const BLUE: Color32 = Color32::from_rgb(0x1f, 0x6a, 0xa5);
    pub const BLUE_HOVER: Color32 = Color32::from_rgb(0x14, 0x48, 0x70);
    pub const RED: Color32 = Color32::from_rgb(0xd0, 0x20, 0x20);
    pub const RED_HOVER: Color32 = Color32::from_rgb(0xbb, 0x22, 0x22);
    pub const BUTTON_TEXT: Color32 = Color32::from_rgb(0xdc, 0xe4, 0xee);
}

/// Which appearance to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the OS.
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Whether dark visuals should be used. An unknown system theme means light.
    pub fn is_dark(self, system: Option<eframe::Theme>) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(system, Some(eframe::Theme::Dark)),
        }
    }
}

/// Theme configuration for the editor window
pub struct NoteTheme {
    pub font_size_body: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for NoteTheme {
    fn default() -> Self {
        Self {
            font_size_body: 13.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 6.0,
        }
    }
}

impl NoteTheme {
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size_body = size.clamp(8.0, 48.0);
        self
    }

    /// Apply light or dark visuals to an egui context
    pub fn apply(&self, ctx: &egui::Context, dark: bool) {
        ctx.set_style(self.style(dark));
    }

    pub fn style(&self, dark: bool) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_body * 1.6, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };

        visuals.selection.bg_fill = NoteColors::BLUE;
        visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.hyperlink_color = NoteColors::BLUE;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, NoteColors::BLUE);
        visuals.widgets.active.bg_fill = NoteColors::BLUE_HOVER;

        let rounding = Rounding::same(6.0);
        visuals.widgets.inactive.rounding = rounding;
        visuals.widgets.hovered.rounding = rounding;
        visuals.widgets.active.rounding = rounding;
        visuals.window_rounding = Rounding::same(8.0);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(12.0, 4.0);

        style
    }
}

/// Tracks the last applied appearance so visuals are only rebuilt on change.
#[derive(Default)]
pub struct ThemeTracker {
    applied_dark: Option<bool>,
}

impl ThemeTracker {
    /// Returns the new dark flag when the theme must be (re)applied.
    ///
    /// `visuals_dark` is what the context currently shows; eframe swaps in
    /// stock visuals on OS theme changes, which also has to be undone.
    pub fn update(
        &mut self,
        mode: ThemeMode,
        system: Option<eframe::Theme>,
        visuals_dark: bool,
    ) -> Option<bool> {
        let dark = mode.is_dark(system);
        if self.applied_dark == Some(dark) && visuals_dark == dark {
            None
        } else {
            self.applied_dark = Some(dark);
            Some(dark)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_resolution() {
        assert!(ThemeMode::Dark.is_dark(Some(eframe::Theme::Light)));
        assert!(!ThemeMode::Light.is_dark(Some(eframe::Theme::Dark)));
        assert!(ThemeMode::System.is_dark(Some(eframe::Theme::Dark)));
        assert!(!ThemeMode::System.is_dark(Some(eframe::Theme::Light)));
        assert!(!ThemeMode::System.is_dark(None));
    }

    #[test]
    fn test_tracker_only_fires_on_change() {
        let light = Some(eframe::Theme::Light);
        let dark = Some(eframe::Theme::Dark);
        let mut tracker = ThemeTracker::default();
        assert_eq!(tracker.update(ThemeMode::System, light, true), Some(false));
        assert_eq!(tracker.update(ThemeMode::System, light, false), None);
        assert_eq!(tracker.update(ThemeMode::System, dark, false), Some(true));
        assert_eq!(tracker.update(ThemeMode::Dark, None, true), None);
    }

    #[test]
    fn test_forced_mode_survives_system_flip() {
        let mut tracker = ThemeTracker::default();
        assert_eq!(tracker.update(ThemeMode::Light, Some(eframe::Theme::Light), true), Some(false));
        assert_eq!(tracker.update(ThemeMode::Light, Some(eframe::Theme::Light), false), None);

        // OS goes dark and the window gets stock dark visuals
        assert_eq!(tracker.update(ThemeMode::Light, Some(eframe::Theme::Dark), true), Some(false));
        assert_eq!(tracker.update(ThemeMode::Light, Some(eframe::Theme::Dark), false), None);
    }

    #[test]
    fn test_style_follows_dark_flag() {
        let theme = NoteTheme::default().with_font_size(15.0);
        assert!(theme.style(true).visuals.dark_mode);
        assert!(!theme.style(false).visuals.dark_mode);
        assert_eq!(theme.font_size_body, 15.0);
    }
}
