//! Mapping from the core palette to egui visuals.

use eframe::egui::{Color32, Visuals};
use todo_core::theme::{Rgb, ThemeState};

pub fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

pub fn visuals(state: &ThemeState) -> Visuals {
    let theme = state.theme();
    let mut visuals = if state.scheme().is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.panel_fill = color(theme.background);
    visuals.window_fill = color(theme.surface);
    // Text edit background.
    visuals.extreme_bg_color = color(theme.surface);
    visuals.override_text_color = Some(color(theme.text));
    visuals
}
