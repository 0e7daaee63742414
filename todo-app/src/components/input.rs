use eframe::egui;
use todo_core::persist::SaveSink;
use todo_core::screen::TodoScreen;

use crate::style::color;

pub fn todo_input<P: SaveSink>(ui: &mut egui::Ui, screen: &mut TodoScreen<P>) {
    let theme = *screen.theme().theme();
    let max_len = screen.max_title_len();
    let ready = !screen.is_loading();

    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let add_button = egui::Button::new(
            egui::RichText::new("Add")
                .strong()
                .size(18.0)
                .color(color(theme.button_text)),
        )
        .fill(color(theme.button));
        let add = ui.add_enabled(ready, add_button);

        let text_edit = ui.add(
            egui::TextEdit::singleline(screen.input_mut())
                .hint_text(egui::RichText::new("Add a new todo").color(color(theme.muted)))
                .char_limit(max_len)
                .font(egui::FontId::proportional(18.0))
                .desired_width(f32::INFINITY),
        );

        if add.clicked()
            || text_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
        {
            if screen.add_item() {
                text_edit.request_focus();
            }
        }
    });
}
