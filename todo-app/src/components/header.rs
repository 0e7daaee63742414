use eframe::egui;
use todo_core::persist::SaveSink;
use todo_core::screen::TodoScreen;

pub fn header<P: SaveSink>(ui: &mut egui::Ui, screen: &mut TodoScreen<P>) {
    ui.horizontal(|ui| {
        ui.heading("Todo List");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if screen.theme().scheme().is_dark() {
                "Light mode"
            } else {
                "Dark mode"
            };
            if ui.button(label).clicked() {
                screen.toggle_color_scheme();
            }
        });
    });
}
