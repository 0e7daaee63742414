use eframe::egui;
use todo_core::persist::SaveSink;
use todo_core::screen::TodoScreen;

use crate::style::color;

/// Destination for `/todos/{id}`.
pub fn todo_detail<P: SaveSink>(ui: &mut egui::Ui, screen: &mut TodoScreen<P>) {
    let theme = *screen.theme().theme();
    let route = screen.route();

    if ui.button("Back").clicked() {
        screen.go_back();
        return;
    }
    ui.add_space(8.0);

    let Some(item) = screen.selected_item().cloned() else {
        ui.label(format!("Nothing at {route}"));
        return;
    };

    ui.label(egui::RichText::new(&item.title).size(24.0).strong());
    ui.label(egui::RichText::new(route.path()).monospace().color(color(theme.muted)));
    ui.add_space(4.0);
    ui.label(if item.completed { "Completed" } else { "Open" });
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let toggle_label = if item.completed {
            "Mark as open"
        } else {
            "Mark as done"
        };
        if ui.button(toggle_label).clicked() {
            screen.toggle_item(item.id);
        }

        let delete = egui::Button::new(egui::RichText::new("Delete").color(color(theme.danger)));
        if ui.add(delete).clicked() {
            screen.delete_item(item.id);
        }
    });
}
