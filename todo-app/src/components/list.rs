use eframe::egui;
use todo_core::persist::SaveSink;
use todo_core::screen::TodoScreen;

use crate::style::color;

enum RowAction {
    Toggle(u64),
    Delete(u64),
    Open(u64),
}

pub fn todo_list<P: SaveSink>(ui: &mut egui::Ui, screen: &mut TodoScreen<P>) {
    let theme = *screen.theme().theme();

    if screen.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading…");
        });
        return;
    }

    if screen.items().is_empty() {
        ui.label(egui::RichText::new("Nothing to do.").color(color(theme.muted)));
        return;
    }

    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for item in screen.items() {
                ui.horizontal(|ui| {
                    let mut completed = item.completed;
                    if ui.checkbox(&mut completed, "").clicked() {
                        action = Some(RowAction::Toggle(item.id));
                    }

                    let text = egui::RichText::new(&item.title).size(18.0);
                    let text = if item.completed {
                        text.strikethrough().color(color(theme.muted))
                    } else {
                        text.color(color(theme.text))
                    };

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete = egui::Button::new(
                            egui::RichText::new("🗑").size(22.0).color(color(theme.danger)),
                        )
                        .frame(false);
                        if ui.add(delete).on_hover_text("Delete").clicked() {
                            action = Some(RowAction::Delete(item.id));
                        }

                        ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                            let title = ui.add(
                                egui::Label::new(text).sense(egui::Sense::click()).truncate(),
                            );
                            // Long press on touch screens, right click elsewhere.
                            if title.long_touched() || title.secondary_clicked() {
                                action = Some(RowAction::Toggle(item.id));
                            } else if title.clicked() {
                                action = Some(RowAction::Open(item.id));
                            }
                        });
                    });
                });
                ui.separator();
            }
        });

    match action {
        Some(RowAction::Toggle(id)) => {
            screen.toggle_item(id);
        }
        Some(RowAction::Delete(id)) => {
            screen.delete_item(id);
        }
        Some(RowAction::Open(id)) => {
            screen.open_item(id);
        }
        None => {}
    }
}
