//! Error and information dialogs

use eframe::egui;

use colorpicker_core::{Notice, Severity};

use super::UiAction;

/// Render `notice` as a centered dialog and return any action.
pub fn show_notice(ctx: &egui::Context, notice: &Notice) -> Option<UiAction> {
    let mut action = None;

    egui::Window::new(notice.title.as_str())
        .id(egui::Id::new("notice_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            match notice.severity {
                Severity::Error => ui.colored_label(egui::Color32::RED, &notice.message),
                Severity::Info => ui.label(&notice.message),
            };

            if !notice.details.is_empty() {
                ui.separator();
                egui::ScrollArea::vertical()
                    .max_height(160.0)
                    .show(ui, |ui| {
                        for line in &notice.details {
                            ui.monospace(line);
                        }
                    });
            }

            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                action = Some(UiAction::DismissNotice);
            }
        });

    action
}
