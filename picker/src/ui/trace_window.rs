//! Execution trace window
//!
//! Opens as its own native window when the backend supports extra viewports,
//! and as a floating egui window otherwise.

use eframe::egui;

use colorpicker_core::TraceLog;

use super::UiAction;

const TRACE_SIZE: [f32; 2] = [600.0, 400.0];

/// Render the trace lines with a Clear button.
pub fn show_trace_window(ctx: &egui::Context, trace: &TraceLog) -> Option<UiAction> {
    ctx.show_viewport_immediate(
        egui::ViewportId::from_hash_of("execution_trace"),
        egui::ViewportBuilder::default()
            .with_title("Execution Trace")
            .with_inner_size(TRACE_SIZE),
        |ctx, class| {
            if matches!(class, egui::ViewportClass::Embedded) {
                return egui::Window::new("Execution Trace")
                    .default_size(TRACE_SIZE)
                    .show(ctx, |ui| trace_contents(ui, trace))
                    .and_then(|response| response.inner.flatten());
            }

            let action = egui::CentralPanel::default()
                .show(ctx, |ui| trace_contents(ui, trace))
                .inner;
            if ctx.input(|i| i.viewport().close_requested()) {
                return Some(UiAction::CloseTrace);
            }
            action
        },
    )
}

fn trace_contents(ui: &mut egui::Ui, trace: &TraceLog) -> Option<UiAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("Clear").clicked() {
            action = Some(UiAction::ClearTrace);
        }
        ui.label(format!("{} lines", trace.len()));
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in trace.lines() {
                ui.monospace(line.to_string());
            }
        });

    action
}
