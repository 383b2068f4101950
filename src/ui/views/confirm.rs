use crate::app::{Academy, UiEvent};
use egui::Context;

/// Confirmación antes de vaciar el editor. "No" deja todo como estaba.
pub fn ui_confirm_clear(app: &mut Academy, ctx: &Context) {
    egui::Window::new("Limpiar editor")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("¿Deseas borrar el editor?");
            ui.horizontal(|ui| {
                if ui.button("Sí, borrar").clicked() {
                    app.dispatch(UiEvent::ClearConfirmed);
                }
                if ui.button("No").clicked() {
                    app.dispatch(UiEvent::ClearDeclined);
                }
            });
        });
}
