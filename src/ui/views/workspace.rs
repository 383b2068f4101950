use crate::app::{Academy, UiEvent};
use crate::code_utils::{html_syntax, line_count};
use crate::ui::layout::{code_editor_input, code_editor_solution};
use egui::{Context, RichText};

/// Panel del IDE: editor con gutter, botones y vista previa.
pub fn ui_workspace(app: &mut Academy, ctx: &Context) {
    egui::SidePanel::right("ide_panel")
        .resizable(true)
        .default_width(520.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button("▶ Ejecutar")
                    .on_hover_text("Ctrl + Enter")
                    .clicked()
                {
                    app.dispatch(UiEvent::Run);
                }
                if ui.button("🗑 Limpiar").clicked() {
                    app.dispatch(UiEvent::Clear);
                }
                ui.label(
                    RichText::new(format!("{} líneas", line_count(&app.session.draft))).weak(),
                );
            });
            ui.add_space(4.0);

            let editor_height = (ui.available_height() * 0.5).max(160.0);
            if let Some(text) = code_editor_input(
                ui,
                "code_in",
                &app.session.draft,
                app.session.theme,
                html_syntax(),
                editor_height,
            ) {
                app.dispatch(UiEvent::EditorInput(text));
            }

            ui.separator();
            ui_preview(app, ui);
        });
}

fn ui_preview(app: &mut Academy, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Vista previa").strong());
        if let Some(url) = app.preview_location() {
            ui.hyperlink_to("Abrir en el navegador", url);
        }
    });

    let Some(document) = app.preview.current() else {
        ui.label("Pulsa Ejecutar para generar la vista previa.");
        return;
    };
    ui.small(format!("Render #{}", document.generation()));
    let height = ui.available_height();
    code_editor_solution(
        ui,
        "live_out",
        document.html(),
        app.session.theme,
        html_syntax(),
        height,
    );
}
