use crate::app::Academy;
use crate::code_utils::html_syntax;
use crate::pages::PageOrigin;
use crate::ui::layout::code_editor_solution;
use egui::{CentralPanel, Context, RichText, ScrollArea};

pub fn ui_page(app: &mut Academy, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let Some(mounted) = app.shelf.active() else {
            ui.label("No hay ninguna lección seleccionada.");
            return;
        };
        let page = &mounted.page;

        // Id nuevo en cada navegación: el scroll vuelve arriba
        ScrollArea::vertical()
            .id_salt(("page", app.page_visits))
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(8.0);
                ui.heading(RichText::new(&page.title).size(26.0).strong());
                if let Some(subtitle) = &page.subtitle {
                    ui.label(RichText::new(subtitle).italics().weak());
                }
                if mounted.origin == PageOrigin::Synthesized {
                    ui.small("Página generada");
                }
                ui.separator();

                for paragraph in &page.paragraphs {
                    ui.label(paragraph);
                    ui.add_space(6.0);
                }

                if let Some(example) = &page.example {
                    ui.add_space(8.0);
                    ui.label(RichText::new("Ejemplo").strong());
                    code_editor_solution(
                        ui,
                        "page_example",
                        example,
                        app.session.theme,
                        html_syntax(),
                        320.0,
                    );
                }
            });
    });
}
