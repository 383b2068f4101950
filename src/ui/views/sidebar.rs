use crate::app::{Academy, UiEvent};
use egui::{CollapsingHeader, Context, ScrollArea};

/// Menú de módulos y lecciones. Cada elemento lleva su token "modulo-leccion".
pub fn ui_sidebar(app: &mut Academy, ctx: &Context) {
    egui::SidePanel::left("nav_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Temario");
            ui.separator();

            let active_module = app.session.active_module();
            let mut clicked = None;

            ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                for group in app.nav_groups() {
                    CollapsingHeader::new(group.header())
                        .id_salt(("module", group.number))
                        .default_open(group.number == active_module)
                        .show(ui, |ui| {
                            for item in &group.items {
                                if ui.selectable_label(item.active, item.label()).clicked() {
                                    clicked = Some(item.id.to_string());
                                }
                            }
                        });
                }
            });

            if let Some(token) = clicked {
                app.dispatch(UiEvent::NavItem(token));
            }
        });
}
