use egui::{Align, Context, Layout, RichText, ScrollArea, TextStyle, Ui};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};
use crate::app::{Academy, UiEvent};
use crate::code_utils::gutter_lines;
use crate::model::Theme;
use super::helpers::progress_ring;

pub fn top_panel(app: &mut Academy, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&app.labels.module).small().strong());
                ui.heading(&app.labels.lesson);
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let view = app.progress_view();
                progress_ring(ui, &view, 20.0);
                ui.label(format!("{}/{} lecciones", view.completed, view.total));
            });
        });
    });
}

pub fn bottom_panel(app: &mut Academy, ctx: &Context, now: f64) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(text) = app.visible_toast(now) {
                ui.label(format!("🔔 {text}"));
            }

            // ----------- BOTÓN DE TEMA -----------
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let icon = match app.session.theme {
                    Theme::Dark => "🌙",
                    Theme::Light => "☀",
                };
                if ui.button(format!("{icon} {}", app.session.theme.label())).clicked() {
                    app.dispatch(UiEvent::ToggleTheme);
                }
            });
        });
    });
}

fn editor_theme(theme: Theme) -> ColorTheme {
    match theme {
        Theme::Dark => ColorTheme::GITHUB_DARK,
        Theme::Light => ColorTheme::GITHUB_LIGHT,
    }
}

/// Editor con gutter propio. Ambos viven en el mismo ScrollArea, así el
/// desplazamiento del gutter sigue al del texto.
/// Devuelve el texto nuevo si hubo edición.
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    text: &str,
    theme: Theme,
    syntax: Syntax,
    max_height: f32,
) -> Option<String> {
    let mut buf = text.to_owned();
    let font_id = TextStyle::Monospace.resolve(ui.style());
    let fontsize = font_id.size;

    ScrollArea::vertical()
        .id_salt(id)
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    for n in gutter_lines(&buf) {
                        ui.label(RichText::new(n).monospace().weak());
                    }
                });
                CodeEditor::default()
                    .id_source(id)
                    .with_rows(20)
                    .with_fontsize(fontsize)
                    .with_theme(editor_theme(theme))
                    .with_syntax(syntax)
                    .with_numlines(false)
                    .vscroll(false)
                    .show(ui, &mut buf);
            });
        });

    (buf != text).then_some(buf)
}

/// Editor de sólo lectura (ejemplos y documento generado)
pub fn code_editor_solution(
    ui: &mut Ui,
    id: &str,
    code: &str,
    theme: Theme,
    syntax: Syntax,
    max_height: f32,
) {
    let mut buf = code.to_owned();
    let font_id = TextStyle::Monospace.resolve(ui.style());
    ScrollArea::vertical()
        .id_salt(id)
        .max_height(max_height)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            CodeEditor::default()
                .id_source(id)
                .with_rows(code.lines().count().max(1))
                .with_fontsize(font_id.size)
                .with_theme(editor_theme(theme))
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, &mut buf);
        });
}
