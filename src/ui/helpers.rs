// src/ui/helpers.rs
use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};
use crate::app::view_models::ProgressView;
use crate::model::RING_CIRCUMFERENCE;

/// Anillo de progreso con el porcentaje redondeado en el centro.
pub fn progress_ring(ui: &mut Ui, view: &ProgressView, radius: f32) {
    let size = Vec2::splat(radius * 2.0 + 6.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let center = response.rect.center();
    let visuals = ui.visuals();

    painter.circle_stroke(center, radius, Stroke::new(4.0, visuals.widgets.inactive.bg_fill));

    // Fracción pintada = 1 - offset / circunferencia
    let filled = 1.0 - view.dash_offset / RING_CIRCUMFERENCE;
    if filled > 0.0 {
        let steps = ((filled * 64.0).ceil() as usize).max(2);
        let points: Vec<Pos2> = (0..=steps)
            .map(|i| {
                let angle = -FRAC_PI_2 + TAU * filled * i as f32 / steps as f32;
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
        painter.add(Shape::line(points, Stroke::new(4.0, Color32::from_rgb(0xE3, 0x4F, 0x26))));
    }

    painter.text(
        center,
        Align2::CENTER_CENTER,
        &view.percent_label,
        FontId::proportional(11.0),
        visuals.text_color(),
    );
    response.on_hover_text(format!("{} de {} lecciones visitadas", view.completed, view.total));
}
