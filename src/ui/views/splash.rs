use crate::app::SplashFrame;
use egui::{Align2, Color32, Context, FontId, Id, Order, ProgressBar, Sense};

pub fn ui_splash(ctx: &Context, frame: SplashFrame) {
    let screen = ctx.screen_rect();
    egui::Area::new(Id::new("app_splash"))
        .order(Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            // Bloquea los clics mientras la pantalla de carga está visible
            ui.allocate_rect(screen, Sense::click());
            let painter = ui.painter();
            painter.rect_filled(screen, 0.0, Color32::from_rgb(0x12, 0x12, 0x16));
            painter.text(
                screen.center() - egui::vec2(0.0, 40.0),
                Align2::CENTER_CENTER,
                "ACADEMIA HTML5",
                FontId::proportional(32.0),
                Color32::from_rgb(0xE3, 0x4F, 0x26),
            );

            let bar_width = (screen.width() * 0.4).max(200.0);
            let bar_rect = egui::Rect::from_center_size(
                screen.center() + egui::vec2(0.0, 10.0),
                egui::vec2(bar_width, 8.0),
            );
            ui.put(bar_rect, ProgressBar::new(frame.bar).desired_width(bar_width));
        });
}
