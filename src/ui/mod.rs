mod helpers;
pub mod layout;
pub mod views;

use crate::app::{Academy, UiEvent};
use crate::model::Theme;
use eframe::{App, Frame};
use egui::{Context, Key, Modifiers, Visuals};
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for Academy {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.sync_visuals(ctx);
        let now = ctx.input(|i| i.time);
        let splash = self.tick_splash(now);

        // Ctrl + Enter: se consume antes de que el editor inserte el salto de línea
        if ctx.input_mut(|i| i.consume_key(Modifiers::CTRL, Key::Enter)) {
            self.dispatch(UiEvent::RunShortcut);
        }

        // Orden de paneles: laterales antes que el central
        top_panel(self, ctx);
        bottom_panel(self, ctx, now);
        views::sidebar::ui_sidebar(self, ctx);
        views::workspace::ui_workspace(self, ctx);
        views::page::ui_page(self, ctx);

        if self.confirm_clear {
            views::confirm::ui_confirm_clear(self, ctx);
        }

        if splash.visible {
            views::splash::ui_splash(ctx, splash);
            ctx.request_repaint_after(Duration::from_millis(50));
        } else if self.toast.is_some() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

impl Academy {
    fn sync_visuals(&mut self, ctx: &Context) {
        let theme = self.session.theme;
        if self.applied_theme == Some(theme) {
            return;
        }
        ctx.set_visuals(match theme {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        });
        self.applied_theme = Some(theme);
    }
}
