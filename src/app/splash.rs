use super::*;

/// Estado de la pantalla de carga en un instante dado.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplashFrame {
    pub bar: f32,
    pub visible: bool,
}

/// Hitos (segundo, ancho de barra) de la animación de arranque
const STEPS: [(f64, f32); 3] = [(0.2, 0.4), (0.7, 0.7), (1.3, 1.0)];
const FADE_AT: f64 = 1.8;

pub const WELCOME: &str = "Bienvenido a la Academia HTML5";

pub fn splash_frame(elapsed: f64) -> SplashFrame {
    let bar = STEPS
        .iter()
        .rev()
        .find(|(at, _)| elapsed >= *at)
        .map(|(_, width)| *width)
        .unwrap_or(0.0);
    SplashFrame {
        bar,
        visible: elapsed < FADE_AT,
    }
}

#[derive(Clone, Debug, Default)]
pub struct Splash {
    started_at: Option<f64>,
    done: bool,
}

impl Splash {
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Academy {
    /// Avanza la animación; al terminar muestra el aviso de bienvenida una vez.
    pub fn tick_splash(&mut self, now: f64) -> SplashFrame {
        if self.splash.done {
            return SplashFrame {
                bar: 1.0,
                visible: false,
            };
        }
        let started = *self.splash.started_at.get_or_insert(now);
        let frame = splash_frame(now - started);
        if !frame.visible {
            self.splash.done = true;
            self.show_toast(WELCOME);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::MemorySurface;

    #[test]
    fn bar_follows_the_fixed_schedule() {
        assert_eq!(splash_frame(0.0).bar, 0.0);
        assert_eq!(splash_frame(0.2).bar, 0.4);
        assert_eq!(splash_frame(1.0).bar, 0.7);
        assert_eq!(splash_frame(1.5).bar, 1.0);
        assert!(splash_frame(1.79).visible);
        assert!(!splash_frame(1.8).visible);
    }

    #[test]
    fn welcome_toast_appears_once() {
        let mut academy = Academy::new(
            PreferenceStore::in_memory(),
            Box::new(MemorySurface::default()),
            Catalog::default(),
        );
        assert!(academy.tick_splash(5.0).visible);
        assert!(academy.toast.is_none());

        assert!(!academy.tick_splash(7.0).visible);
        assert!(academy.splash.is_done());
        assert_eq!(academy.toast.as_ref().map(|t| t.text.as_str()), Some(WELCOME));

        academy.toast = None;
        academy.tick_splash(9.0);
        assert!(academy.toast.is_none());
    }
}
