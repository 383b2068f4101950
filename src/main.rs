use lesson_academy::logging::setup_logging;
use lesson_academy::{Academy, AcademyConfig};

const TITLE: &str = "Academia HTML5";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let config = AcademyConfig::from_env();
    setup_logging(&config.log_filter);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(Academy::from_config(&config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    let config = AcademyConfig::from_env();
    setup_logging(&config.log_filter);

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("No se encontró el canvas the_canvas_id");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| Ok(Box::new(Academy::from_config(&config)))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("No se pudo arrancar {TITLE}: {e:?}");
        }
    });
}
