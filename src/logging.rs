/// Inicializa el logging de escritorio: subscriber `fmt` de tracing con
/// `EnvFilter`. Los registros de la fachada `log` también se capturan.
#[cfg(not(target_arch = "wasm32"))]
pub fn setup_logging(filter: &str) {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Filtro de log inválido {filter:?} ({e}), se usa info");
        EnvFilter::new("info")
    });

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
    {
        eprintln!("No se pudo inicializar el logging: {e}");
        return;
    }

    log::info!("Logging inicializado: filtro={filter}");
}

/// En la web los registros van a la consola del navegador.
#[cfg(target_arch = "wasm32")]
pub fn setup_logging(_filter: &str) {
    if eframe::WebLogger::init(log::LevelFilter::Debug).is_err() {
        return;
    }
    log::info!("Logging web inicializado");
}
