use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system.
///
/// Safe to call more than once; only the first call configures the logger,
/// so tests and embedding binaries can both call it freely.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .filter_module("ementa", log::LevelFilter::Debug)
            .filter_module("tokio", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();
    });
}
