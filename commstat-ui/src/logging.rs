//! Logger setup for native hosts and the browser.

/// Installs the process logger once; later calls are ignored.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    init_env_logger();

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    crate::web::console::init(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn init_env_logger() {
    use env_logger::{Builder, Target};
    use log::LevelFilter;

    let result = if std::env::var("RUST_LOG").is_err() {
        Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Warn)
            .filter_module("commstat_ui", LevelFilter::Debug)
            .filter_module("commstat_config", LevelFilter::Debug)
            .try_init()
    } else {
        env_logger::try_init()
    };

    if result.is_err() {
        log::debug!("logger already initialized");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    #[test]
    fn init_is_repeatable() {
        super::init();
        super::init();
        log::debug!("logger still usable");
    }
}
