// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use disappearing_text::app::App;
use disappearing_text_config::Config;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Routes log::info!() etc. to the temp-dir debug log. RUST_LOG also
    // mirrors to stderr; otherwise the config level applies once loaded.
    disappearing_text::debug::init_log_bridge();

    log::info!(
        "Starting disappearing text writing app v{}",
        disappearing_text::VERSION
    );

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            // The activity log location comes from the config itself, so a
            // broken file is reported against the defaults.
            App::error_reporter(&Config::default()).report("load_config", &e);
            return Err(e.into());
        }
    };

    // Runtime for the async GPU adapter/device setup
    let runtime = Arc::new(Runtime::new()?);

    let app = App::new(Arc::clone(&runtime), config);
    let result = app.run();

    log::info!("Event loop exited, shutting down runtime");
    if let Ok(rt) = Arc::try_unwrap(runtime) {
        rt.shutdown_timeout(std::time::Duration::from_secs(2));
    }

    if let Err(ref e) = result {
        eprintln!("disappearing-text: error: {e:#}");
        #[cfg(target_os = "linux")]
        {
            let msg = format!("{e:?}").to_lowercase();
            if msg.contains("display") || msg.contains("wayland") || msg.contains("x server") {
                eprintln!(
                    "disappearing-text: hint: no display server found, ensure DISPLAY (X11) or \
                     WAYLAND_DISPLAY (Wayland) is set"
                );
            }
        }
    }
    result
}
