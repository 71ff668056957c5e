mod app;
mod controls;
mod status;

use dabble_engine::device::GpuInit;
use dabble_engine::logging::{init_logging, LoggingConfig};
use dabble_engine::window::{Runtime, RuntimeConfig};

use crate::app::{StudioApp, TITLE};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("dabble studio stopped: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    log::info!("{}", controls::HELP);

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        ..RuntimeConfig::default()
    };
    // Unconverted colors, as a WebGL canvas shows them.
    let gpu_init = GpuInit {
        prefer_srgb: false,
        ..GpuInit::default()
    };

    Runtime::run(config, gpu_init, StudioApp::new())
}
