//! Opens the comparison dashboard in a native window.

use sigview::config::{DashboardConfig, CONFIG_FILE};
use sigview::{run_viewer, DashboardController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::load_or_default(CONFIG_FILE)?;
    let (controller, report) = DashboardController::from_config(&config);
    let notes = report.notes().collect();

    run_viewer(controller, config, notes)?;
    Ok(())
}
