//! Loads all sources and writes the standalone comparison dashboard.

use sigview::config::{DashboardConfig, CONFIG_FILE};
use sigview::{DashboardController, HtmlDashboard};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::load_or_default(CONFIG_FILE)?;
    let (controller, report) = DashboardController::from_config(&config);
    if report.skipped() > 0 {
        log::warn!("{} source(s) skipped", report.skipped());
    }

    HtmlDashboard::new(&controller, &config).save(&config.output)?;
    println!(
        "Done! Open '{}' to view your presentation.",
        config.output.display()
    );
    Ok(())
}
